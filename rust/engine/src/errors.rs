use thiserror::Error;

use crate::cards::Card;

/// Failures raised while turning raw text into cards and hands.
///
/// Classification and comparison are total over valid hands, so this is the
/// only error type the engine produces.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("A hand must have 5 cards (got {found})")]
    WrongCardCount { found: usize },
    #[error("Invalid card format: {token}. Please provide cards in the format: '2H 4D 6S 8C AD'")]
    InvalidCardFormat { token: String },
    #[error("Invalid card: {token}. Valid ranks: 2 3 4 5 6 7 8 9 T J Q K A, valid suits: H D C S")]
    UnknownRankOrSuit { token: String },
    #[error("Card {card} appears more than once")]
    DuplicateCard { card: Card },
}
