use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::ParseError;

pub const HAND_SIZE: usize = 5;

/// Exactly five cards, kept in the order they were received.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self { cards }
    }

    /// Cards in their original order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// A copy of the cards sorted by ascending rank weight. The hand itself
    /// is left untouched.
    pub fn sorted_by_rank(&self) -> [Card; HAND_SIZE] {
        let mut sorted = self.cards;
        sorted.sort_by_key(|c| c.rank);
        sorted
    }

    pub fn ranks_ascending(&self) -> [Rank; HAND_SIZE] {
        self.sorted_by_rank().map(|c| c.rank)
    }

    pub fn highest_rank(&self) -> Rank {
        self.ranks_ascending()[HAND_SIZE - 1]
    }

    pub fn is_single_suit(&self) -> bool {
        let suits: HashSet<Suit> = self.cards.iter().map(|c| c.suit).collect();
        suits.len() == 1
    }
}

/// Parses whitespace separated card tokens into a [`Hand`].
///
/// Input is uppercased before validation, so `"ah kd"` and `"AH KD"` are
/// equivalent. Duplicate cards are accepted; see [`ensure_distinct`].
///
/// ```rust
/// use showdown_engine::errors::ParseError;
/// use showdown_engine::hand::parse_hand;
///
/// let hand = parse_hand("2h 4d 6s 8c ad").unwrap();
/// assert_eq!(hand.to_string(), "2H 4D 6S 8C AD");
///
/// assert_eq!(
///     parse_hand("2H 4D 6S"),
///     Err(ParseError::WrongCardCount { found: 3 })
/// );
/// ```
pub fn parse_hand(text: &str) -> Result<Hand, ParseError> {
    let normalized = text.to_uppercase();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() != HAND_SIZE {
        return Err(ParseError::WrongCardCount {
            found: tokens.len(),
        });
    }

    let cards = tokens
        .iter()
        .map(|token| token.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()?;
    let cards: [Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|v: Vec<Card>| ParseError::WrongCardCount { found: v.len() })?;
    Ok(Hand::new(cards))
}

/// Rejects a pair of hands in which any card appears twice, whether inside
/// one hand or across both.
pub fn ensure_distinct(first: &Hand, second: &Hand) -> Result<(), ParseError> {
    let mut seen = HashSet::with_capacity(HAND_SIZE * 2);
    for &card in first.cards().iter().chain(second.cards().iter()) {
        if !seen.insert(card) {
            return Err(ParseError::DuplicateCard { card });
        }
    }
    Ok(())
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hand(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
