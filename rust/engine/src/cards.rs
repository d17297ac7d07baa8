use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// One of the four suits. Suits carry no ordering; they only matter for
/// grouping cards when looking for a flush.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts (H)
    Hearts,
    /// Diamonds (D)
    Diamonds,
    /// Clubs (C)
    Clubs,
    /// Spades (S)
    Spades,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Looks up a suit by its canonical uppercase symbol.
    pub fn from_symbol(symbol: char) -> Option<Suit> {
        SUITS.iter().copied().find(|s| s.symbol() == symbol)
    }
}

/// Face value of a card from Two through Ace.
///
/// The discriminant is the rank's weight; all comparisons go through it, so
/// `Rank::Ace > Rank::King` holds even though `'A' < 'K'` as characters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10 (T)
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn weight(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Looks up a rank by its canonical uppercase symbol.
    pub fn from_symbol(symbol: char) -> Option<Rank> {
        RANKS.iter().copied().find(|r| r.symbol() == symbol)
    }
}

/// Every suit, in the order symbols are listed to users.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// Every rank, lowest weight first.
pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// A single playing card. Written as rank symbol followed by suit symbol,
/// e.g. `TD` for the ten of diamonds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses a two-character token such as `"AH"` or `"td"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.to_uppercase();
        let symbols: Vec<char> = token.chars().collect();
        let (rank_symbol, suit_symbol) = match symbols[..] {
            [r, s] => (r, s),
            _ => return Err(ParseError::InvalidCardFormat { token }),
        };
        match (Rank::from_symbol(rank_symbol), Suit::from_symbol(suit_symbol)) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(ParseError::UnknownRankOrSuit { token }),
        }
    }
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &SUITS {
        for &r in &RANKS {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
