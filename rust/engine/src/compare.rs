use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{classify, Category};
use crate::errors::ParseError;
use crate::hand::{parse_hand, Hand};
use crate::tiebreak::resolve_tie;

/// Outcome of comparing a first hand against a second.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    FirstWins,
    SecondWins,
    Tie,
}

impl Verdict {
    /// Maps `first.cmp(second)` onto a verdict.
    pub fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Verdict::FirstWins,
            Ordering::Less => Verdict::SecondWins,
            Ordering::Equal => Verdict::Tie,
        }
    }

    /// The verdict with the two hands swapped.
    pub fn reversed(self) -> Self {
        match self {
            Verdict::FirstWins => Verdict::SecondWins,
            Verdict::SecondWins => Verdict::FirstWins,
            Verdict::Tie => Verdict::Tie,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::FirstWins => "Hand 1 is stronger",
            Verdict::SecondWins => "Hand 2 is stronger",
            Verdict::Tie => "It's a tie!",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Decides which of two hands is stronger.
///
/// A higher category wins outright; equal categories go to [`resolve_tie`].
///
/// ```rust
/// use showdown_engine::compare::{compare, Verdict};
/// use showdown_engine::hand::parse_hand;
///
/// let quad_aces = parse_hand("AH AD AC AS 2H").unwrap();
/// let quad_kings = parse_hand("KH KD KC KS 2H").unwrap();
/// assert_eq!(compare(&quad_aces, &quad_kings), Verdict::FirstWins);
/// ```
pub fn compare(first: &Hand, second: &Hand) -> Verdict {
    let a = classify(first);
    let b = classify(second);
    match a.cmp(&b) {
        Ordering::Equal => resolve_tie(first, second),
        ord => Verdict::from_ordering(ord),
    }
}

/// Parses both hands and compares them. The first parse failure is returned.
pub fn compare_text(first: &str, second: &str) -> Result<Verdict, ParseError> {
    let first = parse_hand(first)?;
    let second = parse_hand(second)?;
    Ok(compare(&first, &second))
}

/// Both hands with their categories and the verdict, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showdown {
    pub first: Hand,
    pub second: Hand,
    pub first_category: Category,
    pub second_category: Category,
    pub verdict: Verdict,
}

impl Showdown {
    pub fn evaluate(first: Hand, second: Hand) -> Self {
        Self {
            first_category: classify(&first),
            second_category: classify(&second),
            verdict: compare(&first, &second),
            first,
            second,
        }
    }

    pub fn message(&self) -> &'static str {
        self.verdict.message()
    }
}
