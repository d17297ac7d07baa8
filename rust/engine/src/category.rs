use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, RANKS};
use crate::hand::Hand;

/// The nine standard hand categories. A higher category beats a lower one
/// regardless of the ranks involved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    /// Numeric code, 1 (High Card) through 9 (Straight Flush).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Category> {
        match code {
            1 => Some(Category::HighCard),
            2 => Some(Category::OnePair),
            3 => Some(Category::TwoPair),
            4 => Some(Category::ThreeOfAKind),
            5 => Some(Category::Straight),
            6 => Some(Category::Flush),
            7 => Some(Category::FullHouse),
            8 => Some(Category::FourOfAKind),
            9 => Some(Category::StraightFlush),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many times each rank occurs in a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankCounts {
    // indexed by rank weight, 2..=14 used
    counts: [u8; 15],
}

impl RankCounts {
    pub fn from_hand(hand: &Hand) -> Self {
        let mut counts = [0u8; 15];
        for card in hand.cards() {
            counts[card.rank.weight() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.counts[rank.weight() as usize]
    }

    /// Ranks occurring exactly `n` times, lowest first.
    pub fn ranks_with_count(&self, n: u8) -> Vec<Rank> {
        RANKS
            .iter()
            .copied()
            .filter(|&r| self.count(r) == n)
            .collect()
    }

    /// Highest rank occurring exactly `n` times.
    pub fn highest_with_count(&self, n: u8) -> Option<Rank> {
        RANKS.iter().rev().copied().find(|&r| self.count(r) == n)
    }
}

/// Shape of a hand as seen by the classification rules.
struct Features {
    single_suit: bool,
    run: bool,
    quads: usize,
    trips: usize,
    pairs: usize,
}

impl Features {
    fn of(hand: &Hand) -> Self {
        let counts = RankCounts::from_hand(hand);
        Self {
            single_suit: hand.is_single_suit(),
            run: is_run(&hand.ranks_ascending()),
            quads: counts.ranks_with_count(4).len(),
            trips: counts.ranks_with_count(3).len(),
            pairs: counts.ranks_with_count(2).len(),
        }
    }
}

type Rule = (Category, fn(&Features) -> bool);

// Checked top to bottom; the first match wins. Several predicates overlap
// (a full house also "has trips"), so the order is load-bearing.
const RULES: [Rule; 8] = [
    (Category::StraightFlush, |f: &Features| f.single_suit && f.run),
    (Category::FourOfAKind, |f: &Features| f.quads == 1),
    (Category::FullHouse, |f: &Features| f.trips == 1 && f.pairs == 1),
    (Category::Flush, |f: &Features| f.single_suit),
    (Category::Straight, |f: &Features| f.run),
    (Category::ThreeOfAKind, |f: &Features| f.trips == 1),
    (Category::TwoPair, |f: &Features| f.pairs == 2),
    (Category::OnePair, |f: &Features| f.pairs == 1),
];

/// Assigns the highest category the hand satisfies.
///
/// Card order is irrelevant. Ace is always high: `A 2 3 4 5` is not a
/// straight.
///
/// ```rust
/// use showdown_engine::category::{classify, Category};
/// use showdown_engine::hand::parse_hand;
///
/// let hand = parse_hand("KH KD KC 2S 2H").unwrap();
/// assert_eq!(classify(&hand), Category::FullHouse);
/// ```
pub fn classify(hand: &Hand) -> Category {
    let features = Features::of(hand);
    RULES
        .iter()
        .find(|(_, matches)| matches(&features))
        .map(|(category, _)| *category)
        .unwrap_or(Category::HighCard)
}

/// True when ascending ranks step up by exactly one weight each time.
fn is_run(ranks_ascending: &[Rank]) -> bool {
    ranks_ascending
        .windows(2)
        .all(|w| w[1].weight() == w[0].weight() + 1)
}
