use crate::category::{classify, Category, RankCounts};
use crate::compare::Verdict;
use crate::hand::Hand;

/// Orders two hands that share a category.
///
/// Each category has its own list of secondary keys, compared left to right;
/// the first difference decides and running out of keys is a tie. Only the
/// keys below are consulted, so this is not full kicker ranking:
///
/// | Category        | Keys                                      |
/// |-----------------|-------------------------------------------|
/// | High Card       | none (always a tie)                       |
/// | One Pair        | pair, highest unpaired card               |
/// | Two Pair        | higher pair, lower pair                   |
/// | Three of a Kind | triple, pair (absent unless a full house) |
/// | Straight        | highest card                              |
/// | Flush           | every card, highest first                 |
/// | Full House      | triple, pair                              |
/// | Four of a Kind  | quad                                      |
/// | Straight Flush  | highest card                              |
///
/// The One Pair kicker is the highest of the three unpaired cards, whatever
/// order the cards were entered in.
pub fn resolve_tie(first: &Hand, second: &Hand) -> Verdict {
    let category = classify(first);
    debug_assert_eq!(
        category,
        classify(second),
        "tie-break requires hands of the same category"
    );
    let a = tie_break_keys(category, first);
    let b = tie_break_keys(category, second);
    Verdict::from_ordering(a.cmp(&b))
}

/// Secondary keys as rank weights, most significant first. A missing rank
/// is encoded as 0, below every real weight.
pub fn tie_break_keys(category: Category, hand: &Hand) -> Vec<u8> {
    let counts = RankCounts::from_hand(hand);
    let weight_of = |n: u8| counts.highest_with_count(n).map_or(0, |r| r.weight());

    match category {
        Category::HighCard => Vec::new(),
        Category::OnePair => vec![weight_of(2), weight_of(1)],
        Category::TwoPair => {
            let pairs = counts.ranks_with_count(2);
            let high = pairs.last().map_or(0, |r| r.weight());
            let low = pairs.first().map_or(0, |r| r.weight());
            vec![high, low]
        }
        Category::ThreeOfAKind | Category::FullHouse => vec![weight_of(3), weight_of(2)],
        Category::Straight | Category::StraightFlush => vec![hand.highest_rank().weight()],
        Category::Flush => hand
            .ranks_ascending()
            .iter()
            .rev()
            .map(|r| r.weight())
            .collect(),
        Category::FourOfAKind => vec![weight_of(4)],
    }
}
