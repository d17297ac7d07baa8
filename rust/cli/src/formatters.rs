//! Text and JSON renderings of hands and comparison results.
//!
//! ## Example
//!
//! ```rust
//! use showdown_engine::compare::Showdown;
//! use showdown_engine::hand::parse_hand;
//! use showdown_cli::formatters::format_showdown;
//!
//! let s = Showdown::evaluate(
//!     parse_hand("AH AD AC AS 2H").unwrap(),
//!     parse_hand("KH KD KC KS 2H").unwrap(),
//! );
//! let text = format_showdown(&s);
//! assert!(text.ends_with("Hand 1 is stronger"));
//! ```

use serde_json::{Value, json};
use showdown_engine::category::Category;
use showdown_engine::compare::Showdown;
use showdown_engine::hand::Hand;

/// `"<cards> (<category name>)"`
pub fn format_hand(hand: &Hand, category: Category) -> String {
    format!("{} ({})", hand, category)
}

/// Multi-line summary: one line per hand, then the verdict message.
pub fn format_showdown(s: &Showdown) -> String {
    format!(
        "Hand 1: {}\nHand 2: {}\n{}",
        format_hand(&s.first, s.first_category),
        format_hand(&s.second, s.second_category),
        s.message()
    )
}

pub fn hand_json(hand: &Hand, category: Category) -> Value {
    json!({
        "cards": hand.to_string(),
        "category": category,
        "category_code": category.code(),
        "category_name": category.name(),
    })
}

pub fn showdown_json(s: &Showdown) -> Value {
    json!({
        "hand1": hand_json(&s.first, s.first_category),
        "hand2": hand_json(&s.second, s.second_category),
        "verdict": s.verdict,
        "message": s.message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_engine::hand::parse_hand;

    fn sample() -> Showdown {
        Showdown::evaluate(
            parse_hand("2H 2D 3H 3D 4H").unwrap(),
            parse_hand("2S 2C 5H 5D 4S").unwrap(),
        )
    }

    #[test]
    fn text_lists_both_hands_then_verdict() {
        let text = format_showdown(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Hand 1: 2H 2D 3H 3D 4H (Two Pair)");
        assert_eq!(lines[1], "Hand 2: 2S 2C 5H 5D 4S (Two Pair)");
        assert_eq!(lines[2], "Hand 2 is stronger");
    }

    #[test]
    fn json_shape() {
        let v = showdown_json(&sample());
        assert_eq!(v["hand1"]["cards"], "2H 2D 3H 3D 4H");
        assert_eq!(v["hand1"]["category"], "two_pair");
        assert_eq!(v["hand1"]["category_code"], 3);
        assert_eq!(v["hand2"]["category_name"], "Two Pair");
        assert_eq!(v["verdict"], "second_wins");
        assert_eq!(v["message"], "Hand 2 is stronger");
    }
}
