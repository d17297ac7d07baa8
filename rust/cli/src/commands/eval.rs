//! Single-hand evaluation: shows the hand and its category.

use crate::error::CliError;
use showdown_engine::category::classify;
use showdown_engine::hand::parse_hand;
use std::io::Write;

/// Handle the eval command.
///
/// Prints the normalized hand and its category with the numeric code, e.g.
///
/// ```text
/// Hand: 2H 2D 6S 6C TD
/// Strength: Two Pair (3)
/// ```
pub fn handle_eval_command(hand: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hand = parse_hand(hand)?;
    let category = classify(&hand);
    writeln!(out, "Hand: {}", hand)?;
    writeln!(out, "Strength: {} ({})", category, category.code())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_normalized_hand_and_category() {
        let mut out = Vec::new();
        handle_eval_command("9s ts js qs ks", &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "Hand: 9S TS JS QS KS\nStrength: Straight Flush (9)\n");
    }

    #[test]
    fn bad_hand_is_an_error() {
        let mut out = Vec::new();
        assert!(handle_eval_command("9S TS", &mut out).is_err());
    }
}
