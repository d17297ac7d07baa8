//! Input validation shared by the commands that read hands.

use showdown_engine::errors::ParseError;
use showdown_engine::hand::{Hand, ensure_distinct, parse_hand};

/// Parses both hands and, when `strict` is set, rejects any card that
/// appears more than once across them.
///
/// ```rust
/// # use showdown_cli::validation::parse_hand_pair;
/// use showdown_engine::errors::ParseError;
///
/// assert!(parse_hand_pair("2H 4D 6S 8C TD", "2H 4D 6S 8C TD", false).is_ok());
/// assert!(matches!(
///     parse_hand_pair("2H 4D 6S 8C TD", "2H 4D 6S 8C TD", true),
///     Err(ParseError::DuplicateCard { .. })
/// ));
/// ```
pub fn parse_hand_pair(first: &str, second: &str, strict: bool) -> Result<(Hand, Hand), ParseError> {
    let first = parse_hand(first)?;
    let second = parse_hand(second)?;
    if strict {
        ensure_distinct(&first, &second)?;
    }
    Ok((first, second))
}

/// Only an explicit "yes" (any case) continues the prompt loop.
pub fn wants_another_round(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
