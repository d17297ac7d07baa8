//! One-shot comparison of two hands given on the command line.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_showdown, showdown_json};
use crate::validation::parse_hand_pair;
use showdown_engine::compare::Showdown;
use std::io::Write;

/// Handle the compare command.
///
/// # Arguments
///
/// * `hand1`, `hand2` - Raw hand text, five space-separated cards each
/// * `format` - Text summary or pretty JSON report
/// * `strict` - Reject duplicate cards across the two hands
/// * `out` - Output stream for the result
///
/// # Errors
///
/// Returns `CliError::Hand` when either hand fails to parse (or shares a card
/// under `strict`). Nothing is written to `out` in that case.
pub fn handle_compare_command(
    hand1: &str,
    hand2: &str,
    format: OutputFormat,
    strict: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let (first, second) = parse_hand_pair(hand1, hand2, strict)?;
    let showdown = Showdown::evaluate(first, second);

    match format {
        OutputFormat::Text => writeln!(out, "{}", format_showdown(&showdown))?,
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&showdown_json(&showdown))
                .map_err(std::io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
