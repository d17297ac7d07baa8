//! # Play Command
//!
//! Interactive prompt loop: asks for two hands, prints which one is stronger,
//! and offers another round.
//!
//! ## Features
//!
//! - A parse error prints the message and a format hint, then restarts the
//!   round from the first hand
//! - Without `--strict`, hands sharing a card are compared with a warning
//! - Only an explicit `yes` starts another round
//! - EOF on input ends the session cleanly; a failed read is an I/O error

use crate::error::CliError;
use crate::io_utils::try_read_line;
use crate::ui;
use crate::validation::wants_another_round;
use showdown_engine::compare::compare;
use showdown_engine::errors::ParseError;
use showdown_engine::hand::{ensure_distinct, parse_hand};
use std::io::{BufRead, Write};

const FIRST_PROMPT: &str = "Enter your first poker hand (e.g., '2H 4D 6S 8C AD'): ";
const SECOND_PROMPT: &str = "Enter your second poker hand (e.g., '2H 4D 6S 8C AD'): ";
const AGAIN_PROMPT: &str = "Do you want to compare more hands? (yes/no): ";

/// Outcome of one prompt round.
enum Round {
    Compared,
    Rejected,
    InputClosed,
}

/// Handle the play command: interactive hand comparison.
///
/// # Arguments
///
/// * `strict` - Reject duplicate cards across the two hands
/// * `out` - Output stream for prompts and verdicts
/// * `err` - Error stream for parse errors
/// * `stdin` - Input stream the hands are read from
///
/// # Examples
///
/// ```rust
/// use showdown_cli::commands::handle_play_command;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("AH AD AC AS 2H\nKH KD KC KS 2H\nno\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// handle_play_command(false, &mut out, &mut err, &mut input).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Hand 1 is stronger"));
/// ```
pub fn handle_play_command(
    strict: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(out, "Welcome to Showdown, the poker hand comparator!")?;

    let mut compared = 0u32;
    loop {
        match play_round(strict, out, err, stdin)? {
            Round::Compared => compared += 1,
            Round::Rejected => continue,
            Round::InputClosed => break,
        }

        write!(out, "{}", AGAIN_PROMPT)?;
        out.flush()?;
        match try_read_line(stdin)? {
            Some(answer) if wants_another_round(&answer) => {}
            _ => break,
        }
    }

    writeln!(out)?;
    writeln!(out, "Compared {} pair(s) of hands.", compared)?;
    Ok(())
}

fn play_round(
    strict: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Round, CliError> {
    let Some(line) = prompt(FIRST_PROMPT, out, stdin)? else {
        return Ok(Round::InputClosed);
    };
    let first = match parse_hand(&line) {
        Ok(hand) => hand,
        Err(e) => return reject(err, &e),
    };

    let Some(line) = prompt(SECOND_PROMPT, out, stdin)? else {
        return Ok(Round::InputClosed);
    };
    let second = match parse_hand(&line) {
        Ok(hand) => hand,
        Err(e) => return reject(err, &e),
    };

    if let Err(duplicate) = ensure_distinct(&first, &second) {
        if strict {
            return reject(err, &duplicate);
        }
        ui::display_warning(err, &duplicate.to_string())?;
    }
    writeln!(out, "{}", compare(&first, &second).message())?;
    Ok(Round::Compared)
}

fn reject(err: &mut dyn Write, e: &ParseError) -> Result<Round, CliError> {
    ui::write_error(err, &e.to_string())?;
    ui::write_format_hint(err)?;
    Ok(Round::Rejected)
}

fn prompt(
    text: &str,
    out: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<String>, CliError> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(try_read_line(stdin)?)
}
