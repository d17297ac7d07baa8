//! # Showdown CLI Library
//!
//! Command-line front end for the showdown hand comparison engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with an
//! explicit input stream, which is what the interactive `play` loop reads from.
//!
//! ## Example Usage
//!
//! ```
//! let args = vec!["showdown", "compare", "2H 3D 5S 9C KD", "2C 3H 4S 8C AH"];
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = showdown_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().ends_with("It's a tie!\n"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `compare`: Compare two hands given as arguments
//! - `eval`: Show the category of one hand
//! - `play`: Prompt for pairs of hands until the user stops
//! - `deal`: Deal two hands from a seeded deck and compare them
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, OutputFormat, ShowdownCli};
use commands::{
    handle_cfg_command, handle_compare_command, handle_deal_command, handle_eval_command,
    handle_play_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["compare", "eval", "play", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// The `play` command reads from the process's standard input.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["showdown", "deal", "--seed", "42"];
/// let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Use stdin for real input (supports both TTY and piped stdin)
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive input from `stdin`.
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("AH AD AC AS 2H\nKH KD KC KS 2H\nno\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = showdown_cli::run_with_input(["showdown", "play"], &mut input, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Hand 1 is stronger"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ShowdownCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let resolved = match config::load_with_sources() {
        Ok(resolved) => resolved,
        Err(e) => {
            write_or_exit!(err, "Error: {}", CliError::Config(e.to_string()));
            return exit_code::ERROR;
        }
    };
    let defaults = &resolved.config;

    let result = match cli.cmd {
        Commands::Compare {
            hand1,
            hand2,
            format,
            json,
            strict,
        } => handle_compare_command(
            &hand1,
            &hand2,
            if json {
                OutputFormat::Json
            } else {
                format.unwrap_or(defaults.format)
            },
            strict || defaults.strict,
            out,
        ),
        Commands::Eval { hand } => handle_eval_command(&hand, out),
        Commands::Play { strict } => handle_play_command(strict || defaults.strict, out, err, stdin),
        Commands::Deal { seed } => handle_deal_command(seed.or(defaults.seed), out),
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e @ CliError::Hand(_)) => {
            write_or_exit!(err, "Error: {}", e);
            let _ = ui::write_format_hint(err);
            exit_code::ERROR
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "");
            write_or_exit!(err, "Showdown Poker Hand Comparator");
            write_or_exit!(err, "Usage: showdown <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: showdown --help");
            exit_code::ERROR
        }
    }
}
