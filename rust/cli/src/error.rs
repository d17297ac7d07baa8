//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the error onto an exit code and prints it to the error stream.

use showdown_engine::errors::ParseError;
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, stdin reads)
    Io(std::io::Error),

    /// A hand could not be parsed, or the pair contained a duplicate card
    Hand(ParseError),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Hand(e) => write!(f, "{}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Hand(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<ParseError> for CliError {
    fn from(error: ParseError) -> Self {
        CliError::Hand(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_errors_display_the_parse_message() {
        let e = CliError::from(ParseError::WrongCardCount { found: 3 });
        assert_eq!(e.to_string(), "A hand must have 5 cards (got 3)");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn config_errors_are_prefixed() {
        let e = CliError::Config("bad seed".into());
        assert_eq!(e.to_string(), "Configuration error: bad seed");
    }
}
