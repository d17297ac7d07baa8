//! UI helper functions for terminal output formatting.
//!
//! Consistent prefixes for errors and warnings across commands.

use std::io::Write;

/// Example shown whenever a hand fails to parse.
pub const HAND_FORMAT_HINT: &str = "'2H 4D 6S 8C AD'";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Reminds the user of the expected hand format after a parse failure.
pub fn write_format_hint(err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        err,
        "Please provide valid poker hands in the format: {}",
        HAND_FORMAT_HINT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "boom").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        write_format_hint(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Error: boom\nWARNING: careful\nPlease provide valid poker hands in the format: '2H 4D 6S 8C AD'\n"
        );
    }
}
