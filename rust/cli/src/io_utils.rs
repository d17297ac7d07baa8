//! Stdin helpers for the interactive prompt loop.

use std::io::{self, BufRead};

/// Reads one line and trims it. `Ok(None)` means EOF.
///
/// ```rust
/// use std::io::Cursor;
/// # use showdown_cli::io_utils::try_read_line;
///
/// let mut input = Cursor::new("yes\n");
/// assert_eq!(try_read_line(&mut input).unwrap().as_deref(), Some("yes"));
/// assert_eq!(try_read_line(&mut input).unwrap(), None);
/// ```
pub fn try_read_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, ErrorKind, Read};

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn read_errors_surface() {
        let mut reader = BufReader::new(Broken);
        let err = try_read_line(&mut reader).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    }

    #[test]
    fn lines_are_trimmed() {
        let mut input = std::io::Cursor::new("  2H 4D 6S 8C AD \r\n");
        assert_eq!(
            try_read_line(&mut input).unwrap().as_deref(),
            Some("2H 4D 6S 8C AD")
        );
    }
}
