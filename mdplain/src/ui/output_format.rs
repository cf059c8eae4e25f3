//! Colored status messages on stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes an informational message.
pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

/// Writes a warning message, prefixed with `Warning:`.
pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg)
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

/// Writes an error message, prefixed with `Error:`.
pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg)
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_have_no_escape_codes() {
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "careful", false).unwrap();
        print_error_message(&mut buf, "broken", false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Warning: careful\nError: broken\n");
    }

    #[test]
    fn colored_messages_keep_their_text() {
        let mut buf = Vec::new();
        print_info_message(&mut buf, "hello", true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("hello"));
        assert!(text.contains('\u{1b}'));
    }
}
