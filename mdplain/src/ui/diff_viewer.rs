// mdplain/src/ui/diff_viewer.rs
//! Unified diff between the Markdown input and the plain-text result.
//!
//! Removed lines are red, added lines green when the writer is a terminal.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes the line-level changes from `original` to `converted`.
pub fn print_diff<W: Write>(original: &str, converted: &str, writer: &mut W, supports_color: bool) -> io::Result<()> {
    let patch = create_patch(original, converted);
    let header = "--- Diff Analysis ---";
    if supports_color {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    let s = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("- {}", s).red())?;
                    } else {
                        writeln!(writer, "- {}", s)?;
                    }
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let s = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("+ {}", s).green())?;
                    } else {
                        writeln!(writer, "+ {}", s)?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    Ok(())
}
