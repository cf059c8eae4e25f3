//! Input acquisition: picks the Markdown source and assembles it into one
//! newline-joined buffer for the engine.

use log::{debug, warn};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension accepted without `--all-files`.
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Error, Debug)]
pub enum InputError {
    #[error("'{0}' is not a Markdown (.md) file; pass --all-files to read it anyway")]
    NotMarkdown(PathBuf),

    #[error("Failed to read input file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read from stdin: {0}")]
    ReadStdin(#[source] io::Error),
}

/// True when `path` ends in `.md`, ignoring case.
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION))
}

/// Splits `raw` into lines and re-joins every line with a trailing `\n`.
///
/// CRLF endings become LF and a non-empty document always ends in `\n`.
pub fn join_lines(raw: &str) -> String {
    let mut joined = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        joined.push_str(line);
        joined.push('\n');
    }
    joined
}

/// Reads the Markdown document from `path`, or from stdin when `path` is
/// `None`. Paths without a `.md` extension are rejected unless `all_files`.
pub fn read_markdown_input(path: Option<&Path>, all_files: bool) -> Result<String, InputError> {
    let raw = match path {
        Some(path) => {
            if !is_markdown_path(path) {
                if !all_files {
                    return Err(InputError::NotMarkdown(path.to_path_buf()));
                }
                warn!("Reading non-Markdown file {} because --all-files was given.", path.display());
            }
            debug!("Reading input from file: {}", path.display());
            fs::read_to_string(path).map_err(|source| InputError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            debug!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(InputError::ReadStdin)?;
            buffer
        }
    };
    Ok(join_lines(&raw))
}
