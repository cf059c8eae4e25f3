//! This file defines the command-line interface (CLI) for the mdplain
//! application.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "mdplain",
    version = env!("CARGO_PKG_VERSION"),
    about = "Read Markdown files as plain text",
    long_about = "mdplain strips Markdown markup (headers, emphasis, lists, code fences, links, escapes and more) from a document and prints the readable plain text. Tables are left as they are. Use --keep-annotation to print the document untouched."
)]
pub struct Cli {
    /// Markdown file to read (reads from stdin if not provided).
    #[arg(value_name = "FILE", help = "Markdown file to read. Reads stdin when omitted.")]
    pub input_file: Option<PathBuf>,

    /// Keep the Markdown annotation instead of stripping it.
    #[arg(long, short = 'k', env = "MDPLAIN_KEEP_ANNOTATION", help = "Print the document with its Markdown annotation kept.")]
    pub keep_annotation: bool,

    /// Write the result to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Accept input files that do not end in `.md`.
    #[arg(long = "all-files", help = "Accept input paths that do not end in .md.")]
    pub all_files: bool,

    /// Path to a conversion configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a conversion configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Rule names to switch off (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Rule names to switch back on (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Re-enable these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Show a unified diff between the input and the result.
    #[arg(long, short = 'D', help = "Show a unified diff instead of the converted text.")]
    pub diff: bool,

    /// Print a per-rule summary table to stderr.
    #[arg(long, short = 's', help = "Print how many constructs each rule stripped.")]
    pub summary: bool,

    /// Print the per-rule summary as JSON to stdout.
    #[arg(long = "json-summary", conflicts_with = "diff", help = "Print the rule summary as JSON to stdout.")]
    pub json_summary: bool,

    /// List the conversion rules in the order they are applied, then exit.
    #[arg(long = "list-rules", help = "List the conversion rules in application order and exit.")]
    pub list_rules: bool,

    /// Copy the result to the system clipboard.
    #[arg(long, short = 'c', help = "Copy the converted text to the system clipboard.")]
    pub clipboard: bool,

    /// Suppress informational output and logging.
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,
}
