//! Convert command implementation: runs the engine and routes the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use mdplain_core::{AnnotationMode, ConversionEngine, RuleSummaryItem};

use crate::ui::{diff_viewer, output_format, summary};
use crate::utils::clipboard::copy_to_clipboard;

/// Options for a single conversion run.
#[derive(Debug, Default)]
pub struct ConvertOptions {
    pub input: String,
    pub mode: AnnotationMode,
    pub output_path: Option<PathBuf>,
    pub diff: bool,
    pub summary: bool,
    pub json_summary: bool,
    pub clipboard: bool,
    pub quiet: bool,
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), supports_color);
}

/// Converts `opts.input` with `engine` and writes everything the options ask for.
pub fn run_convert(engine: &dyn ConversionEngine, opts: ConvertOptions) -> Result<()> {
    info!("Starting mdplain conversion ({:?} mode).", opts.mode);

    let (converted, rule_summary) = engine.convert_with_summary(&opts.input, opts.mode);
    debug!(
        "Content converted. Original length: {}, converted length: {}",
        opts.input.len(),
        converted.len()
    );

    handle_primary_output(&opts, &converted)?;

    if opts.clipboard {
        handle_clipboard_output(&converted, opts.quiet);
    }

    handle_summary(&rule_summary, &opts)?;

    info!("mdplain conversion completed.");
    Ok(())
}

fn handle_primary_output(opts: &ConvertOptions, converted: &str) -> Result<()> {
    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing converted text to file: {}", path.display()));
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        if opts.diff {
            diff_viewer::print_diff(&opts.input, converted, &mut file, false)?;
        } else {
            file.write_all(converted.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }
        return Ok(());
    }

    // JSON goes to stdout in place of the text.
    if opts.json_summary {
        return Ok(());
    }

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if opts.diff {
        diff_viewer::print_diff(&opts.input, converted, &mut writer, supports_color)?;
    } else {
        writer.write_all(converted.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

fn handle_clipboard_output(converted: &str, quiet: bool) {
    match copy_to_clipboard(converted) {
        Ok(()) => {
            if !quiet {
                info_msg("Converted text copied to clipboard successfully.");
            }
        }
        Err(e) => warn_msg(format!("Failed to copy to clipboard: {:#}", e)),
    }
}

fn handle_summary(rule_summary: &[RuleSummaryItem], opts: &ConvertOptions) -> Result<()> {
    if opts.json_summary {
        summary::print_summary_json(rule_summary, &mut io::stdout().lock())?;
    }
    if opts.summary && !opts.quiet {
        summary::print_summary(rule_summary, &mut io::stderr())?;
    }
    Ok(())
}
