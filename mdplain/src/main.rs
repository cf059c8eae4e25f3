//! mdplain entry point.
//!
//! Resolves configuration, reads the Markdown source and runs the conversion.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use mdplain::cli::Cli;
use mdplain::commands::convert::{error_msg, run_convert, ConvertOptions};
use mdplain::logger;
use mdplain::resolve_config;
use mdplain::utils::input::read_markdown_input;
use mdplain_core::{AnnotationMode, RegexEngine, RuleKind};

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_logger(logger::level_for_flags(args.quiet, args.debug));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    if args.list_rules {
        return list_rules();
    }

    let config = resolve_config(&args)?;
    let mode = AnnotationMode::from_keep_annotation(args.keep_annotation || config.keep_annotation);

    let input = read_markdown_input(args.input_file.as_deref(), args.all_files)?;
    let engine = RegexEngine::new(config).context("Failed to build the conversion engine")?;

    run_convert(
        &engine,
        ConvertOptions {
            input,
            mode,
            output_path: args.output,
            diff: args.diff,
            summary: args.summary,
            json_summary: args.json_summary,
            clipboard: args.clipboard,
            quiet: args.quiet,
        },
    )
}

fn list_rules() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for (position, kind) in RuleKind::ALL.iter().enumerate() {
        writeln!(stdout, "{:>2}. {:<20} {}", position + 1, kind.name(), kind.description())?;
    }
    Ok(())
}
