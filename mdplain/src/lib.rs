// mdplain/src/lib.rs
//! # mdplain CLI Application
//!
//! The command-line front end for `mdplain-core`: it picks the Markdown
//! source, hands the text and the keep-annotation flag to the engine, and
//! routes the result to stdout, a file, a diff view or the clipboard.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;

use anyhow::{Context, Result};
use log::{debug, info};

use mdplain_core::{find_user_config, merge_config, ConversionConfig};

use crate::cli::Cli;

/// Builds the effective configuration for a run: built-in defaults, then the
/// `--config` file (or the first per-user config found), then the CLI
/// enable/disable lists.
pub fn resolve_config(args: &Cli) -> Result<ConversionConfig> {
    let default_config = ConversionConfig::load_default()?;

    let user_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => find_user_config(),
    };
    let user_config = match user_path {
        Some(path) => {
            info!("Using conversion config {}", path.display());
            Some(
                ConversionConfig::load_from_file(&path)
                    .with_context(|| format!("Failed to load config '{}'", path.display()))?,
            )
        }
        None => {
            debug!("No user config found; using built-in defaults.");
            None
        }
    };

    let mut config = merge_config(default_config, user_config);
    config.set_active_rules(&args.enable, &args.disable);
    Ok(config)
}
