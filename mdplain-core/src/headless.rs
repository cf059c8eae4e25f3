// mdplain-core/src/headless.rs

//! `headless.rs`
//! One-shot conversion helpers for callers that do not want to manage an
//! engine themselves.

use anyhow::Result;
use log::error;
use once_cell::sync::Lazy;

use crate::config::ConversionConfig;
use crate::engine::{AnnotationMode, ConversionEngine};
use crate::engines::regex_engine::RegexEngine;

/// Engine over the full rule table, built on first use.
static DEFAULT_ENGINE: Lazy<Result<RegexEngine>> = Lazy::new(|| RegexEngine::new(ConversionConfig::default()));

/// Converts Markdown `text` to plain text, or returns it unchanged when
/// `keep_annotation` is true.
///
/// This never fails. Should the built-in rule table be unusable, the error is
/// logged and the text is passed through as in keep-annotation mode.
pub fn convert(text: &str, keep_annotation: bool) -> String {
    let mode = AnnotationMode::from_keep_annotation(keep_annotation);
    if mode == AnnotationMode::Keep {
        return text.to_string();
    }
    match &*DEFAULT_ENGINE {
        Ok(engine) => engine.convert(text, mode),
        Err(e) => {
            error!("Default conversion engine is unavailable: {:#}", e);
            text.to_string()
        }
    }
}

/// Converts `content` with an engine built from `config`, honoring the
/// config's `keep_annotation` setting.
pub fn headless_convert_string(config: ConversionConfig, content: &str) -> Result<String> {
    let mode = AnnotationMode::from_keep_annotation(config.keep_annotation);
    let engine = RegexEngine::new(config)?;
    Ok(engine.convert(content, mode))
}
