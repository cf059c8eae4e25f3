//! Defines the core `ConversionEngine` trait and related data structures.
//!
//! The trait keeps callers independent of how conversion is carried out.
//! Every method is infallible: a rule that does not match is a no-op, so any
//! input string yields an output string.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;

use crate::config::ConversionConfig;
use crate::rules::compiler::CompiledRules;

/// Whether the Markdown annotation is kept or stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationMode {
    /// Return the document unchanged.
    Keep,
    /// Run the full rule set.
    #[default]
    Strip,
}

impl AnnotationMode {
    pub fn from_keep_annotation(keep_annotation: bool) -> Self {
        if keep_annotation {
            AnnotationMode::Keep
        } else {
            AnnotationMode::Strip
        }
    }
}

/// How many constructs one rule rewrote during a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
}

/// A Markdown-to-plain-text converter.
pub trait ConversionEngine: Send + Sync {
    /// Converts `text` according to `mode`.
    fn convert(&self, text: &str, mode: AnnotationMode) -> String {
        self.convert_with_summary(text, mode).0
    }

    /// Converts `text` and reports, per rule and in application order, how many
    /// constructs were rewritten. Rules with no matches are left out.
    fn convert_with_summary(&self, text: &str, mode: AnnotationMode) -> (String, Vec<RuleSummaryItem>);

    /// Runs a full strip and returns only the summary.
    fn analyze_for_stats(&self, text: &str) -> Vec<RuleSummaryItem> {
        self.convert_with_summary(text, AnnotationMode::Strip).1
    }

    /// The compiled rule set this engine applies.
    fn compiled_rules(&self) -> &CompiledRules;

    /// The configuration the engine was built from.
    fn get_config(&self) -> &ConversionConfig;
}
