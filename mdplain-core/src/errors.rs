//! errors.rs - Custom error types for the mdplain-core library.
//!
//! Conversion itself never fails; these errors only surface while building
//! an engine (compiling the rule table or resolving rule names from config).
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `mdplain-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without a
/// breaking change for downstream matchers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MdplainError {
    #[error("Failed to compile conversion rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Unknown conversion rule '{0}'")]
    UnknownRule(String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
