// mdplain-core/src/lib.rs
//! # mdplain Core Library
//!
//! `mdplain-core` turns Markdown into readable plain text. It owns a fixed,
//! ordered table of pattern rules (block quotes, emphasis, headers, lists,
//! code, links, escapes, ...) and applies them one after another, each rule
//! rewriting the whole document once. The order matters: quotes are unwrapped
//! before the headers inside them, and leftover backslashes are swept up only
//! after escapes have been resolved.
//!
//! The library is pure. It does no I/O during conversion, keeps no state
//! between calls, and never fails on any input string.
//!
//! ## Modules
//!
//! * `rules`: The [`RuleKind`] table, the [`Construct`] each match yields, and rule compilation.
//! * `config`: [`ConversionConfig`] loading, validation and merging.
//! * `engine`: The [`ConversionEngine`] trait and [`AnnotationMode`].
//! * `engines`: Concrete engines; currently [`RegexEngine`].
//! * `headless`: One-shot helpers, including the plain [`convert`] function.
//! * `errors`: The [`MdplainError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use mdplain_core::convert;
//!
//! let plain = convert("# Title\n\nThis is **bold** and [a link](https://example.com).\n", false);
//! assert_eq!(plain, "Title\n\nThis is bold and https://example.com.\n");
//!
//! // Keep-annotation mode is the identity.
//! assert_eq!(convert("**kept**", true), "**kept**");
//! ```
//!
//! ## Error Handling
//!
//! Conversion is total. Errors only arise while building an engine: rule
//! compilation failures and unknown rule names are reported as
//! [`MdplainError`], and configuration loading uses `anyhow::Error` with context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rules;

pub use config::{
    config_candidate_paths,
    find_user_config,
    merge_config,
    ConversionConfig,
    CONFIG_FILE_NAME,
};

pub use errors::MdplainError;

pub use engine::{AnnotationMode, ConversionEngine, RuleSummaryItem};

pub use engines::regex_engine::RegexEngine;

pub use headless::{convert, headless_convert_string};

pub use rules::compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
pub use rules::{Construct, EmphasisWidth, RuleKind};
