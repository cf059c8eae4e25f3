//! compiler.rs - Manages the compilation and caching of conversion rules.
//!
//! Turns the active subset of [`RuleKind`]s into [`CompiledRules`] and keeps
//! them in a global, shared cache so engines built from the same config reuse
//! the same regexes.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::ConversionConfig;
use crate::errors::MdplainError;
use crate::rules::RuleKind;

/// A rule whose pattern has been compiled.
#[derive(Debug)]
pub struct CompiledRule {
    pub kind: RuleKind,
    pub regex: Regex,
}

impl CompiledRule {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// The compiled rule set, always in application order.
#[derive(Debug)]
pub struct CompiledRules {
    pub rules: Vec<CompiledRule>,
}

impl CompiledRules {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = RuleKind> + '_ {
        self.rules.iter().map(|rule| rule.kind)
    }
}

lazy_static! {
    /// Compiled rule sets keyed by a hash of the active rule list.
    static ref COMPILED_RULES_CACHE: RwLock<HashMap<u64, Arc<CompiledRules>>> = RwLock::new(HashMap::new());
}

fn hash_kinds(kinds: &[RuleKind]) -> u64 {
    let mut hasher = DefaultHasher::new();
    kinds.hash(&mut hasher);
    hasher.finish()
}

/// Compiles `kinds` into [`CompiledRules`].
///
/// The input is re-sorted into canonical order first, so callers cannot
/// accidentally change the order rules are applied in. Duplicates are dropped.
pub fn compile_rules(kinds: &[RuleKind]) -> Result<CompiledRules, MdplainError> {
    let mut ordered: Vec<RuleKind> = kinds.to_vec();
    ordered.sort_by_key(RuleKind::position);
    ordered.dedup();
    debug!("Starting compilation of {} rules.", ordered.len());

    let mut compiled_rules = Vec::with_capacity(ordered.len());
    let mut compilation_errors = Vec::new();

    for kind in ordered {
        let regex_result = RegexBuilder::new(kind.pattern())
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                log::debug!(
                    target: "mdplain_core::compiler",
                    "Rule '{}' compiled successfully.",
                    kind
                );
                compiled_rules.push(CompiledRule { kind, regex });
            }
            Err(e) => {
                compilation_errors.push(MdplainError::RuleCompilationError(kind.name().to_string(), e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(MdplainError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
        Ok(CompiledRules { rules: compiled_rules })
    }
}

/// Returns the compiled rules for `config`, compiling them on first use.
pub fn get_or_compile_rules(config: &ConversionConfig) -> Result<Arc<CompiledRules>> {
    let kinds = config.active_rules();
    let cache_key = hash_kinds(&kinds);

    {
        let cache = COMPILED_RULES_CACHE.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(rules) = cache.get(&cache_key) {
            debug!("Serving compiled rules from cache for key: {}", cache_key);
            return Ok(Arc::clone(rules));
        }
    }

    debug!("Compiled rules not found in cache. Compiling now.");
    let compiled_arc = Arc::new(compile_rules(&kinds)?);

    COMPILED_RULES_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(cache_key, Arc::clone(&compiled_arc));

    debug!("Successfully compiled and cached rules for key: {}", cache_key);
    Ok(compiled_arc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_rules_restores_canonical_order() {
        let compiled = compile_rules(&[RuleKind::ResidualBackslash, RuleKind::BlockQuote, RuleKind::List]).unwrap();
        let kinds: Vec<RuleKind> = compiled.kinds().collect();
        assert_eq!(kinds, vec![RuleKind::BlockQuote, RuleKind::List, RuleKind::ResidualBackslash]);
    }

    #[test]
    fn compile_rules_drops_duplicates() {
        let compiled = compile_rules(&[RuleKind::Code, RuleKind::Code]).unwrap();
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled.rules[0].name(), "code");
    }

    #[test]
    fn full_table_compiles() {
        let compiled = compile_rules(&RuleKind::ALL).unwrap();
        assert_eq!(compiled.len(), RuleKind::ALL.len());
    }

    #[test]
    fn cache_returns_shared_instance_for_equal_configs() {
        let config = ConversionConfig {
            disabled_rules: vec!["emoji".to_string()],
            ..Default::default()
        };
        let first = get_or_compile_rules(&config).unwrap();
        let second = get_or_compile_rules(&config.clone()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.kinds().all(|k| k != RuleKind::Emoji));
    }
}
