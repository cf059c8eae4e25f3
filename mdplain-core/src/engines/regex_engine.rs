//! A `ConversionEngine` implementation that applies the ordered rule table
//! with regular expressions, one whole-document pass per rule.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, trace};
use regex::{Captures, Replacer};
use std::sync::Arc;

use crate::config::ConversionConfig;
use crate::engine::{AnnotationMode, ConversionEngine, RuleSummaryItem};
use crate::rules::compiler::{get_or_compile_rules, CompiledRule, CompiledRules};
use crate::rules::RuleKind;

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: Arc<CompiledRules>,
    config: ConversionConfig,
}

impl RegexEngine {
    pub fn new(config: ConversionConfig) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile conversion rules for RegexEngine")?;

        Ok(Self { compiled_rules, config })
    }

    /// Runs one rule over the whole document, returning the new document and
    /// the number of constructs rewritten.
    fn apply_rule(&self, rule: &CompiledRule, text: &str) -> (String, usize) {
        let mut replacer = PlainReplacer { kind: rule.kind, occurrences: 0 };
        let rewritten = rule.regex.replace_all(text, replacer.by_ref());
        (rewritten.into_owned(), replacer.occurrences)
    }
}

/// Writes each matched construct's plain text straight into the output
/// buffer, counting matches as it goes.
struct PlainReplacer {
    kind: RuleKind,
    occurrences: usize,
}

impl Replacer for PlainReplacer {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        self.occurrences += 1;
        let construct = self.kind.extract(caps);
        trace!("Rule '{}' matched {:?}", self.kind, construct);
        construct.reassemble(dst);
    }
}

impl ConversionEngine for RegexEngine {
    fn convert_with_summary(&self, text: &str, mode: AnnotationMode) -> (String, Vec<RuleSummaryItem>) {
        if mode == AnnotationMode::Keep {
            debug!("Keep-annotation mode: returning {} bytes unchanged.", text.len());
            return (text.to_string(), Vec::new());
        }

        let mut document = text.to_string();
        let mut summary = Vec::new();

        for rule in &self.compiled_rules.rules {
            let (next, occurrences) = self.apply_rule(rule, &document);
            if occurrences > 0 {
                debug!("Rule '{}' rewrote {} construct(s).", rule.name(), occurrences);
                summary.push(RuleSummaryItem {
                    rule_name: rule.name().to_string(),
                    occurrences,
                });
            }
            document = next;
        }

        debug!(
            "Content converted. Original length: {}, plain length: {}",
            text.len(),
            document.len()
        );
        (document, summary)
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_config(&self) -> &ConversionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RegexEngine {
        RegexEngine::new(ConversionConfig::default()).unwrap()
    }

    #[test]
    fn keep_mode_is_identity() {
        let input = "# Title\n**bold** and `code`\n";
        let (out, summary) = engine().convert_with_summary(input, AnnotationMode::Keep);
        assert_eq!(out, input);
        assert!(summary.is_empty());
    }

    #[test]
    fn strip_mode_threads_each_rule_into_the_next() {
        let out = engine().convert("> ## Quoted **title**\n", AnnotationMode::Strip);
        assert_eq!(out, "Quoted title\n");
    }

    #[test]
    fn summary_lists_rules_in_application_order() {
        let summary = engine().analyze_for_stats("# Head\n\n- one\n- two\n\nSome **bold**.\n");
        let names: Vec<&str> = summary.iter().map(|s| s.rule_name.as_str()).collect();
        assert_eq!(names, vec!["emphasis", "header_divider", "list"]);
        let list = summary.iter().find(|s| s.rule_name == "list").unwrap();
        assert_eq!(list.occurrences, 2);
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let config = ConversionConfig {
            keep_annotation: false,
            disabled_rules: vec!["emphasis".into()],
        };
        let engine = RegexEngine::new(config).unwrap();
        assert_eq!(engine.convert("# A **b**\n", AnnotationMode::Strip), "A **b**\n");
        assert_eq!(engine.compiled_rules().len(), 11);
        assert_eq!(engine.get_config().disabled_rules, vec!["emphasis".to_string()]);
    }

    #[test]
    fn replacer_appends_constructs_and_counts_matches() {
        let re = regex::Regex::new(RuleKind::Highlight.pattern()).unwrap();
        let mut replacer = PlainReplacer { kind: RuleKind::Highlight, occurrences: 0 };
        let out = re.replace_all("==a== and ==b==", replacer.by_ref());
        assert_eq!(out, "a and b");
        assert_eq!(replacer.occurrences, 2);

        let caps = re.captures("==c==").unwrap();
        let mut dst = String::from("prefix ");
        replacer.replace_append(&caps, &mut dst);
        assert_eq!(dst, "prefix c");
        assert_eq!(replacer.occurrences, 3);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(engine().convert("", AnnotationMode::Strip), "");
    }
}
