//! Configuration management for `mdplain-core`.
//!
//! A [`ConversionConfig`] selects the default annotation mode and which rules
//! of the fixed rule table are switched off. It is read from YAML and can be
//! merged with CLI overrides. The order rules run in is never configurable.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::rules::RuleKind;

/// Name of the per-user configuration file.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Top-level conversion settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// When true the CLI returns the document untouched unless told otherwise.
    pub keep_annotation: bool,
    /// Names of rules to skip (see [`RuleKind::name`]).
    pub disabled_rules: Vec<String>,
}

impl ConversionConfig {
    /// Loads a configuration from a YAML file.
    ///
    /// Unknown rule names are an error here, since a typo in a file the user
    /// wrote should not silently leave a rule enabled.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading conversion config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ConversionConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(
            "Loaded config from {} ({} rule(s) disabled).",
            path.display(),
            config.disabled_rules.len()
        );
        Ok(config)
    }

    /// Loads the built-in defaults.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default config from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: ConversionConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default config")?;
        Ok(config)
    }

    /// Checks that every disabled rule name refers to a real rule.
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<String> = self
            .disabled_rules
            .iter()
            .filter_map(|name| name.parse::<RuleKind>().err())
            .map(|e| e.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Config validation failed:\n{}", errors.join("\n")))
        }
    }

    /// Applies enable/disable lists from the command line.
    ///
    /// Names in `disable_rules` are added to the disabled set, then names in
    /// `enable_rules` are removed from it. Unknown names are logged and ignored.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        debug!("Disabled rules before filtering: {:?}", self.disabled_rules);

        let mut disabled: BTreeSet<RuleKind> = self.disabled_kinds();

        for name in disable_rules {
            match name.parse::<RuleKind>() {
                Ok(kind) => {
                    disabled.insert(kind);
                }
                Err(_) => warn!("Rule '{}' in `disable` list does not exist.", name),
            }
        }
        for name in enable_rules {
            match name.parse::<RuleKind>() {
                Ok(kind) => {
                    disabled.remove(&kind);
                }
                Err(_) => warn!("Rule '{}' in `enable` list does not exist.", name),
            }
        }

        self.disabled_rules = disabled.iter().map(|kind| kind.name().to_string()).collect();
        debug!("Disabled rules after filtering: {:?}", self.disabled_rules);
    }

    /// The rules that will run, in application order.
    pub fn active_rules(&self) -> Vec<RuleKind> {
        let disabled = self.disabled_kinds();
        RuleKind::ALL
            .iter()
            .copied()
            .filter(|kind| !disabled.contains(kind))
            .collect()
    }

    fn disabled_kinds(&self) -> BTreeSet<RuleKind> {
        self.disabled_rules
            .iter()
            .filter_map(|name| match name.parse::<RuleKind>() {
                Ok(kind) => Some(kind),
                Err(e) => {
                    warn!("{}; ignoring it.", e);
                    None
                }
            })
            .collect()
    }
}

/// Merges a user configuration over the defaults.
///
/// The user's `keep_annotation` wins; disabled rule lists are unioned.
pub fn merge_config(default_config: ConversionConfig, user_config: Option<ConversionConfig>) -> ConversionConfig {
    let Some(user_cfg) = user_config else {
        debug!("No user config provided; using defaults.");
        return default_config;
    };

    debug!(
        "Merging user config: keep_annotation={}, {} disabled rule(s).",
        user_cfg.keep_annotation,
        user_cfg.disabled_rules.len()
    );
    let mut disabled: Vec<String> = default_config.disabled_rules;
    for name in user_cfg.disabled_rules {
        if !disabled.contains(&name) {
            disabled.push(name);
        }
    }

    ConversionConfig {
        keep_annotation: user_cfg.keep_annotation,
        disabled_rules: disabled,
    }
}

/// Places a user configuration file is looked for, most specific first.
pub fn config_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::config_dir().map(|p| p.join("mdplain")),
        dirs::home_dir().map(|p| p.join(".mdplain")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .collect()
}

/// The first candidate configuration file that exists, if any.
pub fn find_user_config() -> Option<PathBuf> {
    config_candidate_paths().into_iter().find(|p| p.is_file())
}
