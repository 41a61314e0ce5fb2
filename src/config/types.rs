// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::rules::{Rule, RuleId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { color: default_color() }
    }
}

fn default_color() -> bool { true }

/// Per-rule tuning on top of the built-in catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub disabled: Vec<RuleId>,
    /// Replaces a rule's built-in threshold, keyed by rule id.
    #[serde(default)]
    pub thresholds: BTreeMap<String, usize>,
}

impl RuleConfig {
    #[must_use]
    pub fn threshold_for(&self, rule: &Rule) -> usize {
        self.thresholds
            .get(rule.id.as_str())
            .copied()
            .unwrap_or(rule.threshold)
    }

    /// Threshold keys that do not name a catalog rule.
    #[must_use]
    pub fn unknown_threshold_keys(&self) -> Vec<&str> {
        self.thresholds
            .keys()
            .map(String::as_str)
            .filter(|key| key.parse::<RuleId>().is_err())
            .collect()
    }

    #[must_use]
    pub fn is_enabled(&self, id: RuleId) -> bool {
        !self.disabled.contains(&id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest LCS table (rows × columns) a diff may allocate.
    #[serde(default = "default_max_diff_cells")]
    pub max_diff_cells: usize,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    #[serde(default = "default_max_batch_files")]
    pub max_batch_files: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_diff_cells: default_max_diff_cells(),
            max_file_bytes: default_max_file_bytes(),
            max_batch_files: default_max_batch_files(),
        }
    }
}

// 2000 x 2000 lines
const fn default_max_diff_cells() -> usize { 4_000_000 }
const fn default_max_file_bytes() -> u64 { 512 * 1024 }
const fn default_max_batch_files() -> usize { 500 }

/// On-disk shape of `resurrect.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResurrectToml {
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub rules: RuleConfig,
    pub limits: LimitsConfig,
    pub preferences: Preferences,
}

impl From<ResurrectToml> for Config {
    fn from(toml: ResurrectToml) -> Self {
        Self {
            rules: toml.rules,
            limits: toml.limits,
            preferences: toml.preferences,
        }
    }
}
