// src/rules/mod.rs
//! The outdated-pattern rule catalog.
//!
//! Every rule is a row in [`RULES`]: an id, a matcher, a severity and a
//! threshold. A rule produces a [`Finding`] only when its count is strictly
//! greater than its threshold.

pub mod callback;
pub mod registry;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::config::RuleConfig;
use crate::types::{Finding, Severity};

pub use registry::RULES;

/// Identifier of a catalog rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    JqueryAjax,
    JquerySelectors,
    VarDeclarations,
    CallbackDepth,
    DeprecatedMysql,
    SqlInjection,
    #[serde(rename = "getelementbyid")]
    GetElementById,
    InlineEvents,
    ExcessiveGlobals,
}

impl RuleId {
    pub const ALL: [Self; 9] = [
        Self::JqueryAjax,
        Self::JquerySelectors,
        Self::VarDeclarations,
        Self::CallbackDepth,
        Self::DeprecatedMysql,
        Self::SqlInjection,
        Self::GetElementById,
        Self::InlineEvents,
        Self::ExcessiveGlobals,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JqueryAjax => "jquery-ajax",
            Self::JquerySelectors => "jquery-selectors",
            Self::VarDeclarations => "var-declarations",
            Self::CallbackDepth => "callback-depth",
            Self::DeprecatedMysql => "deprecated-mysql",
            Self::SqlInjection => "sql-injection",
            Self::GetElementById => "getelementbyid",
            Self::InlineEvents => "inline-events",
            Self::ExcessiveGlobals => "excessive-globals",
        }
    }

    // Indexing is safe: RULES is declared in the same order as the enum
    // variants, which `registry::tests::catalog_order_matches_ids` checks.
    #[must_use]
    #[allow(clippy::indexing_slicing)]
    pub fn rule(self) -> &'static Rule {
        &RULES[self as usize]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown rule '{s}'"))
    }
}

/// How a rule counts occurrences.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Non-overlapping regex matches.
    Pattern(&'static str),
    /// Maximum depth reported by [`callback::max_depth`].
    CallbackDepth,
}

/// A catalog entry.
#[derive(Debug)]
pub struct Rule {
    pub id: RuleId,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub matcher: Matcher,
    /// A finding is emitted only when the count exceeds this value.
    pub threshold: usize,
}

static COMPILED: LazyLock<HashMap<RuleId, Regex>> = LazyLock::new(|| {
    RULES
        .iter()
        .filter_map(|rule| match rule.matcher {
            Matcher::Pattern(p) => Some((rule.id, compile(p))),
            Matcher::CallbackDepth => None,
        })
        .collect()
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid Regex: {pattern}"))
}

impl Rule {
    /// Counts occurrences of this rule in `text`.
    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        match self.matcher {
            Matcher::Pattern(_) => COMPILED
                .get(&self.id)
                .map_or(0, |re| re.find_iter(text).count()),
            Matcher::CallbackDepth => callback::max_depth(text),
        }
    }

    #[must_use]
    pub fn finding(&self, occurrences: usize) -> Finding {
        Finding {
            id: self.id,
            title: self.title,
            description: self.description,
            severity: self.severity,
            occurrences,
        }
    }
}

/// Runs every enabled rule over `text`, in catalog order.
#[must_use]
pub fn scan(text: &str, config: &RuleConfig) -> Vec<Finding> {
    RULES
        .iter()
        .filter(|rule| config.is_enabled(rule.id))
        .filter_map(|rule| {
            let occurrences = rule.count(text);
            (occurrences > config.threshold_for(rule)).then(|| rule.finding(occurrences))
        })
        .collect()
}
