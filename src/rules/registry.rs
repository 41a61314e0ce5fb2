// src/rules/registry.rs
//! Built-in outdated-pattern rules.

use super::{Matcher, Rule, RuleId};
use crate::types::Severity;

/// The catalog, in [`RuleId`] declaration order.
pub const RULES: &[Rule] = &[
    // === JQUERY ===
    Rule {
        id: RuleId::JqueryAjax,
        title: "$.ajax() calls",
        description: "Using jQuery AJAX instead of modern fetch API",
        severity: Severity::High,
        matcher: Matcher::Pattern(r"\$\.(ajax|get|post|getJSON)"),
        threshold: 0,
    },
    Rule {
        id: RuleId::JquerySelectors,
        title: "jQuery selectors",
        description: "Using jQuery for DOM selection",
        severity: Severity::Medium,
        matcher: Matcher::Pattern(r#"\$\(['"][^'"]+['"]\)"#),
        threshold: 0,
    },
    // === LANGUAGE ===
    Rule {
        id: RuleId::VarDeclarations,
        title: "var declarations",
        description: "Using var instead of const/let",
        severity: Severity::Medium,
        matcher: Matcher::Pattern(r"\bvar\s+\w+"),
        threshold: 0,
    },
    Rule {
        id: RuleId::CallbackDepth,
        title: "Deeply nested callbacks",
        description: "Callback nesting makes control flow hard to follow",
        severity: Severity::Medium,
        matcher: Matcher::CallbackDepth,
        threshold: 3,
    },
    // === DATABASE ===
    Rule {
        id: RuleId::DeprecatedMysql,
        title: "Deprecated mysql_* functions",
        description: "Using deprecated mysql_* functions",
        severity: Severity::High,
        matcher: Matcher::Pattern(r"mysql_(connect|query|fetch|close)"),
        threshold: 0,
    },
    Rule {
        id: RuleId::SqlInjection,
        title: "Potential SQL injection",
        description: "Direct variable interpolation in SQL queries",
        severity: Severity::High,
        matcher: Matcher::Pattern(r#"["']SELECT.*\$|["']INSERT.*\$|["']UPDATE.*\$"#),
        threshold: 0,
    },
    // === DOM ===
    Rule {
        id: RuleId::GetElementById,
        title: "document.getElementById()",
        description: "Excessive use of getElementById",
        severity: Severity::Low,
        matcher: Matcher::Pattern(r"document\.getElementById"),
        threshold: 5,
    },
    Rule {
        id: RuleId::InlineEvents,
        title: "Inline event handlers",
        description: "Using inline event handlers",
        severity: Severity::Medium,
        matcher: Matcher::Pattern(r"(?i)on(click|load|change|submit)="),
        threshold: 0,
    },
    // === STRUCTURE ===
    Rule {
        id: RuleId::ExcessiveGlobals,
        title: "Excessive global variables",
        description: "Too many top-level declarations pollute the global scope",
        severity: Severity::Low,
        matcher: Matcher::Pattern(r"(?m)^(?:var|let|const)\s+\w+|\bwindow\.\w+\s*="),
        threshold: 10,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_ids() {
        assert_eq!(RULES.len(), RuleId::ALL.len());
        for (rule, id) in RULES.iter().zip(RuleId::ALL) {
            assert_eq!(rule.id, id);
            assert_eq!(id.rule().id, id);
        }
    }

    #[test]
    fn every_pattern_compiles() {
        for rule in RULES {
            if let Matcher::Pattern(p) = rule.matcher {
                assert!(regex::Regex::new(p).is_ok(), "bad pattern for {}", rule.id);
            }
        }
    }
}
