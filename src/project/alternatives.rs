// src/project/alternatives.rs
//! Modern replacements suggested for rules that fired somewhere in a project.

use serde::Serialize;

use crate::rules::RuleId;
use crate::types::FileReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModernAlternative {
    #[serde(skip)]
    pub rule: RuleId,
    pub from: &'static str,
    pub to: &'static str,
    pub benefit: &'static str,
}

pub const ALTERNATIVES: &[ModernAlternative] = &[
    ModernAlternative {
        rule: RuleId::JqueryAjax,
        from: "$.ajax()",
        to: "fetch() / axios",
        benefit: "Native browser support, Promise-based, better error handling",
    },
    ModernAlternative {
        rule: RuleId::VarDeclarations,
        from: "var",
        to: "const / let",
        benefit: "Block scoping, prevents hoisting issues, immutability",
    },
    ModernAlternative {
        rule: RuleId::DeprecatedMysql,
        from: "mysql_* functions",
        to: "PDO / mysqli",
        benefit: "Prepared statements, SQL injection protection",
    },
    ModernAlternative {
        rule: RuleId::SqlInjection,
        from: "String concatenation in SQL",
        to: "Prepared statements",
        benefit: "Prevents SQL injection, parameterized queries",
    },
    ModernAlternative {
        rule: RuleId::JquerySelectors,
        from: "jQuery selectors",
        to: "document.querySelector()",
        benefit: "No library download, same selector syntax",
    },
    ModernAlternative {
        rule: RuleId::InlineEvents,
        from: "Inline event handlers",
        to: "addEventListener()",
        benefit: "Separates markup from behavior, allows multiple listeners",
    },
    ModernAlternative {
        rule: RuleId::CallbackDepth,
        from: "Nested callbacks",
        to: "async / await",
        benefit: "Linear control flow, try/catch error handling",
    },
];

#[must_use]
pub fn for_rule(id: RuleId) -> Option<&'static ModernAlternative> {
    ALTERNATIVES.iter().find(|alt| alt.rule == id)
}

/// One entry per rule with a known alternative, in the order rules are first
/// seen across `reports`.
#[must_use]
pub fn collect(reports: &[FileReport]) -> Vec<ModernAlternative> {
    let mut out: Vec<ModernAlternative> = Vec::new();
    for finding in reports.iter().flat_map(|r| &r.findings) {
        if out.iter().any(|alt| alt.rule == finding.id) {
            continue;
        }
        if let Some(alt) = for_rule(finding.id) {
            out.push(*alt);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn first_seen_order_without_duplicates() {
        let reports = vec![
            analyze("var a = 1;", "a.js"),
            analyze("$.ajax({});\nvar b;", "b.js"),
        ];
        let froms: Vec<_> = collect(&reports).iter().map(|a| a.from).collect();
        assert_eq!(froms, vec!["var", "$.ajax()"]);
    }

    #[test]
    fn rules_without_alternative_are_skipped() {
        assert!(for_rule(RuleId::GetElementById).is_none());
        assert!(for_rule(RuleId::ExcessiveGlobals).is_none());
    }
}
