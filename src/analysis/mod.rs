// src/analysis/mod.rs
//! Single-file pattern analysis.
//!
//! `analyze` is total: any text yields a report, and the same text always
//! yields the same report.

pub mod frameworks;
pub mod imports;
pub mod scoring;

use crate::config::RuleConfig;
use crate::lang::{self, Lang};
use crate::rules;
use crate::types::FileReport;

pub struct Analyzer {
    rules: RuleConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl Analyzer {
    #[must_use]
    pub fn new(rules: RuleConfig) -> Self {
        Self { rules }
    }

    /// Analyzes `code` as if read from `filename`.
    #[must_use]
    pub fn analyze(&self, code: &str, filename: &str) -> FileReport {
        let lang = Lang::from_filename(filename);
        let family = lang.map(Lang::family);

        let findings = rules::scan(code, &self.rules);
        let line_count = scoring::line_count(code);
        let complexity_score = scoring::complexity(line_count, &findings);
        let status = scoring::status(complexity_score, &findings);

        let deps = family.map(|f| imports::parse(code, f)).unwrap_or_default();

        log::debug!(
            "analyzed {filename}: {} findings, complexity {complexity_score}, {status}",
            findings.len()
        );

        FileReport {
            path: filename.to_string(),
            language: lang::label_for(filename),
            frameworks: frameworks::detect(code, family),
            findings,
            complexity_score,
            status,
            dependencies: deps.dependencies,
            imports: deps.imports,
            line_count,
        }
    }
}

/// Analyzes `code` with the built-in rule thresholds.
#[must_use]
pub fn analyze(code: &str, filename: &str) -> FileReport {
    Analyzer::default().analyze(code, filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleId;
    use crate::types::Status;

    #[test]
    fn empty_input_is_clean() {
        let report = analyze("", "empty.js");
        assert!(report.findings.is_empty());
        assert_eq!(report.complexity_score, 0);
        assert_eq!(report.status, Status::Success);
        assert_eq!(report.line_count, 1);
    }

    #[test]
    fn unknown_extension_is_labelled_unknown() {
        let report = analyze("var a = 1;", "notes.txt");
        assert_eq!(report.language, "Unknown");
        assert_eq!(report.frameworks, vec!["Vanilla"]);
        assert!(report.has_finding(RuleId::VarDeclarations));
    }

    #[test]
    fn findings_do_not_depend_on_language() {
        let code = "var a = 1;";
        assert_eq!(analyze(code, "a.js").findings, analyze(code, "a.py").findings);
    }
}
