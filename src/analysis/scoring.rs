// src/analysis/scoring.rs
//! Complexity score and status classification.

use crate::types::{Finding, Severity, Status};

/// Lines contribute at most this many points.
const SIZE_CAP: f64 = 30.0;
/// Occurrences per unit of severity weight.
const OCCURRENCE_UNIT: f64 = 5.0;
/// A finding contributes at most twice its severity weight.
const OCCURRENCE_CAP: f64 = 2.0;
const SCORE_MAX: f64 = 100.0;

const ERROR_HIGH_FINDINGS: usize = 3;
const ERROR_SCORE: u32 = 80;
const WARNING_SCORE: u32 = 50;

/// Number of `\n`-separated segments; empty text is one line.
#[must_use]
pub fn line_count(code: &str) -> usize {
    code.split('\n').count()
}

/// Maps size and weighted findings to 0..=100.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn complexity(line_count: usize, findings: &[Finding]) -> u32 {
    let size = (line_count as f64 / 10.0).min(SIZE_CAP);
    let weighted: f64 = findings
        .iter()
        .map(|f| f.severity.weight() * (f.occurrences as f64 / OCCURRENCE_UNIT).min(OCCURRENCE_CAP))
        .sum();
    (size + weighted).round().min(SCORE_MAX) as u32
}

#[must_use]
pub fn status(complexity_score: u32, findings: &[Finding]) -> Status {
    let high = findings.iter().filter(|f| f.severity == Severity::High).count();
    if high >= ERROR_HIGH_FINDINGS || complexity_score > ERROR_SCORE {
        Status::Error
    } else if high >= 1 || complexity_score > WARNING_SCORE {
        Status::Warning
    } else {
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleId;

    fn finding(id: RuleId, occurrences: usize) -> Finding {
        id.rule().finding(occurrences)
    }

    #[test]
    fn size_component_caps_at_thirty() {
        assert_eq!(complexity(1, &[]), 0);
        assert_eq!(complexity(15, &[]), 2);
        assert_eq!(complexity(10_000, &[]), 30);
    }

    #[test]
    fn occurrences_are_capped_per_finding() {
        // high: 15 * min(100/5, 2) = 30
        assert_eq!(complexity(1, &[finding(RuleId::JqueryAjax, 100)]), 30);
        // medium: 10 * 1/5 = 2, plus 0.1 lines
        assert_eq!(complexity(1, &[finding(RuleId::VarDeclarations, 1)]), 2);
    }

    #[test]
    fn score_never_exceeds_hundred() {
        let findings: Vec<_> = RuleId::ALL.iter().map(|id| finding(*id, 50)).collect();
        assert_eq!(complexity(5000, &findings), 100);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(status(0, &[]), Status::Success);
        assert_eq!(status(50, &[]), Status::Success);
        assert_eq!(status(51, &[]), Status::Warning);
        assert_eq!(status(81, &[]), Status::Error);
        assert_eq!(status(10, &[finding(RuleId::SqlInjection, 1)]), Status::Warning);

        let three_high = [
            finding(RuleId::JqueryAjax, 1),
            finding(RuleId::DeprecatedMysql, 1),
            finding(RuleId::SqlInjection, 1),
        ];
        assert_eq!(status(10, &three_high), Status::Error);
    }
}
