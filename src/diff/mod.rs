// src/diff/mod.rs
//! Line-level diffs between two texts.
//!
//! [`diff_lines`] aligns lines with a longest-common-subsequence table and
//! never pairs near-equal lines: a changed line is always a `Removed`
//! followed by an `Added`. [`positional::compare`] is the cheaper
//! side-by-side view that compares line `i` with line `i` and does report
//! `Modified`.

mod lcs;
pub mod positional;

use serde::Serialize;

use crate::error::{ResurrectError, Result};

pub use positional::{line_delta, LineDelta};

/// One row of a diff. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffLine {
    Unchanged {
        #[serde(rename = "oldLine")]
        old_line: usize,
        #[serde(rename = "newLine")]
        new_line: usize,
        content: String,
    },
    Removed {
        #[serde(rename = "oldLine")]
        old_line: usize,
        content: String,
    },
    Added {
        #[serde(rename = "newLine")]
        new_line: usize,
        content: String,
    },
    Modified {
        line: usize,
        #[serde(rename = "oldContent")]
        old_content: String,
        #[serde(rename = "newContent")]
        new_content: String,
    },
}

impl DiffLine {
    /// Line number in the old text, if this row has one.
    #[must_use]
    pub fn old_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged { old_line, .. } | Self::Removed { old_line, .. } => Some(*old_line),
            Self::Modified { line, .. } => Some(*line),
            Self::Added { .. } => None,
        }
    }

    /// Line number in the new text, if this row has one.
    #[must_use]
    pub fn new_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged { new_line, .. } | Self::Added { new_line, .. } => Some(*new_line),
            Self::Modified { line, .. } => Some(*line),
            Self::Removed { .. } => None,
        }
    }

    /// Content as it appears in the old text.
    #[must_use]
    pub fn old_content(&self) -> Option<&str> {
        match self {
            Self::Unchanged { content, .. } | Self::Removed { content, .. } => Some(content),
            Self::Modified { old_content, .. } => Some(old_content),
            Self::Added { .. } => None,
        }
    }

    /// Content as it appears in the new text.
    #[must_use]
    pub fn new_content(&self) -> Option<&str> {
        match self {
            Self::Unchanged { content, .. } | Self::Added { content, .. } => Some(content),
            Self::Modified { new_content, .. } => Some(new_content),
            Self::Removed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

/// Row counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffSummary {
    #[must_use]
    pub fn of(lines: &[DiffLine]) -> Self {
        let mut summary = Self::default();
        for line in lines {
            match line {
                DiffLine::Unchanged { .. } => summary.unchanged += 1,
                DiffLine::Added { .. } => summary.added += 1,
                DiffLine::Removed { .. } => summary.removed += 1,
                DiffLine::Modified { .. } => summary.modified += 1,
            }
        }
        summary
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.added + self.removed + self.modified > 0
    }
}

/// Splits on `\n` only; an empty text is a single empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Computes the LCS diff of two texts without a size guard.
#[must_use]
pub fn diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    lcs::diff(&old_lines, &new_lines)
}

/// LCS diff with a bound on the table it may allocate.
#[derive(Debug, Clone, Copy)]
pub struct DiffEngine {
    max_cells: usize,
}

impl DiffEngine {
    #[must_use]
    pub fn new(max_cells: usize) -> Self {
        Self { max_cells }
    }

    /// Number of table cells a diff of these line counts needs.
    #[must_use]
    pub fn cells_for(old_lines: usize, new_lines: usize) -> usize {
        (old_lines + 1).saturating_mul(new_lines + 1)
    }

    /// Diffs `old` against `new`.
    ///
    /// # Errors
    /// Returns `InputTooLarge` if the LCS table would exceed the cell budget.
    pub fn diff(&self, old: &str, new: &str) -> Result<Vec<DiffLine>> {
        let old_lines = split_lines(old);
        let new_lines = split_lines(new);
        let cells = Self::cells_for(old_lines.len(), new_lines.len());
        if cells > self.max_cells {
            return Err(ResurrectError::InputTooLarge {
                cells,
                limit: self.max_cells,
            });
        }
        log::debug!(
            "diffing {} against {} lines ({cells} cells)",
            old_lines.len(),
            new_lines.len()
        );
        Ok(lcs::diff(&old_lines, &new_lines))
    }
}

/// Old-text lines recovered from a diff, in order.
#[must_use]
pub fn old_side(lines: &[DiffLine]) -> Vec<&str> {
    lines.iter().filter_map(DiffLine::old_content).collect()
}

/// New-text lines recovered from a diff, in order.
#[must_use]
pub fn new_side(lines: &[DiffLine]) -> Vec<&str> {
    lines.iter().filter_map(DiffLine::new_content).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unchanged(old_line: usize, new_line: usize, content: &str) -> DiffLine {
        DiffLine::Unchanged { old_line, new_line, content: content.into() }
    }

    #[test]
    fn changed_line_is_remove_then_add() {
        let diff = diff_lines("a\nb\nc", "a\nx\nc");
        assert_eq!(
            diff,
            vec![
                unchanged(1, 1, "a"),
                DiffLine::Removed { old_line: 2, content: "b".into() },
                DiffLine::Added { new_line: 2, content: "x".into() },
                unchanged(3, 3, "c"),
            ]
        );
    }

    #[test]
    fn identical_texts_are_all_unchanged() {
        let diff = diff_lines("x\ny", "x\ny");
        assert_eq!(diff, vec![unchanged(1, 1, "x"), unchanged(2, 2, "y")]);
        assert!(!DiffSummary::of(&diff).has_changes());
    }

    #[test]
    fn empty_texts_compare_as_one_empty_line() {
        assert_eq!(diff_lines("", ""), vec![unchanged(1, 1, "")]);
    }

    #[test]
    fn insertion_at_start_and_deletion_at_end() {
        let diff = diff_lines("b\nc\nd", "a\nb\nc");
        let summary = DiffSummary::of(&diff);
        assert_eq!(summary, DiffSummary { unchanged: 2, added: 1, removed: 1, modified: 0 });
        assert_eq!(diff[0], DiffLine::Added { new_line: 1, content: "a".into() });
        assert_eq!(diff[3], DiffLine::Removed { old_line: 3, content: "d".into() });
    }

    #[test]
    fn sides_reconstruct_inputs() {
        let old = "one\ntwo\nthree\ntwo";
        let new = "two\nthree\nfour\none";
        let diff = diff_lines(old, new);
        assert_eq!(old_side(&diff), split_lines(old));
        assert_eq!(new_side(&diff), split_lines(new));
    }

    #[test]
    fn engine_rejects_oversized_tables() {
        let engine = DiffEngine::new(10);
        // 3 x 3 = 9 cells fits
        assert!(engine.diff("a\nb", "a\nc").is_ok());
        // 4 x 3 = 12 cells does not
        let err = engine.diff("a\nb\nc", "a\nc").unwrap_err();
        assert!(matches!(err, ResurrectError::InputTooLarge { cells: 12, limit: 10 }));
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(DiffLine::Removed { old_line: 4, content: "x".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "removed", "oldLine": 4, "content": "x"}));
    }
}
