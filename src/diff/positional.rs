// src/diff/positional.rs
//! Index-aligned comparison for side-by-side panels.

use serde::Serialize;

use super::{split_lines, DiffLine};

/// Compares line `i` of `old` with line `i` of `new`.
///
/// A missing or empty line on one side makes the row `Added` or `Removed`;
/// two different non-empty lines make it `Modified`.
#[must_use]
pub fn compare(old: &str, new: &str) -> Vec<DiffLine> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);
    let rows = old_lines.len().max(new_lines.len());

    (0..rows)
        .map(|i| {
            let line = i + 1;
            let before = old_lines.get(i).copied().unwrap_or("");
            let after = new_lines.get(i).copied().unwrap_or("");

            if before == after {
                DiffLine::Unchanged { old_line: line, new_line: line, content: before.to_string() }
            } else if after.is_empty() {
                DiffLine::Removed { old_line: line, content: before.to_string() }
            } else if before.is_empty() {
                DiffLine::Added { new_line: line, content: after.to_string() }
            } else {
                DiffLine::Modified {
                    line,
                    old_content: before.to_string(),
                    new_content: after.to_string(),
                }
            }
        })
        .collect()
}

/// Line-count change between an original and its rewrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDelta {
    pub lines_changed: usize,
    pub lines_added: usize,
    pub lines_removed: usize,
}

/// Counts added/removed lines by length difference and changed lines by
/// index-aligned comparison ignoring surrounding whitespace.
#[must_use]
pub fn line_delta(original: &str, modern: &str) -> LineDelta {
    let before = split_lines(original);
    let after = split_lines(modern);

    let lines_added = after.len().saturating_sub(before.len());
    let lines_removed = before.len().saturating_sub(after.len());
    let differing = before
        .iter()
        .zip(&after)
        .filter(|(a, b)| a.trim() != b.trim())
        .count();

    LineDelta {
        lines_changed: differing + lines_added + lines_removed,
        lines_added,
        lines_removed,
    }
}
