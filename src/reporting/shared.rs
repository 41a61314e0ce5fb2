use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::error::Result;
use crate::types::{Severity, Status};

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn severity_label(severity: Severity) -> ColoredString {
    let label = format!("[{}]", severity.as_str().to_uppercase());
    match severity {
        Severity::High => label.red().bold(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.dimmed(),
    }
}

pub(crate) fn status_label(status: Status) -> ColoredString {
    let label = status.as_str().to_uppercase();
    match status {
        Status::Error => label.red().bold(),
        Status::Warning => label.yellow().bold(),
        Status::Success => label.green().bold(),
    }
}

/// Colors a 0..=100 score by the same bands the status uses.
pub(crate) fn score_label(score: u32) -> ColoredString {
    let label = format!("{score}/100");
    if score > 80 {
        label.red()
    } else if score > 50 {
        label.yellow()
    } else {
        label.green()
    }
}

/// Prints any report as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
