//! Console rendering of line diffs and modernized files.

use colored::Colorize;

use crate::diff::{self, DiffLine, DiffSummary};
use crate::modernize::Conversion;

use super::shared::pluralize;

const PANEL_WIDTH: usize = 48;

/// Unified view: one row per diff line with a `+`/`-` gutter.
pub fn print_unified(lines: &[DiffLine]) {
    for line in lines {
        match line {
            DiffLine::Unchanged { content, .. } => println!("  {}", content.dimmed()),
            DiffLine::Removed { content, .. } => println!("{}", format!("- {content}").red()),
            DiffLine::Added { content, .. } => println!("{}", format!("+ {content}").green()),
            DiffLine::Modified { old_content, new_content, .. } => {
                println!("{}", format!("- {old_content}").red());
                println!("{}", format!("+ {new_content}").green());
            }
        }
    }
}

fn fit(text: &str) -> String {
    let mut out: String = text.chars().take(PANEL_WIDTH).collect();
    let len = out.chars().count();
    if len < PANEL_WIDTH {
        out.push_str(&" ".repeat(PANEL_WIDTH - len));
    }
    out
}

fn gutter(line: Option<usize>) -> String {
    line.map_or_else(|| "    ".to_string(), |n| format!("{n:4}"))
}

/// Two columns, old on the left and new on the right.
pub fn print_side_by_side(lines: &[DiffLine]) {
    for line in lines {
        let left = fit(line.old_content().unwrap_or(""));
        let right = line.new_content().unwrap_or("");
        let (left, right) = match line {
            DiffLine::Unchanged { .. } => (left.normal(), right.normal()),
            DiffLine::Removed { .. } => (left.red(), right.normal()),
            DiffLine::Added { .. } => (left.normal(), right.green()),
            DiffLine::Modified { .. } => (left.red(), right.green()),
        };
        println!(
            "{} {} {} {} {}",
            gutter(line.old_line()).blue(),
            left,
            "|".blue(),
            gutter(line.new_line()).blue(),
            right
        );
    }
}

pub fn print_diff_summary(summary: &DiffSummary) {
    if !summary.has_changes() {
        println!("{} Files are identical.", "OK".green().bold());
        return;
    }
    let modified = if summary.modified > 0 {
        format!(", {} modified", summary.modified)
    } else {
        String::new()
    };
    println!(
        "{} {}, {} {}{modified}, {} unchanged",
        format!("+{}", summary.added).green(),
        pluralize("addition", summary.added),
        format!("-{}", summary.removed).red(),
        pluralize("removal", summary.removed),
        summary.unchanged
    );
}

/// Prints the rewritten code, or the positional comparison when `show_diff`.
pub fn print_conversion(conversion: &Conversion, show_diff: bool) {
    println!(
        "{} {}",
        conversion.filename.bold(),
        format!("({})", conversion.language).dimmed()
    );

    if conversion.is_unchanged() {
        println!("{} Nothing to modernize.", "OK".green().bold());
        return;
    }

    if show_diff {
        print_side_by_side(&diff::positional::compare(&conversion.original_code, &conversion.modern_code));
    } else {
        println!("{}", conversion.modern_code);
    }

    let d = conversion.delta;
    println!(
        "{} {} changed, {} added, {} removed",
        "-->".blue(),
        d.lines_changed,
        d.lines_added,
        d.lines_removed
    );
}
