//! Console output for file and project reports.

use colored::Colorize;

use crate::project::ProjectReport;
use crate::rules::RULES;
use crate::types::FileReport;

use super::shared::{pluralize, score_label, severity_label, status_label};

/// Prints one file's findings followed by its score line.
pub fn print_file_report(report: &FileReport) {
    println!(
        "{} {} {}",
        report.path.bold(),
        format!("({})", report.language).dimmed(),
        status_label(report.status)
    );

    if report.is_clean() {
        println!("  {} No legacy patterns found.", "OK".green().bold());
    }
    for finding in &report.findings {
        println!(
            "  {} {} {}",
            severity_label(finding.severity),
            finding.title,
            format!("x{}", finding.occurrences).dimmed()
        );
        println!("     {} {}", "=".blue(), finding.description.dimmed());
    }

    println!(
        "  {} complexity {}, {} {}, frameworks: {}",
        "-->".blue(),
        score_label(report.complexity_score),
        report.line_count,
        pluralize("line", report.line_count),
        report.frameworks.join(", ")
    );
    if !report.dependencies.is_empty() {
        println!("  {} depends on: {}", "-->".blue(), report.dependencies.join(", "));
    }
    println!();
}

pub fn print_project_report(report: &ProjectReport) {
    println!("{} {}", "Project".bold(), report.project_name.bold().cyan());
    println!("{}", report.summary);
    println!();

    if !report.top_risks.is_empty() {
        println!("{}", "TOP RISKS".red().bold());
        for risk in &report.top_risks {
            println!("  {} {} in {}", severity_label(risk.severity), risk.risk, risk.file.bold());
            println!("     {} {}", "=".blue(), risk.reason.dimmed());
        }
        println!();
    }

    if !report.outdated_patterns.is_empty() {
        println!("{}", "OUTDATED PATTERNS".yellow().bold());
        for p in &report.outdated_patterns {
            println!("  {} {} {}", severity_label(p.severity), p.pattern, format!("x{}", p.occurrences).dimmed());
        }
        println!();
    }

    if !report.modern_alternatives.is_empty() {
        println!("{}", "MODERN ALTERNATIVES".green().bold());
        for alt in &report.modern_alternatives {
            println!("  {} {} {}", alt.from, "->".blue(), alt.to.green());
            println!("     {} {}", "=".blue(), alt.benefit.dimmed());
        }
        println!();
    }

    println!("{}", "MIGRATION ROADMAP".cyan().bold());
    for (step, phase) in report.migration_roadmap.iter().zip(&report.phased_plan) {
        println!(
            "  {}. {} {}",
            step.step,
            step.title.bold(),
            format!("[{}, {}]", phase.estimated_effort, step.estimated_time).dimmed()
        );
        println!("     {}", step.description);
        for task in &step.tasks {
            println!("     - {task}");
        }
        let files = phase.target_files.len();
        println!("     {} {files} {}", "-->".blue(), pluralize("file", files));
    }
    println!();

    if !report.package_dependencies.is_empty() {
        println!("{}", "PACKAGES".bold());
        for dep in &report.package_dependencies {
            println!("  {} {}", dep.name, dep.version.dimmed());
        }
        println!();
    }

    println!(
        "{} {} across {} {}, average complexity {}",
        status_label(report.status),
        format!("{} {}", report.totals.issues_found, pluralize("issue", report.totals.issues_found)).bold(),
        report.totals.files_analyzed,
        pluralize("file", report.totals.files_analyzed),
        score_label(report.complexity_score)
    );
}

/// Prints the rule catalog.
pub fn print_rules() {
    for rule in RULES {
        let threshold = if rule.threshold > 0 {
            format!(" (fires above {})", rule.threshold)
        } else {
            String::new()
        };
        println!(
            "{} {}{}",
            severity_label(rule.severity),
            rule.id.as_str().bold(),
            threshold.dimmed()
        );
        println!("     {} {}", rule.title, format!("- {}", rule.description).dimmed());
    }
}
