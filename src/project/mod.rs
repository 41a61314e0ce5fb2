// src/project/mod.rs
//! Whole-project analysis: per-file reports rolled up into risks, a phased
//! plan and a roadmap.

pub mod alternatives;
pub mod packages;
pub mod roadmap;

pub use self::alternatives::ModernAlternative;
pub use self::packages::{DependencyKind, PackageDependency};
pub use self::roadmap::{Effort, Phase, RoadmapStep};

use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::error::{ResurrectError, Result};
use crate::rules::RuleId;
use crate::types::{FileReport, Severity, SourceFile, Status};

const MAX_TOP_RISKS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRisk {
    pub file: String,
    pub rule: RuleId,
    pub risk: &'static str,
    pub reason: &'static str,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub files_analyzed: usize,
    pub issues_found: usize,
    pub modern_alternatives: usize,
}

/// A rule's findings summed over every file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRollup {
    pub pattern: &'static str,
    pub severity: Severity,
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub project_name: String,
    pub totals: Totals,
    pub summary: String,
    pub top_risks: Vec<TopRisk>,
    pub phased_plan: Vec<Phase>,
    pub migration_roadmap: Vec<RoadmapStep>,
    pub file_results: Vec<FileReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub package_dependencies: Vec<PackageDependency>,
    pub status: Status,
    pub language: String,
    pub framework: String,
    pub complexity_score: u32,
    pub outdated_patterns: Vec<PatternRollup>,
    pub modern_alternatives: Vec<ModernAlternative>,
}

fn validate(name: &str, files: &[SourceFile], config: &Config) -> Result<()> {
    let invalid = |msg: &str| Err(ResurrectError::InvalidInput(msg.to_string()));

    if name.is_empty() {
        return invalid("Missing or invalid projectName");
    }
    if files.is_empty() {
        return invalid("Missing or invalid files array");
    }
    if files.len() > config.limits.max_batch_files {
        return Err(ResurrectError::InvalidInput(format!(
            "Too many files: {} (limit: {})",
            files.len(),
            config.limits.max_batch_files
        )));
    }
    for file in files {
        if file.path.is_empty() {
            return invalid("Each file must have a valid path");
        }
        if file.code.is_empty() {
            return invalid("Each file must have valid code content");
        }
    }
    Ok(())
}

/// Analyzes every file and builds the project report.
///
/// # Errors
/// Returns `InvalidInput` if the name is empty, the file list is empty or
/// over the batch limit, or any file has an empty path or empty code.
pub fn analyze_project(name: &str, files: &[SourceFile], config: &Config) -> Result<ProjectReport> {
    validate(name, files, config)?;

    let analyzer = Analyzer::new(config.rules.clone());
    let file_results: Vec<FileReport> = files
        .par_iter()
        .map(|f| analyzer.analyze(&f.code, &f.path))
        .collect();

    let modern_alternatives = alternatives::collect(&file_results);
    let totals = Totals {
        files_analyzed: file_results.len(),
        issues_found: file_results.iter().map(|r| r.findings.len()).sum(),
        modern_alternatives: modern_alternatives.len(),
    };

    let top_risks = top_risks(&file_results);
    let phased_plan = roadmap::phased_plan(&file_results, &top_risks);
    let migration_roadmap = roadmap::migration_roadmap(&phased_plan, &file_results);
    let languages = distinct(file_results.iter().map(|r| r.language));
    let frameworks = distinct(file_results.iter().flat_map(|r| r.frameworks.iter().copied()));
    let complexity_score = average_complexity(&file_results);

    log::debug!(
        "project {name}: {} files, {} issues",
        totals.files_analyzed,
        totals.issues_found
    );

    Ok(ProjectReport {
        project_name: name.to_string(),
        summary: summary(name, &file_results, &totals, &languages, &frameworks, complexity_score),
        totals,
        top_risks,
        phased_plan,
        migration_roadmap,
        package_dependencies: packages::from_files(files),
        status: overall_status(&file_results),
        language: languages.join(", "),
        framework: frameworks.join(", "),
        complexity_score,
        outdated_patterns: outdated_patterns(&file_results),
        modern_alternatives,
        file_results,
    })
}

/// High-severity findings, most severe first, capped at ten.
#[must_use]
pub fn top_risks(reports: &[FileReport]) -> Vec<TopRisk> {
    let mut risks: Vec<TopRisk> = reports
        .iter()
        .flat_map(|r| {
            r.findings
                .iter()
                .filter(|f| f.severity == Severity::High)
                .map(|f| TopRisk {
                    file: r.path.clone(),
                    rule: f.id,
                    risk: f.title,
                    reason: f.description,
                    severity: f.severity,
                })
        })
        .collect();
    risks.sort_by_key(|r| r.severity.rank());
    risks.truncate(MAX_TOP_RISKS);
    risks
}

fn distinct<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Worst status across files; a project of clean files is a success.
#[must_use]
pub fn overall_status(reports: &[FileReport]) -> Status {
    reports
        .iter()
        .map(|r| r.status)
        .max()
        .unwrap_or(Status::Success)
}

/// Rounded mean of file scores; zero for no files.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn average_complexity(reports: &[FileReport]) -> u32 {
    if reports.is_empty() {
        return 0;
    }
    let total: u64 = reports.iter().map(|r| u64::from(r.complexity_score)).sum();
    (total as f64 / reports.len() as f64).round() as u32
}

/// Sums occurrences per finding title, in first-seen order.
#[must_use]
pub fn outdated_patterns(reports: &[FileReport]) -> Vec<PatternRollup> {
    let mut out: Vec<PatternRollup> = Vec::new();
    for finding in reports.iter().flat_map(|r| &r.findings) {
        match out.iter_mut().find(|p| p.pattern == finding.title) {
            Some(existing) => existing.occurrences += finding.occurrences,
            None => out.push(PatternRollup {
                pattern: finding.title,
                severity: finding.severity,
                occurrences: finding.occurrences,
            }),
        }
    }
    out
}

fn summary(
    name: &str,
    reports: &[FileReport],
    totals: &Totals,
    languages: &[&str],
    frameworks: &[&str],
    average: u32,
) -> String {
    let urgent = reports.iter().filter(|r| r.status == Status::Error).count();
    format!(
        "{name} contains {} files across {} using {}. Found {} issues with average complexity of {average}/100. \
         {urgent} files require immediate attention. Recommended {} modernization opportunities.",
        totals.files_analyzed,
        languages.join(", "),
        frameworks.join(", "),
        totals.issues_found,
        totals.modern_alternatives,
    )
}
