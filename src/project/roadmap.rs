// src/project/roadmap.rs
//! Phased migration plan and the step-by-step roadmap derived from it.

use serde::Serialize;
use std::fmt;

use crate::analysis::frameworks::JQUERY;
use crate::lang::Lang;
use crate::rules::RuleId;
use crate::types::FileReport;

use super::TopRisk;

/// T-shirt sized effort estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Effort {
    XS,
    S,
    M,
    L,
    XL,
}

impl Effort {
    #[must_use]
    pub const fn estimated_time(self) -> &'static str {
        match self {
            Self::XS => "1-2 days",
            Self::S => "3-5 days",
            Self::M => "1-2 weeks",
            Self::L => "2-4 weeks",
            Self::XL => "1-2 months",
        }
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Security,
    Syntax,
    Jquery,
    Framework,
}

struct StageText {
    title: &'static str,
    description: &'static str,
    closing_task: &'static str,
}

impl Stage {
    const fn text(self) -> StageText {
        match self {
            Self::Security => StageText {
                title: "Fix Critical Security Vulnerabilities",
                description: "Address SQL injection risks and deprecated database functions",
                closing_task: "Add regression tests for every rewritten query",
            },
            Self::Syntax => StageText {
                title: "Modernize JavaScript Syntax",
                description: "Update to ES6+ syntax with const/let and arrow functions",
                closing_task: "Enable a linter rule that rejects var",
            },
            Self::Jquery => StageText {
                title: "Remove jQuery Dependency",
                description: "Replace jQuery with native APIs and modern libraries",
                closing_task: "Drop jQuery from the page bundle",
            },
            Self::Framework => StageText {
                title: "Migrate to Modern Framework",
                description: "Adopt React, Vue, or Next.js for component-based architecture",
                closing_task: "Cover migrated views with component tests",
            },
        }
    }
}

/// One phase of the migration plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub phase: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub target_files: Vec<String>,
    pub estimated_effort: Effort,
    #[serde(skip)]
    stage: Stage,
}

/// A roadmap step, one per phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub step: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub estimated_time: &'static str,
    pub tasks: Vec<String>,
}

const MAX_LISTED_FILES: usize = 20;
const MAX_FRAMEWORK_FILES: usize = 10;

fn dedup_first_seen<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.iter().any(|seen| seen == item) {
            out.push(item.to_string());
        }
    }
    out
}

fn paths<'a>(reports: impl Iterator<Item = &'a FileReport>) -> Vec<String> {
    reports.map(|r| r.path.clone()).collect()
}

/// Builds the plan. Phases are numbered from 1 without gaps; the framework
/// phase is always present.
#[must_use]
pub fn phased_plan(reports: &[FileReport], top_risks: &[TopRisk]) -> Vec<Phase> {
    let mut plan = Vec::new();
    let mut push = |stage: Stage, target_files: Vec<String>, estimated_effort: Effort| {
        let text = stage.text();
        plan.push(Phase {
            phase: plan.len() + 1,
            title: text.title,
            description: text.description,
            target_files,
            estimated_effort,
            stage,
        });
    };

    let security = dedup_first_seen(
        top_risks
            .iter()
            .filter(|r| matches!(r.rule, RuleId::SqlInjection | RuleId::DeprecatedMysql))
            .map(|r| r.file.as_str()),
    );
    if !security.is_empty() {
        let effort = if security.len() > 10 { Effort::L } else { Effort::M };
        push(Stage::Security, security, effort);
    }

    let js = paths(
        reports
            .iter()
            .filter(|r| is_javascript(r) && r.has_finding(RuleId::VarDeclarations)),
    );
    if !js.is_empty() {
        let effort = if js.len() > 20 { Effort::L } else { Effort::M };
        push(Stage::Syntax, js.into_iter().take(MAX_LISTED_FILES).collect(), effort);
    }

    let jquery = paths(reports.iter().filter(|r| r.frameworks.contains(&JQUERY)));
    if !jquery.is_empty() {
        let effort = if jquery.len() > 15 { Effort::XL } else { Effort::L };
        push(Stage::Jquery, jquery.into_iter().take(MAX_LISTED_FILES).collect(), effort);
    }

    push(
        Stage::Framework,
        paths(reports.iter().take(MAX_FRAMEWORK_FILES)),
        Effort::XL,
    );

    plan
}

fn is_javascript(report: &FileReport) -> bool {
    Lang::from_filename(&report.path).is_some_and(Lang::is_javascript)
}

/// One step per phase. Tasks name each finding title seen in the phase's
/// target files, followed by the phase's closing task.
#[must_use]
pub fn migration_roadmap(plan: &[Phase], reports: &[FileReport]) -> Vec<RoadmapStep> {
    plan.iter()
        .map(|phase| {
            let text = phase.stage.text();
            let titles = dedup_first_seen(
                reports
                    .iter()
                    .filter(|r| phase.target_files.contains(&r.path))
                    .flat_map(|r| r.findings.iter().map(|f| f.title)),
            );
            let mut tasks: Vec<String> = titles.into_iter().map(|t| format!("Resolve {t}")).collect();
            tasks.push(text.closing_task.to_string());

            RoadmapStep {
                step: phase.phase,
                title: phase.title,
                description: phase.description,
                estimated_time: phase.estimated_effort.estimated_time(),
                tasks,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::project::top_risks as risks;

    #[test]
    fn clean_project_gets_only_framework_phase() {
        let reports = vec![analyze("const a = 1;", "a.ts")];
        let plan = phased_plan(&reports, &risks(&reports));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].phase, 1);
        assert_eq!(plan[0].title, "Migrate to Modern Framework");
        assert_eq!(plan[0].estimated_effort, Effort::XL);
    }

    #[test]
    fn phases_are_numbered_consecutively() {
        let reports = vec![
            analyze("$.get('/items');\nvar a = 1;", "app.js"),
            analyze("<?php mysql_query($q); ?>", "db.php"),
        ];
        let plan = phased_plan(&reports, &risks(&reports));
        let titles: Vec<_> = plan.iter().map(|p| (p.phase, p.title)).collect();
        assert_eq!(
            titles,
            vec![
                (1, "Fix Critical Security Vulnerabilities"),
                (2, "Modernize JavaScript Syntax"),
                (3, "Remove jQuery Dependency"),
                (4, "Migrate to Modern Framework"),
            ]
        );
        assert_eq!(plan[0].target_files, vec!["db.php"]);
    }

    #[test]
    fn typescript_is_not_in_syntax_phase() {
        let reports = vec![analyze("var a = 1;", "a.ts")];
        let plan = phased_plan(&reports, &[]);
        assert!(plan.iter().all(|p| p.title != "Modernize JavaScript Syntax"));
    }

    #[test]
    fn roadmap_steps_follow_phases() {
        let reports = vec![analyze("var a = 1;", "a.js")];
        let plan = phased_plan(&reports, &[]);
        let steps = migration_roadmap(&plan, &reports);
        assert_eq!(steps.len(), plan.len());
        assert_eq!(steps[0].estimated_time, "1-2 weeks");
        assert_eq!(steps[0].tasks[0], "Resolve var declarations");
        assert_eq!(steps[0].tasks.last().map(String::as_str), Some("Enable a linter rule that rejects var"));
        assert_eq!(steps[1].estimated_time, "1-2 months");
    }

    #[test]
    fn effort_labels() {
        assert_eq!(Effort::XS.to_string(), "XS");
        assert_eq!(Effort::L.estimated_time(), "2-4 weeks");
    }
}
