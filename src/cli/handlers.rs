// src/cli/handlers.rs
use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::Analyzer;
use crate::config::{Config, CONFIG_FILE};
use crate::diff::{DiffEngine, DiffSummary};
use crate::discovery;
use crate::error::ResurrectError;
use crate::exit::ResurrectExit;
use crate::modernize;
use crate::project;
use crate::reporting;
use crate::rules::RULES;
use crate::types::Status;

const DEFAULT_PROJECT_NAME: &str = "project";

/// Loads the explicit config path, or `./resurrect.toml` when none is given.
///
/// # Errors
/// Returns error if an explicit path does not exist or any file is malformed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) if !p.exists() => bail!(ResurrectError::Config(format!(
            "config file not found: {}",
            p.display()
        ))),
        Some(p) => Config::load_from(p)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn read_source(path: &Path, config: &Config) -> Result<String> {
    let size = fs::metadata(path)
        .map_err(|e| ResurrectError::io(e, path))?
        .len();
    if size > config.limits.max_file_bytes {
        bail!(ResurrectError::InvalidInput(format!(
            "{} is {size} bytes (max_file_bytes: {})",
            path.display(),
            config.limits.max_file_bytes
        )));
    }
    let code = fs::read_to_string(path).map_err(|e| ResurrectError::io(e, path))?;
    Ok(code)
}

fn display_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn gate(status: Status, fail_on: Option<Status>) -> ResurrectExit {
    match fail_on {
        Some(level) if status >= level => ResurrectExit::CheckFailed,
        _ => ResurrectExit::Success,
    }
}

/// Handles the analyze command.
///
/// # Errors
/// Returns error if the file cannot be read or output fails.
pub fn handle_analyze(
    config: &Config,
    file: &Path,
    json: bool,
    fail_on: Option<Status>,
) -> Result<ResurrectExit> {
    let code = read_source(file, config)?;
    let report = Analyzer::new(config.rules.clone()).analyze(&code, &display_name(file));

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_file_report(&report);
    }
    Ok(gate(report.status, fail_on))
}

/// Handles the scan command.
///
/// # Errors
/// Returns error if discovery fails or the directory has nothing to analyze.
pub fn handle_scan(
    config: &Config,
    dir: &Path,
    name: Option<&str>,
    json: bool,
    fail_on: Option<Status>,
) -> Result<ResurrectExit> {
    let files = discovery::discover(dir, &config.limits)?;
    if files.is_empty() {
        bail!(ResurrectError::InvalidInput(format!(
            "No analyzable files found in {}",
            dir.display()
        )));
    }

    let name = name.map_or_else(|| project_name(dir), str::to_string);
    let report = project::analyze_project(&name, &files, config)?;

    if json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_project_report(&report);
    }
    Ok(gate(report.status, fail_on))
}

fn project_name(dir: &Path) -> String {
    dir.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map_or_else(|| DEFAULT_PROJECT_NAME.to_string(), |n| n.to_string_lossy().into_owned())
}

/// Handles the diff command.
///
/// # Errors
/// Returns error if either file is unreadable or the diff exceeds `max_diff_cells`.
pub fn handle_diff(
    config: &Config,
    old: &Path,
    new: &Path,
    json: bool,
    side_by_side: bool,
) -> Result<ResurrectExit> {
    let before = read_source(old, config)?;
    let after = read_source(new, config)?;
    let lines = DiffEngine::new(config.limits.max_diff_cells).diff(&before, &after)?;
    let summary = DiffSummary::of(&lines);

    if json {
        reporting::print_json(&json!({ "lines": lines, "summary": summary }))?;
        return Ok(ResurrectExit::Success);
    }

    println!("{} {}", "---".red(), display_name(old));
    println!("{} {}", "+++".green(), display_name(new));
    if side_by_side {
        reporting::print_side_by_side(&lines);
    } else {
        reporting::print_unified(&lines);
    }
    reporting::print_diff_summary(&summary);
    Ok(ResurrectExit::Success)
}

/// Handles the modernize command.
///
/// # Errors
/// Returns error if the file cannot be read or output fails.
pub fn handle_modernize(config: &Config, file: &Path, json: bool, diff: bool) -> Result<ResurrectExit> {
    let code = read_source(file, config)?;
    let conversion = modernize::modernize(&code, &display_name(file));

    if json {
        reporting::print_json(&conversion)?;
    } else {
        reporting::print_conversion(&conversion, diff);
    }
    Ok(ResurrectExit::Success)
}

/// Handles the rules command.
///
/// # Errors
/// Returns error if JSON output fails.
pub fn handle_rules(config: &Config, json: bool) -> Result<ResurrectExit> {
    if json {
        let rules: Vec<_> = RULES
            .iter()
            .map(|rule| {
                json!({
                    "id": rule.id,
                    "title": rule.title,
                    "description": rule.description,
                    "severity": rule.severity,
                    "threshold": config.rules.threshold_for(rule),
                    "enabled": config.rules.is_enabled(rule.id),
                })
            })
            .collect();
        reporting::print_json(&rules)?;
    } else {
        reporting::print_rules();
    }
    Ok(ResurrectExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<ResurrectExit> {
    let target = path.map_or_else(|| PathBuf::from(CONFIG_FILE), Path::to_path_buf);
    if target.exists() && !force {
        bail!(ResurrectError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }

    Config::default()
        .save(&target)
        .with_context(|| format!("writing {}", target.display()))?;
    println!("{} Created {}", "OK".green().bold(), target.display());
    Ok(ResurrectExit::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_compares_against_level() {
        assert_eq!(gate(Status::Warning, None), ResurrectExit::Success);
        assert_eq!(gate(Status::Warning, Some(Status::Error)), ResurrectExit::Success);
        assert_eq!(gate(Status::Warning, Some(Status::Warning)), ResurrectExit::CheckFailed);
        assert_eq!(gate(Status::Error, Some(Status::Warning)), ResurrectExit::CheckFailed);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/resurrect.toml"))).is_err());
    }
}
