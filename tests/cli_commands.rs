//! Drives the `resurrect` binary end to end in a temp directory.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

const EXPRESS_DEMO: &str = include_str!("../demos/legacy-express-jquery.js");

fn workspace() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::create_dir_all(dir.path().join("src")).expect("failed to create src");
    fs::write(dir.path().join("src/app.js"), EXPRESS_DEMO).expect("failed to write app.js");
    fs::write(dir.path().join("src/clean.ts"), "const a = 1;\n").expect("failed to write clean.ts");
    dir
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resurrect"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute resurrect")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout is not valid JSON")
}

#[test]
fn analyze_json_reports_findings() {
    let dir = workspace();
    let output = run(&dir, &["analyze", "src/app.js", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let value = stdout_json(&output);
    assert_eq!(value["path"], "src/app.js");
    assert_eq!(value["language"], "JavaScript");
    assert_eq!(value["status"], "warning");
    assert!(value["findings"].as_array().is_some_and(|f| !f.is_empty()));
}

#[test]
fn fail_on_sets_check_failed_exit() {
    let dir = workspace();
    let output = run(&dir, &["analyze", "src/app.js", "--fail-on", "warning"]);
    assert_eq!(output.status.code(), Some(6));

    let output = run(&dir, &["analyze", "src/clean.ts", "--fail-on", "warning"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn scan_json_builds_project_report() {
    let dir = workspace();
    let output = run(&dir, &["scan", "--name", "demo", "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let value = stdout_json(&output);
    assert_eq!(value["projectName"], "demo");
    assert_eq!(value["totals"]["filesAnalyzed"], 2);
    assert!(value["phasedPlan"].as_array().is_some_and(|p| !p.is_empty()));
}

#[test]
fn scan_of_empty_directory_is_invalid_input() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let output = run(&dir, &["scan"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No analyzable files"));
}

#[test]
fn diff_json_lists_rows_and_summary() {
    let dir = workspace();
    fs::write(dir.path().join("old.txt"), "a\nb\nc").expect("write old");
    fs::write(dir.path().join("new.txt"), "a\nx\nc").expect("write new");

    let output = run(&dir, &["diff", "old.txt", "new.txt", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    assert_eq!(value["lines"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["summary"]["added"], 1);
    assert_eq!(value["summary"]["removed"], 1);
}

#[test]
fn diff_over_cell_limit_is_invalid_input() {
    let dir = workspace();
    fs::write(dir.path().join("resurrect.toml"), "[limits]\nmax_diff_cells = 4\n").expect("write config");
    fs::write(dir.path().join("old.txt"), "a\nb\nc").expect("write old");
    fs::write(dir.path().join("new.txt"), "a\nx\nc").expect("write new");

    let output = run(&dir, &["diff", "old.txt", "new.txt"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Input too large"));
}

#[test]
fn modernize_prints_rewrite() {
    let dir = workspace();
    fs::write(dir.path().join("old.js"), "var a = 1;\n").expect("write old.js");
    let output = run(&dir, &["modernize", "old.js", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    assert_eq!(value["modernCode"], "const a = 1;\n");
    assert_eq!(value["language"], "javascript");
}

#[test]
fn rules_json_lists_catalog() {
    let dir = workspace();
    let output = run(&dir, &["rules", "--json"]);
    assert_eq!(output.status.code(), Some(0));
    let value = stdout_json(&output);
    let rules = value.as_array().expect("rules array");
    assert_eq!(rules.len(), 9);
    assert_eq!(rules[0]["id"], "jquery-ajax");
}

#[test]
fn init_writes_config_once() {
    let dir = workspace();
    let output = run(&dir, &["init"]);
    assert_eq!(output.status.code(), Some(0));
    let written = fs::read_to_string(dir.path().join("resurrect.toml")).expect("config written");
    assert!(written.contains("max_diff_cells"));

    let again = run(&dir, &["init"]);
    assert_eq!(again.status.code(), Some(2));
    let forced = run(&dir, &["init", "--force"]);
    assert_eq!(forced.status.code(), Some(0));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = workspace();
    fs::write(dir.path().join("resurrect.toml"), "[rules.thresholds]\nbogus = 1\n").expect("write config");
    let output = run(&dir, &["rules"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("bogus"));
}
