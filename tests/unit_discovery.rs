// tests/unit_discovery.rs
use std::fs;
use std::path::Path;

use resurrect_core::config::LimitsConfig;
use resurrect_core::discovery::discover;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn workspace() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "js/app.js", "var a = 1;");
    write(d.path(), "index.php", "<?php echo 1;");
    write(d.path(), "package.json", "{}");
    write(d.path(), "README.md", "# readme");
    write(d.path(), "node_modules/jquery/jquery.js", "var jQuery;");
    write(d.path(), "dist/bundle.js", "var x;");
    write(d.path(), "empty.js", "");
    d
}

#[test]
fn test_collects_sorted_relative_paths() {
    let d = workspace();
    let files = discover(d.path(), &LimitsConfig::default()).unwrap();
    let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["index.php", "js/app.js", "package.json"]);
    assert_eq!(files[1].code, "var a = 1;");
}

#[test]
fn test_size_and_count_limits() {
    let d = workspace();
    write(d.path(), "big.js", &"x".repeat(64));

    let limits = LimitsConfig { max_file_bytes: 32, ..LimitsConfig::default() };
    let files = discover(d.path(), &limits).unwrap();
    assert!(files.iter().all(|f| f.path != "big.js"));

    let limits = LimitsConfig { max_batch_files: 2, ..LimitsConfig::default() };
    assert_eq!(discover(d.path(), &limits).unwrap().len(), 2);
}

#[test]
fn test_missing_root_is_error() {
    let d = tempfile::tempdir().unwrap();
    assert!(discover(&d.path().join("nope"), &LimitsConfig::default()).is_err());
}
