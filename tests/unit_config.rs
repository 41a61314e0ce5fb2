// tests/unit_config.rs
use std::fs;

use resurrect_core::config::{Config, LimitsConfig, RuleConfig};
use resurrect_core::rules::RuleId;
use resurrect_core::ResurrectError;

#[test]
fn test_defaults() {
    let limits = LimitsConfig::default();
    assert_eq!(limits.max_diff_cells, 4_000_000);
    assert_eq!(limits.max_file_bytes, 512 * 1024);
    assert_eq!(limits.max_batch_files, 500);

    let rules = RuleConfig::default();
    assert!(rules.thresholds.is_empty());
    assert!(rules.is_enabled(RuleId::SqlInjection));
    assert!(Config::new().preferences.color);
}

#[test]
fn test_missing_file_is_default() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::load_from(&d.path().join("resurrect.toml")).unwrap();
    assert_eq!(c, Config::default());
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("resurrect.toml");
    fs::write(
        &path,
        "[rules]\ndisabled = [\"inline-events\"]\n\n[rules.thresholds]\ngetelementbyid = 2\n\n[limits]\nmax_batch_files = 20\n",
    )
    .unwrap();

    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.rules.thresholds.get("getelementbyid"), Some(&2));
    assert_eq!(c.rules.disabled, vec![RuleId::InlineEvents]);
    assert_eq!(c.limits.max_batch_files, 20);
    assert_eq!(c.limits.max_diff_cells, 4_000_000);
}

#[test]
fn test_unknown_threshold_key_is_rejected() {
    let err = Config::parse_toml("[rules.thresholds]\nno-such-rule = 1\n").unwrap_err();
    assert!(matches!(err, ResurrectError::Config(_)));
    assert!(err.to_string().contains("no-such-rule"));
}

#[test]
fn test_malformed_toml_names_the_file() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("resurrect.toml");
    fs::write(&path, "[limits\nmax_batch_files = 1").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("resurrect.toml"));
}

#[test]
fn test_save_then_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("resurrect.toml");
    let mut c = Config::default();
    c.rules.thresholds.insert("callback-depth".into(), 5);
    c.rules.disabled.push(RuleId::GetElementById);
    c.preferences.color = false;
    c.save(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), c);
}
