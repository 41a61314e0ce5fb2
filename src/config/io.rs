// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::{Config, ResurrectToml};
use crate::error::{ResurrectError, Result};

pub const CONFIG_FILE: &str = "resurrect.toml";

/// Parses TOML text into a config.
///
/// # Errors
/// Returns `ResurrectError::Config` if the text is not a valid config.
pub fn parse_toml(content: &str) -> Result<Config> {
    let parsed: ResurrectToml =
        toml::from_str(content).map_err(|e| ResurrectError::Config(e.to_string()))?;
    {
        let unknown = parsed.rules.unknown_threshold_keys();
        if !unknown.is_empty() {
            return Err(ResurrectError::Config(format!(
                "unknown rule in [rules.thresholds]: {}",
                unknown.join(", ")
            )));
        }
    }
    Ok(parsed.into())
}

/// Loads `path`, falling back to defaults when the file does not exist.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path).map_err(|e| ResurrectError::io(e, path))?;
    let config = parse_toml(&content).map_err(|e| match e {
        ResurrectError::Config(msg) => ResurrectError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Serializes the persistent parts of a config to `path`.
///
/// # Errors
/// Returns error if serialization or the file write fails.
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    let doc = ResurrectToml {
        rules: config.rules.clone(),
        limits: config.limits.clone(),
        preferences: config.preferences.clone(),
    };
    let content = toml::to_string_pretty(&doc).map_err(|e| ResurrectError::Config(e.to_string()))?;
    fs::write(path, content).map_err(|e| ResurrectError::io(e, path))
}
