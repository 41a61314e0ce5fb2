// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, LimitsConfig, Preferences, ResurrectToml, RuleConfig};

use crate::error::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `resurrect.toml` from the current directory, or defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        io::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads a config from an explicit path, or defaults if it does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Parses config text.
    ///
    /// # Errors
    /// Returns error if the TOML is malformed or has wrongly typed fields.
    pub fn parse_toml(content: &str) -> Result<Self> {
        io::parse_toml(content)
    }

    /// Saves the current configuration to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }
}
