//! Legacy code modernization analyzer.
//!
//! Scores source files against a catalog of outdated-pattern rules, diffs
//! texts line by line, produces cosmetic "modernized" rewrites and rolls
//! per-file results up into a phased migration plan.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod diff;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod lang;
pub mod modernize;
pub mod project;
pub mod reporting;
pub mod rules;
pub mod types;

pub use analysis::{analyze, Analyzer};
pub use diff::{diff_lines, DiffEngine, DiffLine};
pub use error::{ResurrectError, Result};
pub use modernize::{modernize, Conversion};
pub use project::{analyze_project, ProjectReport};
pub use types::{FileReport, Finding, Severity, SourceFile, Status};
