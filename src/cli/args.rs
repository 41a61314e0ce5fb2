use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Status;

#[derive(Parser)]
#[command(
    name = "resurrect",
    version,
    about = "Legacy code modernization analyzer"
)]
pub struct Cli {
    /// Read settings from this file instead of ./resurrect.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single source file
    Analyze {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long)]
        json: bool,
        /// Exit with code 6 if the status is at least this level
        #[arg(long, value_name = "LEVEL")]
        fail_on: Option<Status>,
    },
    /// Analyze every source file under a directory as one project
    Scan {
        #[arg(value_name = "DIR", default_value = ".")]
        dir: PathBuf,
        /// Project name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        json: bool,
        #[arg(long, value_name = "LEVEL")]
        fail_on: Option<Status>,
    },
    /// Line diff between two files
    Diff {
        old: PathBuf,
        new: PathBuf,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        side_by_side: bool,
    },
    /// Show a modernized rewrite of a file
    Modernize {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long)]
        json: bool,
        /// Show original and rewrite side by side
        #[arg(long)]
        diff: bool,
    },
    /// List the rule catalog
    Rules {
        #[arg(long)]
        json: bool,
    },
    /// Write a default resurrect.toml
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}
