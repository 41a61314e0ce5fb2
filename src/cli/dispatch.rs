//! Command dispatch, kept out of the binary so it can be tested.

use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;
use crate::exit::ResurrectExit;

/// Loads configuration and executes the parsed command.
///
/// # Errors
/// Returns error if configuration loading or the command handler fails.
pub fn execute(cli: Cli) -> Result<ResurrectExit> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(ResurrectExit::Success);
    };

    if let Commands::Init { force } = command {
        return handlers::handle_init(cli.config.as_deref(), force);
    }

    let config = handlers::load_config(cli.config.as_deref())?;
    if !config.preferences.color {
        colored::control::set_override(false);
    }

    match command {
        Commands::Analyze { file, json, fail_on } => {
            handlers::handle_analyze(&config, &file, json, fail_on)
        }
        Commands::Scan { dir, name, json, fail_on } => {
            handlers::handle_scan(&config, &dir, name.as_deref(), json, fail_on)
        }
        Commands::Diff { old, new, json, side_by_side } => {
            handlers::handle_diff(&config, &old, &new, json, side_by_side)
        }
        Commands::Modernize { file, json, diff } => {
            handlers::handle_modernize(&config, &file, json, diff)
        }
        Commands::Rules { json } => handlers::handle_rules(&config, json),
        Commands::Init { force } => handlers::handle_init(cli.config.as_deref(), force),
    }
}
