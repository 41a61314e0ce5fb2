use clap::Parser;
use colored::Colorize;
use resurrect_core::cli::{dispatch, Cli};
use resurrect_core::exit::ResurrectExit;

fn main() -> ResurrectExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ResurrectExit::for_error(&e)
        }
    }
}

/// `RUST_LOG` wins; `--verbose` raises the default from warn to debug.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
