//! retropath CLI binary.
//!
//! Expands and abbreviates portable paths and resolves the special
//! directories of an installed frontend.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Route library diagnostics to stderr at the level picked by the flags
    let logger = retropath::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = GlobalOptions {
        quiet: cli.quiet,
        config: cli.config,
        capacity: cli.capacity,
    };

    let result = match cli.command {
        cli::Command::Expand(cmd) => cmd.execute(&global),
        cli::Command::Abbreviate(cmd) => cmd.execute(&global),
        cli::Command::AppPath(cmd) => cmd.execute(&global),
        cli::Command::DataDir(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
