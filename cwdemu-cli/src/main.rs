//! Main entry point for the cwdemu CLI.
//!
//! Commands:
//! - `resolve`: compose paths against the emulated current directory
//! - `check`: validate paths structurally
//! - `cd`: change directory and print the result
//! - `shell`: read `cd`/`pwd`/`valid`/`resolve` lines from stdin

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let e = error::CliError::from(e);
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        root: cli.root,
        cwd: cli.cwd,
    };

    let config = match utils::load_configuration(&global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };
    utils::logger_for(&global, &config).install();

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global, &config),
        cli::Command::Check(cmd) => cmd.execute(&global, &config),
        cli::Command::Cd(cmd) => cmd.execute(&global, &config),
        cli::Command::Shell(cmd) => cmd.execute(&global, &config),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
