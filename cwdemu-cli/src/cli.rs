//! CLI structure and command definitions.

use crate::commands::{CdCommand, CheckCommand, ResolveCommand, ShellCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Emulated current working directory over a mounted host directory.
#[derive(Parser, Debug)]
#[command(name = "cwdemu")]
#[command(version, about = "Emulate a current working directory", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of the user config
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Host directory to mount as the emulated root (overrides CWDEMU_MOUNT_ROOT)
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Directory to start in
    #[arg(long, value_name = "PATH", global = true)]
    pub cwd: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical form of each path
    Resolve(ResolveCommand),

    /// Check that each path is structurally valid
    Check(CheckCommand),

    /// Change directory and print the new current directory
    Cd(CdCommand),

    /// Run commands read from standard input
    Shell(ShellCommand),
}
