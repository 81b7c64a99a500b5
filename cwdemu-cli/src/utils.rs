//! Utility functions for CLI operations: configuration loading and session
//! setup.

use crate::error::CliError;
use cwdemu::{init_logger, Config, ConfigBuilder, LogLevel, Logger, Session};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Host directory mounted as the emulated root.
    pub root: Option<PathBuf>,

    /// Directory to start in.
    pub cwd: Option<String>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        mount_root: global.root.clone(),
        initial_dir: global.cwd.clone(),
        ..Default::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the logger: flags first, then the configured (or environment) mode.
pub fn logger_for(global: &GlobalOptions, config: &Config) -> Logger {
    if global.verbose || global.quiet {
        return init_logger(global.verbose, global.quiet);
    }
    config
        .log_mode
        .as_deref()
        .and_then(|mode| LogLevel::parse(mode).ok())
        .map_or_else(|| init_logger(false, false), Logger::new)
}

/// Open a session as configured.
///
/// A `--cwd` or `initial_dir` that cannot be entered is a semantic failure.
pub fn open_session(config: &Config) -> Result<Session, CliError> {
    Session::from_config(config).map_err(|e| match e {
        cwdemu::Error::Change(change) => {
            CliError::SemanticFailure(format!("cannot start in {}: {change}", initial(config)))
        }
        other => CliError::from(other),
    })
}

fn initial(config: &Config) -> &str {
    config.initial_dir.as_deref().unwrap_or("/")
}
