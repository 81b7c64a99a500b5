//! Environment variable handling for configuration overrides.
//!
//! `CWDEMU_*` variables override values from configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Host directory mounted as `/`.
pub const MOUNT_ROOT_ENV: &str = "CWDEMU_MOUNT_ROOT";
/// Directory a session starts in.
pub const INITIAL_DIR_ENV: &str = "CWDEMU_INITIAL_DIR";
/// Symlink limit for canonicalization.
pub const MAX_SYMLINK_DEPTH_ENV: &str = "CWDEMU_MAX_SYMLINK_DEPTH";
/// Log verbosity.
pub const LOG_MODE_ENV: &str = crate::logging::LOG_MODE_ENV;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use cwdemu::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value (for example a
    /// non-numeric symlink depth).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(root) = env::var(MOUNT_ROOT_ENV) {
            config.mount_root = Some(PathBuf::from(root));
        }

        if let Ok(dir) = env::var(INITIAL_DIR_ENV) {
            config.initial_dir = Some(dir);
        }

        if let Ok(depth) = env::var(MAX_SYMLINK_DEPTH_ENV) {
            config.max_symlink_depth =
                Some(depth.trim().parse().map_err(|_| Error::Validation {
                    field: MAX_SYMLINK_DEPTH_ENV.into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(mode);
        }

        Ok(())
    }
}
