//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use cwdemu::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref root) = config.mount_root {
            if !root.is_absolute() {
                return Err(Error::Validation {
                    field: "mount_root".into(),
                    message: format!("must be an absolute host path, got {}", root.display()),
                });
            }
        }

        if let Some(ref dir) = config.initial_dir {
            if dir.trim().is_empty() {
                return Err(Error::Validation {
                    field: "initial_dir".into(),
                    message: "must not be blank".into(),
                });
            }
        }

        if config.max_symlink_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_symlink_depth".into(),
                message: "must be greater than 0".into(),
            });
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }
}
