//! Configuration schema definitions.
//!
//! This module defines the configuration structure for cwdemu: where the
//! emulated root is mounted, which directory a session starts in, and how
//! path resolution and logging behave.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use cwdemu::config::Config;
///
/// let config: Config = serde_yaml::from_str("initial_dir: /data\nmax_symlink_depth: 8\n").unwrap();
/// assert_eq!(config.initial_dir.as_deref(), Some("/data"));
/// assert_eq!(config.max_symlink_depth, Some(8));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Host directory mounted as the emulated `/` (defaults to the host root).
    pub mount_root: Option<PathBuf>,

    /// Directory a new session changes into.
    pub initial_dir: Option<String>,

    /// Maximum number of symlinks followed while canonicalizing one path.
    pub max_symlink_depth: Option<usize>,

    /// Log verbosity: quiet, normal or verbose.
    pub log_mode: Option<String>,
}
