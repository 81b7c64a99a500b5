//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use cwdemu::config::{Config, ConfigMerger};
///
/// let low = Config { initial_dir: Some("/low".to_string()), ..Default::default() };
/// let high = Config { initial_dir: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.initial_dir, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.mount_root.is_some() {
            target.mount_root.clone_from(&source.mount_root);
        }
        if source.initial_dir.is_some() {
            target.initial_dir.clone_from(&source.initial_dir);
        }
        if source.max_symlink_depth.is_some() {
            target.max_symlink_depth = source.max_symlink_depth;
        }
        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }
    }
}
