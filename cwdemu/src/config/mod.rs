//! Configuration system for cwdemu.
//!
//! Configuration is merged from several sources, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CWDEMU_*`)
//! 3. An explicit config file (`ConfigBuilder::with_config_file`)
//! 4. User config (`~/.cwdemu/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use cwdemu::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         initial_dir: Some("/tmp".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.initial_dir.as_deref(), Some("/tmp"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
