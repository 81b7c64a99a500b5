#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(missing_docs))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cwdemu
//!
//! An emulated current working directory for environments that have no
//! process-level notion of one.
//!
//! A [`Session`] owns a current directory string and a [`Filesystem`] to
//! resolve paths against. It can compose any path into a canonical absolute
//! one, change directory with shell-like error reporting, and decide whether
//! a path is structurally possible before anything is done with it.
//!
//! ## Core Types
//!
//! - [`Session`]: the command-session context (`change`, `valid`, `compose`)
//! - [`CwdStore`]: storage and normalization of the current directory
//! - [`Resolution`]: the outcome of composing one path
//! - [`Filesystem`] and [`MountedFs`]: the filesystem seam and its host
//!   directory implementation
//! - [`Error`], [`ChangeError`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cwdemu::CwdStore;
//! use cwdemu::path::refine;
//!
//! assert_eq!(refine(" docs/ "), "/docs");
//!
//! let mut cwd = CwdStore::default();
//! cwd.set("docs");
//! assert_eq!(cwd.get(), "/docs");
//! ```

pub mod config;
pub mod cwd;
pub mod error;
pub mod logging;
pub mod path;
pub mod session;

pub use config::{Config, ConfigBuilder};
pub use cwd::CwdStore;
pub use error::{ChangeError, Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Existence, Filesystem, Invalid, MountedFs, Probe, Resolution};
pub use session::Session;
