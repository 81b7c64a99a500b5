//! CLI command implementations.
//!
//! - `resolve`: compose paths and print the result
//! - `check`: structural validation
//! - `cd`: change directory once
//! - `shell`: line-oriented interactive session

pub mod cd;
pub mod check;
pub mod resolve;
pub mod shell;

pub use cd::CdCommand;
pub use check::CheckCommand;
pub use resolve::ResolveCommand;
pub use shell::ShellCommand;
