//! Library exports for cwdemu-cli.
//!
//! The binary is a thin shell over these modules; exposing them lets the
//! interactive loop be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
