//! Command to change the emulated directory once.

use crate::error::CliError;
use crate::utils::{open_session, GlobalOptions};
use clap::Args;
use cwdemu::Config;

/// Change directory and print the new current directory.
#[derive(Args, Debug)]
pub struct CdCommand {
    /// Target directory
    #[arg(value_name = "PATH", default_value = "")]
    pub path: String,
}

impl CdCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let mut session = open_session(config)?;
        session.change(&self.path)?;
        println!("{}", session.pwd());
        Ok(())
    }
}
