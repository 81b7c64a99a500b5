//! Command to validate paths structurally.

use crate::error::CliError;
use crate::utils::{open_session, GlobalOptions};
use clap::Args;
use cwdemu::Config;

/// Check that each path is structurally valid.
///
/// Prints one verdict per path; exits with status 1 if any path is invalid.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Paths to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let session = open_session(config)?;

        let mut invalid = 0;
        for path in &self.paths {
            match session.check(path) {
                Ok(()) => {
                    if !global.quiet {
                        println!("valid\t{path}");
                    }
                }
                Err(reason) => {
                    invalid += 1;
                    if !global.quiet {
                        println!("invalid\t{path}\t{reason}");
                    }
                }
            }
        }

        if invalid > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{invalid} of {} paths are invalid",
                self.paths.len()
            )));
        }
        Ok(())
    }
}
