//! Command to compose paths against the emulated current directory.

use crate::error::CliError;
use crate::utils::{open_session, GlobalOptions};
use clap::{Args, ValueEnum};
use cwdemu::{Config, Existence, Resolution};

/// Print the canonical form of each path.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Paths to resolve (the current directory when none are given)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Fail unless every path exists
    #[arg(long)]
    pub existing: bool,
}

/// Output format for the resolve command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One path per line
    Text,
    /// Path, existence and canonical flag, tab-separated
    Long,
    /// A JSON array of resolutions
    Json,
}

impl ResolveCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let session = open_session(config)?;
        let paths = if self.paths.is_empty() {
            vec![String::new()]
        } else {
            self.paths
        };

        let resolutions: Vec<Resolution> = paths.iter().map(|p| session.compose(p)).collect();

        match self.format {
            OutputFormat::Text => {
                for resolution in &resolutions {
                    println!("{}", resolution.path);
                }
            }
            OutputFormat::Long => {
                for resolution in &resolutions {
                    println!("{}", format_long(resolution));
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&resolutions)
                    .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
                println!("{json}");
            }
        }

        if self.existing {
            let missing = resolutions.iter().filter(|r| !r.exists()).count();
            if missing > 0 {
                return Err(CliError::SemanticFailure(format!(
                    "{missing} of {} paths do not exist",
                    resolutions.len()
                )));
            }
        }
        Ok(())
    }
}

/// `path<TAB>existence<TAB>canonical`.
pub fn format_long(resolution: &Resolution) -> String {
    let existence = match resolution.existence {
        Existence::Missing => "missing",
        Existence::Directory => "directory",
        Existence::Other => "other",
    };
    let canonical = if resolution.canonical {
        "canonical"
    } else {
        "partial"
    };
    format!("{}\t{existence}\t{canonical}", resolution.path)
}
