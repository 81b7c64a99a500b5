//! A line-oriented session over standard input.
//!
//! Each line is one command:
//!
//! | line            | effect                                      |
//! |-----------------|---------------------------------------------|
//! | `cd [PATH]`     | change directory                            |
//! | `pwd`           | print the current directory                 |
//! | `valid PATH`    | print `valid` or `invalid: REASON`          |
//! | `resolve PATH`  | print the composed path, existence and flag |
//! | `exit`, `quit`  | stop reading                                |
//!
//! Blank lines and lines starting with `#` are ignored. Failures are
//! reported on stderr and do not end the session.

use crate::commands::resolve::format_long;
use crate::error::CliError;
use crate::utils::{open_session, GlobalOptions};
use clap::Args;
use cwdemu::{Config, Filesystem, Session};
use std::io::{self, BufRead, Write};

/// Run commands read from standard input.
#[derive(Args, Debug)]
pub struct ShellCommand {
    /// Print a prompt before each line
    #[arg(long)]
    pub prompt: bool,
}

impl ShellCommand {
    pub fn execute(self, _global: &GlobalOptions, config: &Config) -> Result<(), CliError> {
        let mut session = open_session(config)?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        let summary = run(
            &mut session,
            stdin.lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
            self.prompt,
        )?;
        log::debug!(
            "shell finished: {} commands, {} failed",
            summary.commands,
            summary.failures
        );
        Ok(())
    }
}

/// Counts of what a shell run did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Commands executed (blank and comment lines excluded).
    pub commands: usize,
    /// Commands that reported an error.
    pub failures: usize,
}

/// Execute every line of `input` against `session`.
///
/// # Errors
///
/// Only I/O errors on the streams themselves end the run early.
pub fn run<F, R, W, E>(
    session: &mut Session<F>,
    input: R,
    out: &mut W,
    err: &mut E,
    prompt: bool,
) -> Result<Summary, CliError>
where
    F: Filesystem,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = Summary::default();

    if prompt {
        write!(out, "{}$ ", session.pwd())?;
        out.flush()?;
    }
    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if !line.is_empty() && !line.starts_with('#') {
            let (command, argument) = line
                .split_once(char::is_whitespace)
                .map_or((line, ""), |(c, a)| (c, a.trim()));
            summary.commands += 1;

            match command {
                "exit" | "quit" => break,
                "cd" => {
                    if let Err(e) = session.change(argument) {
                        summary.failures += 1;
                        writeln!(err, "cd: {e}")?;
                    }
                }
                "pwd" => writeln!(out, "{}", session.pwd())?,
                "valid" => match session.check(argument) {
                    Ok(()) => writeln!(out, "valid")?,
                    Err(reason) => {
                        summary.failures += 1;
                        writeln!(out, "invalid: {reason}")?;
                    }
                },
                "resolve" => writeln!(out, "{}", format_long(&session.compose(argument)))?,
                other => {
                    summary.failures += 1;
                    writeln!(err, "{other}: unknown command")?;
                }
            }
        }

        if prompt {
            write!(out, "{}$ ", session.pwd())?;
            out.flush()?;
        }
    }

    Ok(summary)
}
