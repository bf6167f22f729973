//! Subprocess execution for the GPFS administrative commands.
//!
//! Calls block until the child exits. There is no timeout: a hung
//! `mm*` command hangs the tool with it.

use crate::utils::error::SnapshotError;
use log::debug;
use std::process::Command;

/// Captured result of one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Successful exit with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed exit with the given code and stderr
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status for error messages
    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("status {}", code),
            None => "a signal".to_string(),
        }
    }
}

/// Seam between the snapshot client and the operating system
pub trait CommandRunner {
    /// Run `program` with `args` to completion and capture its output
    ///
    /// Only a failure to launch is an `Err`; a non-zero exit is reported
    /// through `CommandOutput::code`.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, SnapshotError>;
}

/// Runs commands with `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, SnapshotError> {
        debug!("Running: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| SnapshotError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!("{} finished with {}", program, result.status_text());

        Ok(result)
    }
}
