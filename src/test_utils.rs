//! Test utilities for gpfs-snap tests.
//!
//! Provides a scripted command runner and `mmlssnapshot -Y` fixtures so
//! tests never shell out to real GPFS commands.

use crate::gpfs::{CommandOutput, CommandRunner};
use crate::utils::config::{ESCAPED_COLON, SNAPSHOT_TIMESTAMP_FORMAT};
use crate::utils::error::SnapshotError;
use chrono::{DateTime, TimeZone};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Display;

/// Header line as printed by `mmlssnapshot -Y`
pub const LISTING_HEADER: &str = "mmlssnapshot::HEADER:version:reserved:reserved:deviceName:directory:snapID:status:created:quotas:data:metadata:fileset:snapType:";

/// One recorded call to a `ScriptedRunner`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// Command runner that replays canned outputs and records every call.
///
/// Responses are consumed in order; once the script runs out every call
/// succeeds with empty output.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<CommandOutput>>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the output for the next call
    pub fn respond(self, output: CommandOutput) -> Self {
        self.responses.borrow_mut().push_back(output);
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Calls made to one program
    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.program == program)
            .cloned()
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, SnapshotError> {
        self.calls.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });

        Ok(self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| CommandOutput::ok("")))
    }
}

/// Build an `mmlssnapshot -Y` data row for a snapshot created at `created`
pub fn listing_row<Tz>(filesystem: &str, fileset: &str, name: &str, created: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let timestamp = created
        .format(SNAPSHOT_TIMESTAMP_FORMAT)
        .to_string()
        .replace(':', ESCAPED_COLON);

    format!(
        "mmlssnapshot::0:1:::{}:{}:1:Valid:{}::0:0:{}::",
        filesystem, name, timestamp, fileset
    )
}

/// A complete listing (header plus rows)
pub fn listing(rows: &[String]) -> String {
    let mut output = String::from(LISTING_HEADER);
    output.push('\n');
    for row in rows {
        output.push_str(row);
        output.push('\n');
    }
    output
}
