//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the snapshot client and output writers to perform user tasks.

pub mod create;
pub mod delete;
pub mod list;
pub mod models;

use crate::gpfs::{CommandRunner, SnapshotClient};
use anyhow::Result;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::io::Write;

// Re-export main command functions
pub use create::execute_create;
pub use delete::execute_delete;
pub use list::execute_list;
pub use models::{validate_args, Action, Request, SnapshotArgs};

/// Version line printed by `--version`
pub fn version_string() -> String {
    format!("gpfs-snap v{}", env!("CARGO_PKG_VERSION"))
}

/// Run a validated request
///
/// **Public** - single dispatch point used by main.rs and tests
pub fn dispatch<R, Tz>(
    request: &Request,
    client: &SnapshotClient<R>,
    now: &DateTime<Tz>,
    out: &mut impl Write,
) -> Result<()>
where
    R: CommandRunner,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match request {
        Request::List { filesystem, json } => execute_list(client, filesystem, *json, now, out),
        Request::Create {
            filesystem,
            fileset,
        } => execute_create(client, filesystem, fileset, now, out),
        Request::Delete {
            filesystem,
            fileset,
            age_days,
        } => execute_delete(client, filesystem, fileset, *age_days, now, out),
        Request::Version => {
            writeln!(out, "{}", version_string())?;
            Ok(())
        }
    }
}
