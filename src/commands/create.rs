//! Create command implementation.

use crate::gpfs::{CommandRunner, SnapshotClient};
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use log::debug;
use std::fmt::Display;
use std::io::Write;

/// Take one snapshot of a fileset
///
/// **Public** - `--create` entry point
///
/// The status line is written by the client; the returned name is only
/// logged.
pub fn execute_create<R, Tz>(
    client: &SnapshotClient<R>,
    filesystem: &str,
    fileset: &str,
    now: &DateTime<Tz>,
    out: &mut impl Write,
) -> Result<()>
where
    R: CommandRunner,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let spec = client
        .create(filesystem, fileset, now, out)
        .with_context(|| format!("Failed to create snapshot of {}:{}", filesystem, fileset))?;

    debug!("Created {}:{}", filesystem, spec);

    Ok(())
}
