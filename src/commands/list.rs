//! List command implementation.

use crate::gpfs::{CommandRunner, SnapshotClient};
use crate::output::{write_json, write_table};
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use log::info;
use std::io::Write;

/// Print every snapshot on a filesystem
///
/// **Public** - `--list` entry point
///
/// # Arguments
/// * `client` - Snapshot client
/// * `filesystem` - Filesystem to list
/// * `json` - Emit JSON instead of the table
/// * `now` - Reference time for ages
/// * `out` - Destination for the listing
pub fn execute_list<R, Tz>(
    client: &SnapshotClient<R>,
    filesystem: &str,
    json: bool,
    now: &DateTime<Tz>,
    out: &mut impl Write,
) -> Result<()>
where
    R: CommandRunner,
    Tz: TimeZone,
{
    let records = client
        .list_all(filesystem, &now.timezone())
        .with_context(|| format!("Failed to list snapshots on {}", filesystem))?;

    info!("Found {} snapshot(s) on {}", records.len(), filesystem);

    if json {
        write_json(&records, now, out).context("Failed to write JSON listing")?;
    } else {
        write_table(&records, now, out).context("Failed to write listing")?;
    }

    Ok(())
}
