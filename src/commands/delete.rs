//! Delete command implementation.
//!
//! The delete command:
//! 1. Lists the fileset's snapshots older than the threshold
//! 2. Deletes them in listing order, stopping at the first failure

use crate::gpfs::{CommandRunner, SnapshotClient};
use crate::utils::config::SECONDS_PER_DAY;
use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use log::info;
use std::io::Write;

/// Delete every snapshot of a fileset older than `age_days`
///
/// **Public** - `--delete` entry point
///
/// `age_days == 0` selects every snapshot; callers must have checked
/// `--force` before getting here.
pub fn execute_delete<R, Tz>(
    client: &SnapshotClient<R>,
    filesystem: &str,
    fileset: &str,
    age_days: u64,
    now: &DateTime<Tz>,
    out: &mut impl Write,
) -> Result<()>
where
    R: CommandRunner,
    Tz: TimeZone,
{
    let threshold_secs = age_threshold_secs(age_days);

    info!(
        "Selecting snapshots of {}:{} older than {} day(s)",
        filesystem, fileset, age_days
    );

    let aged = client
        .list_aged(filesystem, fileset, threshold_secs, now, out)
        .with_context(|| format!("Failed to list snapshots of {}:{}", filesystem, fileset))?;

    if aged.is_empty() {
        return Ok(());
    }

    let deleted = client
        .delete_many(&aged, out)
        .with_context(|| format!("Failed to delete snapshots of {}:{}", filesystem, fileset))?;

    info!("Deleted {} snapshot(s)", deleted);

    Ok(())
}

/// Convert days to seconds, saturating at `i64::MAX`
fn age_threshold_secs(age_days: u64) -> i64 {
    i64::try_from(age_days.saturating_mul(SECONDS_PER_DAY)).unwrap_or(i64::MAX)
}
