//! Fixed-width table output for `--list`.

use crate::parser::SnapshotRecord;
use chrono::{DateTime, TimeZone};
use std::io::{self, Write};

/// Printed instead of a table when a filesystem has no snapshots
pub const NO_SNAPSHOTS: &str = "No snapshots found";

const HEADER: [&str; 5] = [
    "Filesystem",
    "Fileset",
    "Snapshot Name",
    "Timestamp",
    "Age (seconds)",
];

/// Write records as a five-column table
///
/// **Public** - default `--list` output
///
/// # Arguments
/// * `records` - Snapshots to print, in order
/// * `now` - Reference time for the age column
/// * `out` - Destination (stdout in the CLI)
pub fn write_table<Tz: TimeZone>(
    records: &[SnapshotRecord],
    now: &DateTime<Tz>,
    out: &mut impl Write,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "{}", NO_SNAPSHOTS);
    }

    write_line(out, HEADER[0], HEADER[1], HEADER[2], HEADER[3], &HEADER[4])?;

    for record in records {
        write_line(
            out,
            &record.filesystem,
            &record.fileset,
            &record.name,
            &record.timestamp,
            &record.age_seconds(now),
        )?;
    }

    Ok(())
}

fn write_line(
    out: &mut impl Write,
    filesystem: &str,
    fileset: &str,
    name: &str,
    timestamp: &str,
    age: &dyn std::fmt::Display,
) -> io::Result<()> {
    // Widths are padded, not truncated: long names push later columns right
    writeln!(
        out,
        "{:<12} {:<15} {:<25} {:<30} {:<15}",
        filesystem,
        fileset,
        name,
        timestamp,
        age.to_string()
    )
}
