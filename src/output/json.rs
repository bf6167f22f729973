//! JSON output for `--list --json`.

use crate::parser::SnapshotRecord;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::io::Write;

/// A record plus its age at report time
#[derive(Debug, Serialize)]
pub struct SnapshotReport<'a> {
    #[serde(flatten)]
    pub record: &'a SnapshotRecord,
    pub age_seconds: i64,
}

/// Write records as a pretty-printed JSON array
///
/// An empty listing is written as `[]`.
pub fn write_json<Tz: TimeZone>(
    records: &[SnapshotRecord],
    now: &DateTime<Tz>,
    out: &mut impl Write,
) -> Result<(), serde_json::Error> {
    let reports: Vec<SnapshotReport<'_>> = records
        .iter()
        .map(|record| SnapshotReport {
            record,
            age_seconds: record.age_seconds(now),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out).map_err(serde_json::Error::io)
}
