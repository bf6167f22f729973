//! Snapshot timestamp handling.
//!
//! GPFS prints creation times as local wall-clock text with no zone label.
//! They are resolved in whatever timezone the caller hands in (the host's
//! `Local` zone in production). If the storage cluster runs in a different
//! zone than the host, ages come out skewed by the offset difference.

use crate::utils::config::{ESCAPED_COLON, SNAPSHOT_NAME_FORMAT, SNAPSHOT_TIMESTAMP_FORMAT};
use crate::utils::error::ParseError;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use std::fmt::Display;

/// Undo the `%3A` escaping used by `-Y` output
pub fn unescape_field(raw: &str) -> String {
    raw.replace(ESCAPED_COLON, ":")
}

/// Parse an `mmlssnapshot -Y` creation time in the given timezone
///
/// **Public** - the single entry point for timestamp interpretation
///
/// # Arguments
/// * `raw` - Field text, possibly still containing `%3A`
/// * `tz` - Timezone the wall-clock text is assumed to be in
///
/// # Errors
/// * `ParseError::InvalidTimestamp` - text does not match the GPFS format
/// * `ParseError::NonexistentLocalTime` - falls in a DST gap of `tz`
pub fn parse_snapshot_timestamp<Tz: TimeZone>(
    raw: &str,
    tz: &Tz,
) -> Result<DateTime<FixedOffset>, ParseError> {
    let text = unescape_field(raw);

    let naive = NaiveDateTime::parse_from_str(text.trim(), SNAPSHOT_TIMESTAMP_FORMAT).map_err(
        |source| ParseError::InvalidTimestamp {
            raw: text.clone(),
            source,
        },
    )?;

    // Repeated wall-clock hour at a DST fallback: take the first occurrence
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or(ParseError::NonexistentLocalTime(text))
}

/// Name suffix for a snapshot created at `now`, e.g. `2026-10-17_093015`
pub fn snapshot_name_at<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format(SNAPSHOT_NAME_FORMAT).to_string()
}
