//! Parser for `mmlssnapshot -Y` output.
//!
//! Machine-readable mode prints one colon-delimited line per snapshot,
//! preceded by a header line whose third field is `HEADER`. Values that
//! themselves contain colons (the creation time) are `%3A`-escaped.

use super::schema::SnapshotRecord;
use super::timestamp::{parse_snapshot_timestamp, unescape_field};
use crate::utils::config::{
    FIELD_CREATED, FIELD_FILESET, FIELD_FILESYSTEM, FIELD_HEADER_MARKER, FIELD_NAME,
    HEADER_MARKER,
};
use crate::utils::error::ParseError;
use chrono::TimeZone;
use log::debug;

/// Fewest fields a data row may have
const MIN_FIELDS: usize = FIELD_FILESET + 1;

/// Parse a full listing into records, in the order GPFS printed them
///
/// **Public** - main entry point for listing output
///
/// # Arguments
/// * `output` - Raw stdout of `mmlssnapshot ... -Y`
/// * `tz` - Timezone the creation times are read in
///
/// # Returns
/// One record per data line; header and blank lines are skipped
///
/// # Errors
/// * `ParseError::MalformedRow` - a data line is too short
/// * `ParseError::InvalidTimestamp` - a creation time does not parse
pub fn parse_listing<Tz: TimeZone>(
    output: &str,
    tz: &Tz,
) -> Result<Vec<SnapshotRecord>, ParseError> {
    let mut records = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(':').collect();

        if is_header(&fields) {
            debug!("Skipping header line");
            continue;
        }

        records.push(parse_fields(line, &fields, tz)?);
    }

    debug!("Parsed {} snapshot rows", records.len());

    Ok(records)
}

/// Parse a single data line
pub fn parse_row<Tz: TimeZone>(line: &str, tz: &Tz) -> Result<SnapshotRecord, ParseError> {
    let fields: Vec<&str> = line.split(':').collect();
    parse_fields(line, &fields, tz)
}

fn is_header(fields: &[&str]) -> bool {
    fields.get(FIELD_HEADER_MARKER) == Some(&HEADER_MARKER)
}

fn parse_fields<Tz: TimeZone>(
    line: &str,
    fields: &[&str],
    tz: &Tz,
) -> Result<SnapshotRecord, ParseError> {
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::MalformedRow {
            line: line.to_string(),
            found: fields.len(),
            expected: MIN_FIELDS,
        });
    }

    let raw_created = fields[FIELD_CREATED];
    let created_at = parse_snapshot_timestamp(raw_created, tz)?;

    Ok(SnapshotRecord {
        filesystem: fields[FIELD_FILESYSTEM].to_string(),
        fileset: fields[FIELD_FILESET].to_string(),
        name: fields[FIELD_NAME].to_string(),
        timestamp: unescape_field(raw_created),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{listing_row, LISTING_HEADER};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_known_row() {
        let line = "mmlssnapshot::0:1:::archive:2026-10-10_120000:7:Valid:Sat Oct 10 12%3A00%3A00 2026::0:0:weekly::";

        let record = parse_row(line, &Utc).unwrap();
        assert_eq!(record.filesystem, "archive");
        assert_eq!(record.fileset, "weekly");
        assert_eq!(record.name, "2026-10-10_120000");
        assert_eq!(record.timestamp, "Sat Oct 10 12:00:00 2026");
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2026, 10, 10, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_header_is_skipped() {
        let created = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        let output = format!(
            "{}\n{}\n{}\n",
            LISTING_HEADER,
            listing_row("archive", "weekly", "a", &created),
            listing_row("archive", "daily", "b", &created),
        );

        let records = parse_listing(&output, &Utc).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.filesystem == "archive"));
        assert_eq!(records[0].name, "a");
        assert_eq!(records[1].fileset, "daily");
    }

    #[test]
    fn test_header_only_is_empty() {
        let output = format!("{}\n", LISTING_HEADER);
        assert!(parse_listing(&output, &Utc).unwrap().is_empty());
    }

    #[test]
    fn test_empty_output_is_empty() {
        assert!(parse_listing("", &Utc).unwrap().is_empty());
        assert!(parse_listing("\n\n", &Utc).unwrap().is_empty());
    }

    #[test]
    fn test_short_row_rejected() {
        let err = parse_listing("mmlssnapshot::0:1:::archive", &Utc).unwrap_err();
        match err {
            ParseError::MalformedRow { found, expected, .. } => {
                assert_eq!(found, 7);
                assert_eq!(expected, 15);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_crlf_lines() {
        let created = Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap();
        let output = format!(
            "{}\r\n{}\r\n",
            LISTING_HEADER,
            listing_row("archive2", "projects", "nightly", &created),
        );

        let records = parse_listing(&output, &Utc).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].created_at, created);
    }
}
