//! Snapshot listing parser and record types.
//!
//! This module handles:
//! - Splitting `mmlssnapshot -Y` output into records
//! - Interpreting GPFS creation timestamps
//! - Naming new snapshots

pub mod mmlssnapshot;
pub mod schema;
pub mod timestamp;

// Re-export main types
pub use mmlssnapshot::{parse_listing, parse_row};
pub use schema::SnapshotRecord;
pub use timestamp::{parse_snapshot_timestamp, snapshot_name_at, unescape_field};
