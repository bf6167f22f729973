//! Snapshot record definitions.
//!
//! A record is rebuilt from `mmlssnapshot` output on every invocation;
//! nothing here is persisted.

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;

/// One snapshot row from `mmlssnapshot -Y`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRecord {
    /// Filesystem (device) the snapshot lives on
    pub filesystem: String,

    /// Fileset the snapshot was taken of
    pub fileset: String,

    /// Snapshot name within the fileset
    pub name: String,

    /// Creation time as printed by GPFS, colons unescaped
    pub timestamp: String,

    /// Creation time resolved in the local timezone
    pub created_at: DateTime<FixedOffset>,
}

impl SnapshotRecord {
    /// Seconds elapsed between creation and `now`
    ///
    /// Always derived, never cached: the same record can be evaluated
    /// against different reference times.
    pub fn age_seconds<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> i64 {
        now.timestamp() - self.created_at.timestamp()
    }

    /// `fileset:name`, the token the create/delete commands take
    pub fn snapshot_spec(&self) -> String {
        format!("{}:{}", self.fileset, self.name)
    }

    /// `filesystem:fileset:name`, used in status lines
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.filesystem, self.snapshot_spec())
    }
}
