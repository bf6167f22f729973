//! Snapshot operations on top of the GPFS administrative commands.

use super::runner::{CommandOutput, CommandRunner};
use crate::parser::{parse_listing, snapshot_name_at, SnapshotRecord};
use crate::utils::config::{CommandSet, FILESET_FLAG, MACHINE_READABLE_FLAG};
use crate::utils::error::SnapshotError;
use chrono::{DateTime, TimeZone};
use log::{debug, info, warn};
use std::fmt::Display;
use std::io::Write;

/// Client for listing, creating and deleting snapshots
pub struct SnapshotClient<R> {
    runner: R,
    commands: CommandSet,
}

impl<R: CommandRunner> SnapshotClient<R> {
    /// Create a new snapshot client
    pub fn new(runner: R, commands: CommandSet) -> Self {
        Self { runner, commands }
    }

    /// The underlying command runner
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Consume the client, returning its runner
    pub fn into_runner(self) -> R {
        self.runner
    }

    /// List every snapshot on a filesystem
    ///
    /// **Public** - backs the `--list` action
    ///
    /// # Arguments
    /// * `filesystem` - GPFS device name
    /// * `tz` - Timezone used to read creation times
    ///
    /// # Returns
    /// Records in the order mmlssnapshot printed them; empty if none
    pub fn list_all<Tz: TimeZone>(
        &self,
        filesystem: &str,
        tz: &Tz,
    ) -> Result<Vec<SnapshotRecord>, SnapshotError> {
        self.list(&[filesystem, MACHINE_READABLE_FLAG], tz)
    }

    /// List the snapshots of one fileset older than a threshold
    ///
    /// **Public** - selects candidates for the `--delete` action
    ///
    /// # Arguments
    /// * `filesystem` - GPFS device name
    /// * `fileset` - Fileset to scope the listing to
    /// * `threshold_secs` - Records must be strictly older than this
    /// * `now` - Reference time; its timezone is used to read creation times
    /// * `out` - Where the "nothing to delete" notice is written
    pub fn list_aged<Tz: TimeZone>(
        &self,
        filesystem: &str,
        fileset: &str,
        threshold_secs: i64,
        now: &DateTime<Tz>,
        out: &mut impl Write,
    ) -> Result<Vec<SnapshotRecord>, SnapshotError> {
        let records = self.list(
            &[filesystem, FILESET_FLAG, fileset, MACHINE_READABLE_FLAG],
            &now.timezone(),
        )?;

        let aged: Vec<SnapshotRecord> = records
            .into_iter()
            .filter(|record| record.fileset == fileset)
            .filter(|record| record.age_seconds(now) > threshold_secs)
            .collect();

        debug!(
            "{} snapshot(s) of {}:{} older than {}s",
            aged.len(),
            filesystem,
            fileset,
            threshold_secs
        );

        if aged.is_empty() {
            writeln!(out, "No snapshots found which meet the deletion criteria")?;
        }

        Ok(aged)
    }

    /// Create a snapshot named `<fileset>:<YYYY-MM-DD_HHMMSS>`
    ///
    /// **Public** - backs the `--create` action
    ///
    /// # Arguments
    /// * `filesystem` - GPFS device name
    /// * `fileset` - Fileset to snapshot
    /// * `now` - Time the name is derived from
    /// * `out` - Where the status line is written
    ///
    /// # Returns
    /// The `fileset:name` token that was passed to the create command
    ///
    /// # Errors
    /// * `SnapshotError::CommandFailed` - create command exited non-zero
    /// * `SnapshotError::Spawn` - create command could not be launched
    pub fn create<Tz>(
        &self,
        filesystem: &str,
        fileset: &str,
        now: &DateTime<Tz>,
        out: &mut impl Write,
    ) -> Result<String, SnapshotError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let spec = format!("{}:{}", fileset, snapshot_name_at(now));
        let target = format!("{}:{}", filesystem, spec);

        info!("Creating snapshot {}", target);

        let program = &self.commands.create;
        let result = self
            .runner
            .run(program, &[filesystem, spec.as_str()])
            .and_then(|output| check_status(program, &target, &output));

        match result {
            Ok(()) => {
                writeln!(out, "Snapshot completed successfully: {}", target)?;
                Ok(spec)
            }
            Err(err) => {
                writeln!(out, "Snapshot failed: {}", target)?;
                Err(err)
            }
        }
    }

    /// Delete snapshots one at a time, stopping at the first failure
    ///
    /// **Public** - backs the `--delete` action
    ///
    /// Records are processed in the order given. Anything after a failed
    /// delete is left untouched; there is no rollback of earlier deletes.
    ///
    /// # Returns
    /// Number of snapshots deleted
    pub fn delete_many(
        &self,
        records: &[SnapshotRecord],
        out: &mut impl Write,
    ) -> Result<usize, SnapshotError> {
        let program = &self.commands.delete;
        let mut deleted = 0;

        for record in records {
            let spec = record.snapshot_spec();
            let target = record.qualified_name();

            info!("Deleting snapshot {}", target);

            let result = self
                .runner
                .run(program, &[record.filesystem.as_str(), spec.as_str()])
                .and_then(|output| check_status(program, &target, &output));

            if let Err(err) = result {
                writeln!(out, "Failed to delete snapshot: {}", target)?;
                return Err(err);
            }

            writeln!(out, "Snapshot deleted successfully: {}", target)?;
            deleted += 1;
        }

        Ok(deleted)
    }

    /// Run the list command and parse whatever it printed
    ///
    /// **Private** - shared by list_all and list_aged
    fn list<Tz: TimeZone>(
        &self,
        args: &[&str],
        tz: &Tz,
    ) -> Result<Vec<SnapshotRecord>, SnapshotError> {
        let program = &self.commands.list;
        let output = self.runner.run(program, args)?;

        // mmlssnapshot exits non-zero when a filesystem has no snapshots
        if !output.success() {
            info!(
                "{} {} exited with {}: {}",
                program,
                args.join(" "),
                output.status_text(),
                output.stderr.trim()
            );
        }

        parse_listing(&output.stdout, tz).map_err(|source| SnapshotError::Parse {
            program: program.clone(),
            source,
        })
    }
}

/// Turn a non-zero exit into an error
fn check_status(program: &str, target: &str, output: &CommandOutput) -> Result<(), SnapshotError> {
    if output.success() {
        return Ok(());
    }

    if !output.stderr.trim().is_empty() {
        warn!("{}: {}", program, output.stderr.trim());
    }

    Err(SnapshotError::CommandFailed {
        program: program.to_string(),
        target: target.to_string(),
        status: output.status_text(),
    })
}
