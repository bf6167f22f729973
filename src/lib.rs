//! gpfs-snap
//!
//! Snapshot management for GPFS / IBM Spectrum Scale filesystems.
//!
//! This crate wraps the `mmlssnapshot`, `mmcrsnapshot` and `mmdelsnapshot`
//! administrative commands: it lists a filesystem's snapshots with their
//! ages, creates timestamped fileset snapshots, and expires fileset
//! snapshots older than a number of days.
//!
//! ## Getting Started
//!
//! ```bash
//! gpfs-snap --list   --fs archive
//! gpfs-snap --create --fs archive --fset weekly
//! gpfs-snap --delete --fs archive --fset weekly --age 30
//! ```
//!
//! The filesystem list and command paths can be overridden with a TOML
//! file passed via `--config` or `GPFS_SNAP_CONFIG`.

pub mod commands;
pub mod gpfs;
pub mod output;
pub mod parser;
pub mod test_utils;
pub mod utils;
