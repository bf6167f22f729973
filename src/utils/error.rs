//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Problems with the command line that are caught before any GPFS command runs
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("--fs option must be specified")]
    ListMissingParams,

    #[error("--fs and --fset options must be specified")]
    CreateMissingParams,

    #[error("--fs, --fset and --age options must be specified")]
    DeleteMissingParams,

    #[error("unknown filesystem '{name}' (valid: {})", .valid.join(", "))]
    UnknownFilesystem { name: String, valid: Vec<String> },

    #[error("--age 0 deletes every snapshot of the fileset; pass --force to confirm")]
    UnforcedFullWipe,
}

/// Errors that can occur while talking to the GPFS snapshot commands
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {target} exited with {status}")]
    CommandFailed {
        program: String,
        target: String,
        status: String,
    },

    #[error("failed to parse {program} output")]
    Parse {
        program: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to write report")]
    Report(#[from] std::io::Error),
}

/// Errors that can occur while parsing `mmlssnapshot -Y` output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("row has {found} fields, expected at least {expected}: {line}")]
    MalformedRow {
        line: String,
        found: usize,
        expected: usize,
    },

    #[error("invalid snapshot timestamp '{raw}'")]
    InvalidTimestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("snapshot timestamp '{0}' does not exist in the local timezone")]
    NonexistentLocalTime(String),
}

/// Errors that can occur while loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config")]
    Parse(#[from] toml::de::Error),

    #[error("config must list at least one filesystem")]
    NoFilesystems,
}
