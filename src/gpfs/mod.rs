//! GPFS snapshot command integration.

pub mod client;
pub mod runner;

// Re-export main types
pub use client::SnapshotClient;
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
