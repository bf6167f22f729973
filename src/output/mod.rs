//! Output writers for snapshot listings.
//!
//! This module handles rendering records for the user:
//! - Fixed-width text table
//! - JSON array

pub mod json;
pub mod table;

// Re-export main functions
pub use json::{write_json, SnapshotReport};
pub use table::{write_table, NO_SNAPSHOTS};
