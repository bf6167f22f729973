//! Utility modules for configuration and error handling.

pub mod error;
pub mod config;

// Re-export commonly used types for convenience
pub use config::{CommandSet, ToolConfig};
pub use error::{ConfigError, ParseError, SnapshotError, UsageError};
