//! Configuration and constants for the CLI.

use super::error::ConfigError;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Filesystems accepted by `--fs` when no config file overrides them
pub const DEFAULT_FILESYSTEMS: &[&str] = &["archive", "archive2"];

/// Default GPFS administrative commands (resolved through PATH)
pub const DEFAULT_LIST_COMMAND: &str = "mmlssnapshot";
pub const DEFAULT_CREATE_COMMAND: &str = "mmcrsnapshot";
pub const DEFAULT_DELETE_COMMAND: &str = "mmdelsnapshot";

/// Environment variable that may point at a config file
pub const CONFIG_ENV_VAR: &str = "GPFS_SNAP_CONFIG";

// mmlssnapshot flags
pub const MACHINE_READABLE_FLAG: &str = "-Y";
pub const FILESET_FLAG: &str = "-j";

// Field positions in `mmlssnapshot -Y` rows
pub const FIELD_HEADER_MARKER: usize = 2;
pub const FIELD_FILESYSTEM: usize = 6;
pub const FIELD_NAME: usize = 7;
pub const FIELD_CREATED: usize = 10;
pub const FIELD_FILESET: usize = 14;

pub const HEADER_MARKER: &str = "HEADER";

/// `-Y` output escapes colons inside field values
pub const ESCAPED_COLON: &str = "%3A";

/// Creation time as printed by mmlssnapshot, e.g. `Sat Oct 10 12:00:00 2026`
pub const SNAPSHOT_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Suffix used for the names of snapshots we create
pub const SNAPSHOT_NAME_FORMAT: &str = "%Y-%m-%d_%H%M%S";

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Tool configuration, handed to the dispatcher at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Filesystems that `--fs` may name
    pub filesystems: Vec<String>,

    /// External commands to invoke
    pub commands: CommandSet,
}

/// Program names (or absolute paths) of the GPFS snapshot commands
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommandSet {
    pub list: String,
    pub create: String,
    pub delete: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            filesystems: DEFAULT_FILESYSTEMS.iter().map(|s| s.to_string()).collect(),
            commands: CommandSet::default(),
        }
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        Self {
            list: DEFAULT_LIST_COMMAND.to_string(),
            create: DEFAULT_CREATE_COMMAND.to_string(),
            delete: DEFAULT_DELETE_COMMAND.to_string(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from a TOML file, or fall back to defaults
    ///
    /// **Public** - called once from main.rs before dispatch
    ///
    /// # Arguments
    /// * `path` - Optional config file; `None` means built-in defaults
    ///
    /// # Errors
    /// * `ConfigError::Read` - file could not be read
    /// * `ConfigError::Parse` - file is not valid TOML for this schema
    /// * `ConfigError::NoFilesystems` - the filesystem list is empty
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        debug!("Loading config from: {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&text)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ToolConfig = toml::from_str(text)?;

        if config.filesystems.is_empty() {
            return Err(ConfigError::NoFilesystems);
        }

        Ok(config)
    }

    /// Whether `name` is one of the configured filesystems
    pub fn is_known_filesystem(&self, name: &str) -> bool {
        self.filesystems.iter().any(|fs| fs == name)
    }
}
