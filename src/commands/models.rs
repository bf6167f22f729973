use crate::utils::config::ToolConfig;
use crate::utils::error::UsageError;

/// Which of the mutually exclusive actions was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Create,
    Delete,
    Version,
}

/// Raw arguments as parsed from the command line
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SnapshotArgs {
    /// Selected action
    pub action: Action,

    /// Filesystem (`--fs`)
    pub filesystem: Option<String>,

    /// Fileset (`--fset`)
    pub fileset: Option<String>,

    /// Minimum age in days for deletion (`--age`)
    pub age_days: Option<u64>,

    /// Allow `--age 0`
    pub force: bool,

    /// Print the listing as JSON
    pub json: bool,
}

impl Default for SnapshotArgs {
    fn default() -> Self {
        Self {
            action: Action::List,
            filesystem: None,
            fileset: None,
            age_days: None,
            force: false,
            json: false,
        }
    }
}

/// A fully validated request, ready to dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List {
        filesystem: String,
        json: bool,
    },
    Create {
        filesystem: String,
        fileset: String,
    },
    Delete {
        filesystem: String,
        fileset: String,
        age_days: u64,
    },
    Version,
}

/// Validate arguments against the action's requirements and the config
///
/// **Public** - must succeed before any GPFS command is run
///
/// # Arguments
/// * `args` - Parsed command-line arguments
/// * `config` - Tool configuration (known filesystems)
///
/// # Returns
/// The request to execute, or the usage error to report
pub fn validate_args(args: &SnapshotArgs, config: &ToolConfig) -> Result<Request, UsageError> {
    if let Some(fs) = &args.filesystem {
        if !config.is_known_filesystem(fs) {
            return Err(UsageError::UnknownFilesystem {
                name: fs.clone(),
                valid: config.filesystems.clone(),
            });
        }
    }

    match args.action {
        Action::List => {
            let filesystem = args.filesystem.clone().ok_or(UsageError::ListMissingParams)?;
            Ok(Request::List {
                filesystem,
                json: args.json,
            })
        }

        Action::Create => match (&args.filesystem, &args.fileset) {
            (Some(filesystem), Some(fileset)) => Ok(Request::Create {
                filesystem: filesystem.clone(),
                fileset: fileset.clone(),
            }),
            _ => Err(UsageError::CreateMissingParams),
        },

        Action::Delete => match (&args.filesystem, &args.fileset, args.age_days) {
            (Some(filesystem), Some(fileset), Some(age_days)) => {
                if age_days == 0 && !args.force {
                    return Err(UsageError::UnforcedFullWipe);
                }
                Ok(Request::Delete {
                    filesystem: filesystem.clone(),
                    fileset: fileset.clone(),
                    age_days,
                })
            }
            _ => Err(UsageError::DeleteMissingParams),
        },

        Action::Version => Ok(Request::Version),
    }
}
