//! gpfs-snap CLI
//!
//! Lists, creates and expires GPFS fileset snapshots.

use anyhow::{Context, Result};
use chrono::Local;
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use env_logger::Env;
use gpfs_snap::commands::{dispatch, validate_args, Action, SnapshotArgs};
use gpfs_snap::gpfs::{SnapshotClient, SystemRunner};
use gpfs_snap::utils::config::{ToolConfig, CONFIG_ENV_VAR};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

/// GPFS/ESS snapshot management tool
#[derive(Parser, Debug)]
#[command(name = "gpfs-snap", about, long_about = None, disable_version_flag = true)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["list", "create", "delete", "version"])
))]
struct Cli {
    /// Lists all snapshots for a given filesystem
    #[arg(long)]
    list: bool,

    /// Creates a snapshot for a given filesystem and fileset
    #[arg(long)]
    create: bool,

    /// Deletes snapshots for a given filesystem and fileset
    #[arg(long)]
    delete: bool,

    /// Print version information
    #[arg(short = 'v', long)]
    version: bool,

    /// Filesystem
    #[arg(long = "fs", value_name = "NAME")]
    filesystem: Option<String>,

    /// Fileset
    #[arg(long = "fset", value_name = "NAME")]
    fileset: Option<String>,

    /// Age of snapshots to delete in days
    #[arg(long, value_name = "DAYS")]
    age: Option<u64>,

    /// Required with --age 0, which deletes every snapshot of the fileset
    #[arg(long)]
    force: bool,

    /// Print the listing as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// TOML config file overriding filesystems and command paths
    #[arg(long, env = CONFIG_ENV_VAR, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    fn action(&self) -> Action {
        if self.list {
            Action::List
        } else if self.create {
            Action::Create
        } else if self.delete {
            Action::Delete
        } else {
            Action::Version
        }
    }

    fn into_args(self) -> SnapshotArgs {
        SnapshotArgs {
            action: self.action(),
            filesystem: self.filesystem,
            fileset: self.fileset,
            age_days: self.age,
            force: self.force,
            json: self.json,
        }
    }
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments; a missing or conflicting action is a usage error (exit 1)
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::ArgumentConflict | ErrorKind::MissingRequiredArgument => {
                err.print()?;
                return Ok(ExitCode::FAILURE);
            }
            _ => err.exit(),
        },
    };

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!("Configuration: {:?}", config);

    // Validate before any GPFS command runs
    let request = match validate_args(&cli.into_args(), &config) {
        Ok(request) => request,
        Err(err) => {
            debug!("Rejected arguments: {:?}", err);
            println!("{}", err);
            return Ok(ExitCode::FAILURE);
        }
    };

    let client = SnapshotClient::new(SystemRunner, config.commands);
    let now = Local::now();
    let mut stdout = std::io::stdout().lock();

    dispatch(&request, &client, &now, &mut stdout)?;

    Ok(ExitCode::SUCCESS)
}
