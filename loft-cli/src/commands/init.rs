//! `loft init` - write a starter configuration.

use clap::Args;
use std::path::PathBuf;

use loft::config::{default_config_path, LoggerConfig};

use crate::error::CliError;

/// Arguments for `loft init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(long, short, default_value_os_t = default_config_path())]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs) -> Result<(), CliError> {
    if args.path.exists() && !args.force {
        return Err(CliError::AlreadyExists(args.path));
    }

    LoggerConfig::sample().save_to(&args.path)?;
    println!("Wrote {}", args.path.display());

    Ok(())
}
