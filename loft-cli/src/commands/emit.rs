//! `loft emit` - log one message.

use clap::Args;
use std::path::PathBuf;

use loft::config::default_config_path;
use loft::{LogLevel, Logger};

use crate::error::CliError;

/// Arguments for `loft emit`.
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Configuration file describing the handler stack
    #[arg(long, short, default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Override the logger name from the configuration
    #[arg(long)]
    pub name: Option<String>,

    /// Severity: debug, info, notice, warn, error, fatal or emergency
    pub level: LogLevel,

    /// Message words, joined with single spaces
    #[arg(required = true, trailing_var_arg = true)]
    pub message: Vec<String>,
}

/// Build the configured logger and log the message at the requested level.
pub fn run(args: EmitArgs) -> Result<(), CliError> {
    let mut config = super::load_config(&args.config)?;
    if let Some(name) = args.name {
        config.logger.name = name;
    }
    if config.handlers.is_empty() {
        tracing::warn!(
            config = %args.config.display(),
            "No handlers configured; the message will be dropped"
        );
    }

    let logger = config.build()?;
    let message = args.message.join(" ");
    logger.log(args.level, &[&message]);

    Ok(())
}
