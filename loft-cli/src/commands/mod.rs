//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`emit`] - Log a message through the configured handler stack
//! - [`init`] - Write a starter configuration
//! - [`resolve`] - Show which handler services each level

pub mod emit;
pub mod init;
pub mod resolve;

use std::path::Path;

use loft::config::LoggerConfig;

use crate::error::CliError;

/// Load the configuration at `path`, which must exist.
fn load_config(path: &Path) -> Result<LoggerConfig, CliError> {
    if !path.exists() {
        return Err(CliError::ConfigMissing(path.to_path_buf()));
    }
    Ok(LoggerConfig::load_from(path)?)
}
