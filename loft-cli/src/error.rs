//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use loft::config::ConfigFileError;
use std::fmt;
use std::path::PathBuf;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded or built
    Config(ConfigFileError),
    /// No configuration file at the given path
    ConfigMissing(PathBuf),
    /// Refusing to overwrite an existing file
    AlreadyExists(PathBuf),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::ConfigMissing(_) => {
                eprintln!();
                eprintln!("Create a starter configuration with: loft init");
            }
            CliError::AlreadyExists(_) => {
                eprintln!();
                eprintln!("Use --force to overwrite it.");
            }
            CliError::Config(_) => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::ConfigMissing(path) => {
                write!(f, "Configuration file '{}' not found", path.display())
            }
            CliError::AlreadyExists(path) => {
                write!(f, "File '{}' already exists", path.display())
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}
