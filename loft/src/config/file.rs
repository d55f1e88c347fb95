//! Loading and saving logger configuration files.

use ini::{Ini, ParseOption};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults::DEFAULT_CONFIG_FILE;
use super::settings::LoggerConfig;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Config text is not valid INI
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] ini::ParseError),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Two handler sections share a label
    #[error("Duplicate handler section [{0}]")]
    DuplicateSection(String),

    /// A handler's sink could not be opened
    #[error("Failed to open sink '{target}' for handler '{label}': {source}")]
    SinkOpen {
        label: String,
        target: String,
        source: io::Error,
    },

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(io::Error),
}

/// Values are read literally; a backslash in a sink path is not an escape.
fn parse_option() -> ParseOption {
    ParseOption {
        enabled_escape: false,
        ..Default::default()
    }
}

impl LoggerConfig {
    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file_opt(path, parse_option())?;
        super::parser::parse_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigFileError> {
        let ini = Ini::load_from_str_opt(text, parse_option())?;
        super::parser::parse_ini(&ini)
    }

    /// Render the configuration as commented INI text.
    pub fn to_config_string(&self) -> String {
        super::writer::to_config_string(self)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        std::fs::write(path, self.to_config_string())
            .map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }
}

/// Path of the config file used when none is given: `loft.ini` in the
/// working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
