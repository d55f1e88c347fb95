//! Severity levels.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log record, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Important, non-critical messages
    Notice,
    /// Important, less critical messages
    Warn,
    /// General errors
    Error,
    /// Fatal errors
    Fatal,
    /// Emergency situations
    Emergency,
}

impl LogLevel {
    /// Number of distinct levels.
    pub const COUNT: usize = 7;

    /// All levels, lowest first.
    pub const ALL: [LogLevel; Self::COUNT] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Notice,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Emergency,
    ];

    /// Canonical upper-case name used in rendered records.
    pub const fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Notice => "NOTICE",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Emergency => "EMERGENCY",
        }
    }

    /// Dense position of this level in [`LogLevel::ALL`].
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a level name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Unknown log level '{0}' (expected one of: debug, info, notice, warn, error, fatal, emergency)"
)]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "notice" => Ok(LogLevel::Notice),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            "emergency" => Ok(LogLevel::Emergency),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
