//! Settings structs for the logger configuration.
//!
//! These are pure data types; parsing lives in [`super::parser`] and
//! serialization in [`super::writer`].

use std::fmt;
use std::str::FromStr;

use super::defaults::*;
use crate::handler::{Flags, SinkTarget};
use crate::level::LogLevel;
use crate::logger::DEFAULT_LOGGER_NAME;

/// Complete logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// `[logger]` section
    pub logger: LoggerSettings,
    /// `[handler.*]` sections in file order, bottom of the stack first
    pub handlers: Vec<HandlerSettings>,
}

/// Logger-wide settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerSettings {
    /// Name rendered into every record
    pub name: String,
}

/// One handler of the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSettings {
    /// Section label, the part after `handler.`
    pub label: String,
    pub kind: HandlerKind,
    /// Lowest level the handler accepts
    pub level: LogLevel,
    /// Destination for `std` handlers
    pub sink: SinkTarget,
    /// Header flags for `std` handlers
    pub flags: Flags,
}

impl HandlerSettings {
    /// Settings with defaults for everything but the label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: DEFAULT_HANDLER_KIND,
            level: DEFAULT_HANDLER_LEVEL,
            sink: default_sink(),
            flags: DEFAULT_HANDLER_FLAGS,
        }
    }
}

/// Handler implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// [`StdHandler`](crate::handler::StdHandler) writing to `sink`
    Std,
    /// [`TracingHandler`](crate::handler::TracingHandler)
    Tracing,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerKind::Std => f.write_str("std"),
            HandlerKind::Tracing => f.write_str("tracing"),
        }
    }
}

impl FromStr for HandlerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "std" => Ok(HandlerKind::Std),
            "tracing" => Ok(HandlerKind::Tracing),
            other => Err(format!("unknown handler kind '{}'", other)),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            logger: LoggerSettings {
                name: DEFAULT_LOGGER_NAME.to_string(),
            },
            handlers: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// Starter configuration written by `loft init`.
    ///
    /// Everything goes to a debug file, info and up to stdout, and errors
    /// to stderr.
    pub fn sample() -> Self {
        let debug = HandlerSettings {
            sink: SinkTarget::File("logs/debug.log".into()),
            flags: Flags::STD | Flags::MICROSECONDS,
            ..HandlerSettings::new("debug")
        };
        let info = HandlerSettings {
            level: LogLevel::Info,
            sink: SinkTarget::Stdout,
            ..HandlerSettings::new("info")
        };
        let error = HandlerSettings {
            level: LogLevel::Error,
            ..HandlerSettings::new("error")
        };

        Self {
            logger: LoggerSettings {
                name: "app".to_string(),
            },
            handlers: vec![debug, info, error],
        }
    }
}
