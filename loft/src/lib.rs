//! loft - a leveled logging facade with stackable handlers
//!
//! A [`DefaultLogger`] owns a stack of [`Handler`](handler::Handler)s. Each
//! record goes to the most recently pushed handler that accepts its
//! [`LogLevel`]; records nobody accepts are dropped. Logging calls never
//! return errors.
//!
//! ```
//! use loft::handler::{Flags, MemorySink, StdHandler};
//! use loft::{log_warn, DefaultLogger, LogLevel, Logger};
//! use std::sync::Arc;
//!
//! let sink = MemorySink::new();
//! let logger = DefaultLogger::new("testing", Vec::new());
//! logger.push_handler(Arc::new(StdHandler::new(LogLevel::Info, sink.clone(), Flags::NONE)));
//!
//! logger.debug(&[&"not accepted by anyone"]);
//! log_warn!(logger, "{} retries left", 2);
//!
//! assert_eq!(sink.contents(), "testing.WARN: 2 retries left\n");
//! ```
//!
//! # Modules
//!
//! - [`handler`] - the handler trait and the provided handlers
//! - [`logger`] - the logger trait, handler-stack logger and no-op logger
//! - [`config`] - INI configuration of a logger
//! - [`logging`] - diagnostics subscriber for binaries

pub mod config;
pub mod error;
pub mod handler;
pub mod level;
pub mod logger;
pub mod logging;

pub use error::LoggerError;
pub use level::{LogLevel, ParseLevelError};
pub use logger::{DefaultLogger, Logger, NoOpLogger};

/// Version of the loft library and CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
