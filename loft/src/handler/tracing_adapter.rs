//! Tracing library adapter implementation.

use std::fmt::{Arguments, Display};

use super::{render_args, Handler};
use crate::level::LogLevel;

/// Handler that forwards accepted records to the `tracing` crate.
///
/// This bridges a logger's handler stack into the `tracing` ecosystem, so
/// records can reach whatever subscriber the application installed.
/// Levels without a `tracing` counterpart fold into the nearest one:
/// `NOTICE` becomes `INFO`, `FATAL` and `EMERGENCY` become `ERROR`. The
/// original severity is kept in the `severity` field.
///
/// # Example
///
/// ```ignore
/// use loft::handler::TracingHandler;
/// use loft::{DefaultLogger, LogLevel, Logger};
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already initialized
/// let logger = DefaultLogger::new("app", vec![Arc::new(TracingHandler::new(LogLevel::Info))]);
/// logger.notice(&[&"Using tracing backend"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TracingHandler {
    threshold: LogLevel,
}

impl TracingHandler {
    /// Create a tracing handler for levels `>= threshold`.
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    fn dispatch(level: LogLevel, name: &str, message: &dyn Display) {
        match level {
            LogLevel::Debug => tracing::debug!(logger = name, severity = %level, "{}", message),
            LogLevel::Info | LogLevel::Notice => {
                tracing::info!(logger = name, severity = %level, "{}", message)
            }
            LogLevel::Warn => tracing::warn!(logger = name, severity = %level, "{}", message),
            LogLevel::Error | LogLevel::Fatal | LogLevel::Emergency => {
                tracing::error!(logger = name, severity = %level, "{}", message)
            }
        }
    }
}

impl Default for TracingHandler {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl Handler for TracingHandler {
    fn handles(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }

    fn handle(&self, level: LogLevel, name: &str, args: &[&dyn Display]) {
        let mut message = String::new();
        render_args(&mut message, args);
        Self::dispatch(level, name, &message);
    }

    fn handle_fmt(&self, level: LogLevel, name: &str, args: Arguments<'_>) {
        Self::dispatch(level, name, &args);
    }
}
