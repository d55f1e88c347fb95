//! No-operation logger implementation.

use std::fmt::{Arguments, Display};

use super::Logger;
use crate::level::LogLevel;

/// A logger that discards all messages.
///
/// Useful for:
/// - Components that take an `Arc<dyn Logger>` but run silently in tests
/// - Benchmarks where logging overhead should be eliminated
///
/// # Example
///
/// ```
/// use loft::{Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info(&[&"This message is discarded"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: &[&dyn Display]) {}

    #[inline]
    fn log_fmt(&self, _level: LogLevel, _args: Arguments<'_>) {}
}
