//! Handler-stack logger.

use parking_lot::Mutex;
use std::fmt::{self, Arguments, Display};
use std::sync::Arc;

use super::Logger;
use crate::error::LoggerError;
use crate::handler::Handler;
use crate::level::LogLevel;

/// Name used when a logger is created with an empty one.
pub const DEFAULT_LOGGER_NAME: &str = "default";

/// Handlers plus the per-level resolution cache derived from them.
///
/// Invariant: every `Some` slot in `resolved` holds the handler a fresh
/// top-down search of `handlers` would return for that level.
#[derive(Default)]
struct HandlerStack {
    /// Bottom first; the last element has first refusal.
    handlers: Vec<Arc<dyn Handler>>,
    resolved: [Option<Arc<dyn Handler>>; LogLevel::COUNT],
}

impl HandlerStack {
    fn invalidate(&mut self) {
        self.resolved = Default::default();
    }

    fn resolve(&mut self, level: LogLevel) -> Option<Arc<dyn Handler>> {
        let slot = &mut self.resolved[level.index()];
        if let Some(handler) = slot.as_ref() {
            return Some(Arc::clone(handler));
        }

        let handler = self.handlers.iter().rev().find(|h| h.handles(level))?;
        *slot = Some(Arc::clone(handler));
        Some(Arc::clone(handler))
    }
}

/// Logger that routes each record through a stack of [`Handler`]s.
///
/// For a given level the stack is searched from the most recently pushed
/// handler down to the first one, and the first handler that
/// [`handles`](Handler::handles) the level receives the record. Records
/// no handler accepts are dropped silently.
///
/// Search results are cached per level and the whole cache is discarded
/// whenever the stack is pushed or popped, so lookups on a stable stack
/// cost one lock and an array index.
///
/// # Concurrency
///
/// Stack mutation and resolution share one mutex. The lock is released
/// before the chosen handler runs, so slow sinks never block other threads'
/// resolution or writes to other handlers.
///
/// # Example
///
/// ```
/// use loft::handler::{Flags, MemorySink, StdHandler};
/// use loft::{log_error, DefaultLogger, LogLevel, Logger};
/// use std::sync::Arc;
///
/// let everything = MemorySink::new();
/// let errors = MemorySink::new();
///
/// let logger = DefaultLogger::new(
///     "app",
///     vec![
///         Arc::new(StdHandler::new(LogLevel::Debug, everything.clone(), Flags::NONE)),
///         Arc::new(StdHandler::new(LogLevel::Error, errors.clone(), Flags::NONE)),
///     ],
/// );
///
/// logger.info(&[&"started"]);
/// log_error!(logger, "disk {} full", "/dev/sda1");
///
/// assert_eq!(everything.contents(), "app.INFO: started\n");
/// assert_eq!(errors.contents(), "app.ERROR: disk /dev/sda1 full\n");
/// ```
pub struct DefaultLogger {
    name: String,
    stack: Mutex<HandlerStack>,
}

impl DefaultLogger {
    /// Create a logger named `name` with `handlers` already stacked,
    /// first element at the bottom.
    ///
    /// An empty name is replaced with [`DEFAULT_LOGGER_NAME`].
    pub fn new(name: impl Into<String>, handlers: Vec<Arc<dyn Handler>>) -> Self {
        let mut name = name.into();
        if name.is_empty() {
            name = DEFAULT_LOGGER_NAME.to_string();
        }
        Self {
            name,
            stack: Mutex::new(HandlerStack {
                handlers,
                ..Default::default()
            }),
        }
    }

    /// Name rendered into every record.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of handlers currently stacked.
    pub fn handler_count(&self) -> usize {
        self.stack.lock().handlers.len()
    }

    /// Push `handler` on top of the stack, giving it first refusal on
    /// every level.
    pub fn push_handler(&self, handler: Arc<dyn Handler>) {
        let mut stack = self.stack.lock();
        stack.invalidate();
        stack.handlers.push(handler);
        tracing::trace!(
            logger = %self.name,
            depth = stack.handlers.len(),
            "Handler pushed"
        );
    }

    /// Remove and return the top handler.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::StackEmpty`] when there is nothing to pop. The
    /// logger is left unchanged in that case.
    pub fn pop_handler(&self) -> Result<Arc<dyn Handler>, LoggerError> {
        let mut stack = self.stack.lock();
        let handler = stack.handlers.pop().ok_or(LoggerError::StackEmpty)?;
        stack.invalidate();
        tracing::trace!(
            logger = %self.name,
            depth = stack.handlers.len(),
            "Handler popped"
        );
        Ok(handler)
    }

    /// The handler responsible for `level`, if any.
    ///
    /// Repeated calls on an unchanged stack return the same handler.
    pub fn resolve(&self, level: LogLevel) -> Option<Arc<dyn Handler>> {
        self.stack.lock().resolve(level)
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOGGER_NAME, Vec::new())
    }
}

impl Logger for DefaultLogger {
    fn log(&self, level: LogLevel, args: &[&dyn Display]) {
        if let Some(handler) = self.resolve(level) {
            handler.handle(level, &self.name, args);
        }
    }

    fn log_fmt(&self, level: LogLevel, args: Arguments<'_>) {
        if let Some(handler) = self.resolve(level) {
            handler.handle_fmt(level, &self.name, args);
        }
    }
}

impl fmt::Debug for DefaultLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultLogger")
            .field("name", &self.name)
            .field("handlers", &self.handler_count())
            .finish()
    }
}
