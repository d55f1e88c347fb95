//! Logger trait definition.

use std::fmt::{Arguments, Display};

use crate::level::LogLevel;

/// Leveled logging interface for application components.
///
/// Plain calls take a list of displayable operands that are rendered one
/// after another; the `_fmt` variants take pre-built [`Arguments`], usually
/// via the `log_*!` macros.
///
/// Logging never fails: records nobody wants are dropped and write errors
/// stay inside the handlers.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across threads.
///
/// # Example
///
/// ```
/// use loft::{log_info, Logger, NoOpLogger};
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// logger.info(&[&"Application started"]);
/// log_info!(logger, "Listening on port {}", 8080);
/// ```
pub trait Logger: Send + Sync {
    /// Log `args` at `level`.
    ///
    /// The operands are written back to back with no separator, so
    /// `&[&1, &2]` renders as `12`. Put spaces in the operands, or use
    /// [`log_fmt`](Logger::log_fmt), when they are wanted.
    ///
    /// This is the core method that implementations must provide, together
    /// with [`log_fmt`](Logger::log_fmt). The per-level convenience methods
    /// delegate to these two.
    fn log(&self, level: LogLevel, args: &[&dyn Display]);

    /// Log a formatted message at `level`.
    fn log_fmt(&self, level: LogLevel, args: Arguments<'_>);

    /// Log a debug-level message.
    fn debug(&self, args: &[&dyn Display]) {
        self.log(LogLevel::Debug, args);
    }

    /// Log a formatted debug-level message.
    fn debug_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    /// Log an info-level message.
    fn info(&self, args: &[&dyn Display]) {
        self.log(LogLevel::Info, args);
    }

    /// Log a formatted info-level message.
    fn info_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    /// Log a notice-level message.
    fn notice(&self, args: &[&dyn Display]) {
        self.log(LogLevel::Notice, args);
    }

    /// Log a formatted notice-level message.
    fn notice_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(LogLevel::Notice, args);
    }

    /// Log a warning-level message.
    fn warn(&self, args: &[&dyn Display]) {
        self.log(LogLevel::Warn, args);
    }

    /// Log a formatted warning-level message.
    fn warn_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(LogLevel::Warn, args);
    }

    /// Log an error-level message.
    fn error(&self, args: &[&dyn Display]) {
        self.log(LogLevel::Error, args);
    }

    /// Log a formatted error-level message.
    fn error_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    /// Log at `FATAL`. Only routes the record; the process keeps running.
    fn fatal(&self, args: &[&dyn Display]) {
        self.log(LogLevel::Fatal, args);
    }

    /// Log a formatted fatal-level message.
    fn fatal_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(LogLevel::Fatal, args);
    }

    /// Log an emergency-level message.
    fn emergency(&self, args: &[&dyn Display]) {
        self.log(LogLevel::Emergency, args);
    }

    /// Log a formatted emergency-level message.
    fn emergency_fmt(&self, args: Arguments<'_>) {
        self.log_fmt(LogLevel::Emergency, args);
    }
}

/// Convenience macros for logging with format strings.
///
/// These expand to the matching `_fmt` method with `format_args!`.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $($arg:tt)*) => {
        $logger.notice_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_emergency {
    ($logger:expr, $($arg:tt)*) => {
        $logger.emergency_fmt(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Records (level, formatted?, text) for every call.
    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<(LogLevel, bool, String)>>,
    }

    impl Logger for Recording {
        fn log(&self, level: LogLevel, args: &[&dyn Display]) {
            let mut text = String::new();
            crate::handler::render_args(&mut text, args);
            self.calls.lock().push((level, false, text));
        }

        fn log_fmt(&self, level: LogLevel, args: Arguments<'_>) {
            self.calls.lock().push((level, true, args.to_string()));
        }
    }

    #[test]
    fn test_convenience_methods_fix_level() {
        let logger = Recording::default();

        logger.debug(&[&"d"]);
        logger.info(&[&"i"]);
        logger.notice(&[&"n"]);
        logger.warn(&[&"w"]);
        logger.error(&[&"e"]);
        logger.fatal(&[&"f"]);
        logger.emergency(&[&"m"]);

        let levels: Vec<LogLevel> = logger.calls.lock().iter().map(|c| c.0).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert!(logger.calls.lock().iter().all(|c| !c.1));
    }

    #[test]
    fn test_fmt_methods_fix_level() {
        let logger = Recording::default();

        logger.debug_fmt(format_args!("d"));
        logger.info_fmt(format_args!("i"));
        logger.notice_fmt(format_args!("n"));
        logger.warn_fmt(format_args!("w"));
        logger.error_fmt(format_args!("e"));
        logger.fatal_fmt(format_args!("f"));
        logger.emergency_fmt(format_args!("m"));

        let levels: Vec<LogLevel> = logger.calls.lock().iter().map(|c| c.0).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert!(logger.calls.lock().iter().all(|c| c.1));
    }

    #[test]
    fn test_macros_format_arguments() {
        let logger = Recording::default();

        crate::log_debug!(logger, "{}+{}", 1, 2);
        crate::log_info!(logger, "plain");
        crate::log_notice!(logger, "{:>3}", 7);
        crate::log_warn!(logger, "{name}", name = "w");
        crate::log_error!(logger, "e{}", 'x');
        crate::log_fatal!(logger, "f");
        crate::log_emergency!(logger, "{:?}", "m");

        let calls = logger.calls.lock();
        let texts: Vec<&str> = calls.iter().map(|c| c.2.as_str()).collect();
        assert_eq!(texts, ["1+2", "plain", "  7", "w", "ex", "f", "\"m\""]);
        let levels: Vec<LogLevel> = calls.iter().map(|c| c.0).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
    }

    #[test]
    fn test_logger_is_object_safe() {
        let logger: Box<dyn Logger> = Box::new(Recording::default());
        logger.warn(&[&"via ", &"trait object"]);
    }
}
