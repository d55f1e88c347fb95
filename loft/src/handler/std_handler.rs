//! Text handler backed by a [`LineWriter`].

use std::fmt::{self, Arguments, Display, Write as _};
use std::io::Write;

use super::{render_args, Flags, Handler, LineWriter};
use crate::level::LogLevel;

/// Builds the label written before every message.
pub type PrefixFn = fn(LogLevel, &str) -> String;

/// Default label: `"<name>.<LEVEL>: "`.
///
/// ```
/// use loft::handler::label_prefix;
/// use loft::LogLevel;
///
/// assert_eq!(label_prefix(LogLevel::Warn, "db"), "db.WARN: ");
/// ```
pub fn label_prefix(level: LogLevel, name: &str) -> String {
    let label = level.label();
    let mut prefix = String::with_capacity(name.len() + label.len() + 3);
    prefix.push_str(name);
    prefix.push('.');
    prefix.push_str(label);
    prefix.push_str(": ");
    prefix
}

/// Handler that writes labelled lines to a byte sink.
///
/// Accepts every level at or above its threshold. Sink write failures are
/// swallowed; they surface only as a `tracing` warning.
pub struct StdHandler {
    threshold: LogLevel,
    writer: LineWriter,
    prefix: PrefixFn,
}

impl StdHandler {
    /// Create a handler for levels `>= threshold` writing to `sink`.
    ///
    /// `flags` configures the timestamp header and is passed to the
    /// underlying [`LineWriter`] untouched.
    pub fn new<W>(threshold: LogLevel, sink: W, flags: Flags) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            threshold,
            writer: LineWriter::new(sink, "", flags),
            prefix: label_prefix,
        }
    }

    /// Replace the label function.
    pub fn with_prefix(mut self, prefix: PrefixFn) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    pub fn flags(&self) -> Flags {
        self.writer.flags()
    }

    fn write(&self, level: LogLevel, name: &str, message: &str) {
        if let Err(e) = self.writer.write_line(message) {
            tracing::warn!(
                logger = name,
                severity = %level,
                error = %e,
                "Dropped log record: sink write failed"
            );
        }
    }
}

impl Handler for StdHandler {
    fn handles(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }

    fn handle(&self, level: LogLevel, name: &str, args: &[&dyn Display]) {
        let mut message = (self.prefix)(level, name);
        render_args(&mut message, args);
        self.write(level, name, &message);
    }

    fn handle_fmt(&self, level: LogLevel, name: &str, args: Arguments<'_>) {
        let mut message = (self.prefix)(level, name);
        let _ = message.write_fmt(args);
        self.write(level, name, &message);
    }
}

impl fmt::Debug for StdHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdHandler")
            .field("threshold", &self.threshold)
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::MemorySink;
    use std::io;

    fn handler(threshold: LogLevel) -> (StdHandler, MemorySink) {
        let sink = MemorySink::new();
        (StdHandler::new(threshold, sink.clone(), Flags::NONE), sink)
    }

    #[test]
    fn test_std_handler_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StdHandler>();
    }

    #[test]
    fn test_handles_is_threshold_comparison() {
        for threshold in LogLevel::ALL {
            let (handler, _) = handler(threshold);
            for level in LogLevel::ALL {
                assert_eq!(handler.handles(level), level >= threshold);
            }
        }
    }

    #[test]
    fn test_handles_is_monotonic() {
        let (handler, _) = handler(LogLevel::Warn);
        let accepted: Vec<bool> = LogLevel::ALL.iter().map(|l| handler.handles(*l)).collect();
        let first = accepted.iter().position(|a| *a).unwrap();
        assert!(accepted[first..].iter().all(|a| *a));
        assert!(accepted[..first].iter().all(|a| !*a));
    }

    #[test]
    fn test_handle_writes_label_and_args() {
        let (handler, sink) = handler(LogLevel::Debug);
        handler.handle(LogLevel::Info, "testing", &[&"ok!"]);
        handler.handle(LogLevel::Error, "testing", &[&"code ", &42]);

        assert_eq!(
            sink.lines(),
            vec!["testing.INFO: ok!", "testing.ERROR: code 42"]
        );
    }

    #[test]
    fn test_handle_fmt_writes_formatted_message() {
        let (handler, sink) = handler(LogLevel::Debug);
        handler.handle_fmt(
            LogLevel::Emergency,
            "core",
            format_args!("{} of {} disks failed", 2, 3),
        );

        assert_eq!(sink.contents(), "core.EMERGENCY: 2 of 3 disks failed\n");
    }

    #[test]
    fn test_custom_prefix() {
        fn bracketed(level: LogLevel, name: &str) -> String {
            format!("[{}] {} ", level, name)
        }

        let (handler, sink) = handler(LogLevel::Debug);
        let handler = handler.with_prefix(bracketed);
        handler.handle(LogLevel::Notice, "svc", &[&"up"]);

        assert_eq!(sink.contents(), "[NOTICE] svc up\n");
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let handler = StdHandler::new(LogLevel::Debug, Broken, Flags::STD);
        handler.handle(LogLevel::Fatal, "test", &[&"nobody hears this"]);
        handler.handle_fmt(LogLevel::Fatal, "test", format_args!("{}", "or this"));
    }

    #[test]
    fn test_accessors() {
        let handler = StdHandler::new(LogLevel::Notice, io::sink(), Flags::STD | Flags::UTC);
        assert_eq!(handler.threshold(), LogLevel::Notice);
        assert_eq!(handler.flags(), Flags::STD | Flags::UTC);
        assert!(format!("{:?}", handler).starts_with("StdHandler"));
    }
}
