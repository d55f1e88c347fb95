//! Handler trait definition.

use std::fmt::{Arguments, Display, Write};

use crate::level::LogLevel;

/// A unit that filters records by severity and writes the ones it accepts.
///
/// A [`DefaultLogger`](crate::logger::DefaultLogger) keeps a stack of
/// handlers and routes each record to the topmost handler whose
/// [`handles`](Handler::handles) returns `true` for the record's level.
///
/// # Thread Safety
///
/// Handlers are shared between threads behind an `Arc`, so implementations
/// must be `Send + Sync`. `handle` and `handle_fmt` may be called
/// concurrently.
///
/// # Example
///
/// ```
/// use loft::handler::Handler;
/// use loft::LogLevel;
/// use std::fmt::{Arguments, Display};
///
/// struct ErrorsOnly;
///
/// impl Handler for ErrorsOnly {
///     fn handles(&self, level: LogLevel) -> bool {
///         level >= LogLevel::Error
///     }
///
///     fn handle(&self, _level: LogLevel, _name: &str, _args: &[&dyn Display]) {}
///
///     fn handle_fmt(&self, _level: LogLevel, _name: &str, _args: Arguments<'_>) {}
/// }
///
/// assert!(ErrorsOnly.handles(LogLevel::Fatal));
/// assert!(!ErrorsOnly.handles(LogLevel::Warn));
/// ```
pub trait Handler: Send + Sync {
    /// Whether this handler services records of `level`.
    ///
    /// Must be free of side effects and stable: resolution may call it any
    /// number of times and caches the answer until the stack changes.
    fn handles(&self, level: LogLevel) -> bool;

    /// Render `args` for the logger `name` and write the record.
    ///
    /// Failures to write are the handler's concern and never reach the caller.
    fn handle(&self, level: LogLevel, name: &str, args: &[&dyn Display]);

    /// Write a pre-formatted message for the logger `name`.
    fn handle_fmt(&self, level: LogLevel, name: &str, args: Arguments<'_>);
}

/// Append every operand's `Display` output to `buf`, with no separator.
///
/// Adjacent numbers run together: `[&1, &2]` appends `12`, not `1 2`.
/// Callers that want spacing put it in the operands themselves.
pub fn render_args(buf: &mut String, args: &[&dyn Display]) {
    for arg in args {
        // Writing into a String cannot fail
        let _ = write!(buf, "{}", arg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_args_concatenates() {
        let mut buf = String::from(">");
        render_args(&mut buf, &[&"count", &3, &'!']);
        assert_eq!(buf, ">count3!");
    }

    #[test]
    fn test_render_args_adds_no_space_between_numbers() {
        let mut buf = String::new();
        render_args(&mut buf, &[&1, &2, &" ", &3]);
        assert_eq!(buf, "12 3");
    }

    #[test]
    fn test_render_args_empty() {
        let mut buf = String::new();
        render_args(&mut buf, &[]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_handler_is_object_safe() {
        struct Nothing;

        impl Handler for Nothing {
            fn handles(&self, _level: LogLevel) -> bool {
                false
            }
            fn handle(&self, _level: LogLevel, _name: &str, _args: &[&dyn Display]) {}
            fn handle_fmt(&self, _level: LogLevel, _name: &str, _args: Arguments<'_>) {}
        }

        let handler: Box<dyn Handler> = Box::new(Nothing);
        assert!(!handler.handles(LogLevel::Emergency));
        handler.handle(LogLevel::Info, "test", &[&"ignored"]);
        handler.handle_fmt(LogLevel::Info, "test", format_args!("{}", 1));
    }
}
