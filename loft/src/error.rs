//! Logger error types.

use thiserror::Error;

/// Errors returned by handler stack operations.
///
/// Logging calls themselves never fail; only explicit stack manipulation
/// can report an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoggerError {
    /// `pop_handler` was called on a logger with no handlers.
    #[error("Handler stack is empty")]
    StackEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_empty_display() {
        assert_eq!(
            LoggerError::StackEmpty.to_string(),
            "Handler stack is empty"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<LoggerError>();
    }
}
