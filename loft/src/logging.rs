//! Diagnostics for binaries embedding loft.
//!
//! The library reports its own trouble (unwritable sinks, ignored config
//! keys, stack changes) through `tracing`. Binaries call [`init_logging`]
//! once to see those events on stderr. This is separate from the records
//! applications route through a [`DefaultLogger`](crate::DefaultLogger).
//!
//! Configurable via the RUST_LOG environment variable.

use std::io;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Failure to install the diagnostics subscriber.
#[derive(Debug, Error)]
#[error("Failed to initialize diagnostics logging: {0}")]
pub struct LoggingError(String);

/// Filter used when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize diagnostics logging to stderr.
///
/// RUST_LOG takes precedence; otherwise only warnings are shown, or
/// everything from debug up when `verbose` is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggingError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "debug");
    }

    #[test]
    fn test_second_init_fails() {
        // Only one global subscriber per process; whichever call comes
        // second must report an error rather than panic.
        let first = init_logging(false);
        let second = init_logging(true);
        assert!(first.is_err() || second.is_err());
    }
}
