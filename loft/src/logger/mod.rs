//! Logging front end.
//!
//! Application code talks to the [`Logger`] trait; [`DefaultLogger`]
//! implements it by routing records through a stack of
//! [`Handler`](crate::handler::Handler)s, and [`NoOpLogger`] discards them.
//!
//! # Usage
//!
//! Components that need logging should accept an `Arc<dyn Logger>` and use
//! the provided macros:
//!
//! ```
//! use loft::{log_debug, log_info, Logger, NoOpLogger};
//! use std::sync::Arc;
//!
//! struct MyComponent {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl MyComponent {
//!     fn do_work(&self) {
//!         log_info!(self.logger, "Starting work");
//!         log_debug!(self.logger, "Work completed in {} steps", 3);
//!     }
//! }
//!
//! MyComponent { logger: Arc::new(NoOpLogger) }.do_work();
//! ```

mod default;
mod noop;
mod r#trait;

pub use default::{DefaultLogger, DEFAULT_LOGGER_NAME};
pub use noop::NoOpLogger;
pub use r#trait::Logger;
