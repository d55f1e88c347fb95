//! Output handlers.
//!
//! A handler decides which severities it services and renders accepted
//! records to its destination. Loggers hold a stack of handlers and pick
//! one per record; see [`DefaultLogger`](crate::logger::DefaultLogger).
//!
//! # Provided handlers
//!
//! - [`StdHandler`]: labelled text lines written to any byte sink
//! - [`TracingHandler`]: forwards records to the `tracing` crate
//!
//! Sinks for [`StdHandler`] are plain [`std::io::Write`] values. [`MemorySink`]
//! captures output in memory and [`SinkTarget`] names the standard streams
//! or a file.

mod flags;
mod sink;
mod std_handler;
mod tracing_adapter;
mod r#trait;
mod writer;

pub use flags::{Flags, ParseFlagsError};
pub use r#trait::{render_args, Handler};
pub use sink::{MemorySink, SinkTarget};
pub use std_handler::{label_prefix, PrefixFn, StdHandler};
pub use tracing_adapter::TracingHandler;
pub use writer::LineWriter;
