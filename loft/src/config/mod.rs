//! Logger configuration files.
//!
//! A configuration names the logger and lists its handler stack, bottom
//! first, one `[handler.<label>]` section per handler:
//!
//! ```
//! use loft::config::LoggerConfig;
//! use loft::LogLevel;
//!
//! let config = LoggerConfig::from_ini_str(
//!     "[logger]\nname = app\n\n[handler.console]\nlevel = info\nsink = stderr\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.logger.name, "app");
//! assert_eq!(config.handlers[0].level, LogLevel::Info);
//! ```

mod builder;
mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use builder::LabelledHandler;
pub use defaults::{DEFAULT_CONFIG_FILE, HANDLER_SECTION_PREFIX, LOGGER_SECTION};
pub use file::{default_config_path, ConfigFileError};
pub use settings::{HandlerKind, HandlerSettings, LoggerConfig, LoggerSettings};
