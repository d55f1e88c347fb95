//! Default values for configuration settings.

use crate::handler::{Flags, SinkTarget};
use crate::level::LogLevel;

use super::settings::HandlerKind;

/// Config file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "loft.ini";

/// Section holding logger-wide settings.
pub const LOGGER_SECTION: &str = "logger";

/// Sections named `handler.<label>` describe one handler each.
pub const HANDLER_SECTION_PREFIX: &str = "handler.";

pub const DEFAULT_HANDLER_KIND: HandlerKind = HandlerKind::Std;
pub const DEFAULT_HANDLER_LEVEL: LogLevel = LogLevel::Debug;
pub const DEFAULT_HANDLER_FLAGS: Flags = Flags::STD;

pub fn default_sink() -> SinkTarget {
    SinkTarget::Stderr
}
