//! INI serialization logic for converting `LoggerConfig` → INI string.

use std::fmt::Write as _;

use super::defaults::{HANDLER_SECTION_PREFIX, LOGGER_SECTION};
use super::settings::{HandlerKind, LoggerConfig};

/// Convert a `LoggerConfig` to a commented INI string for saving.
pub(super) fn to_config_string(config: &LoggerConfig) -> String {
    let mut out = format!(
        r#"; loft logger configuration
;
; Handlers are stacked in file order: the first [handler.*] section is the
; bottom of the stack and the last one is asked first. A record goes to the
; topmost handler whose level is at or below the record's level; records no
; handler accepts are dropped.

[{}]
; Name written into every record as "<name>.<LEVEL>: "
name = {}
"#,
        LOGGER_SECTION, config.logger.name
    );

    for handler in &config.handlers {
        let _ = write!(
            out,
            r#"
[{}{}]
; std | tracing
kind = {}
; debug | info | notice | warn | error | fatal | emergency
level = {}
"#,
            HANDLER_SECTION_PREFIX,
            handler.label,
            handler.kind,
            handler.level.label().to_ascii_lowercase()
        );
        if handler.kind == HandlerKind::Std {
            let _ = write!(
                out,
                r#"; stdout | stderr | path to a file (appended to)
sink = {}
; comma list of date, time, microseconds, utc, msgprefix (or std / none)
flags = {}
"#,
                handler.sink, handler.flags
            );
        }
    }

    out
}
