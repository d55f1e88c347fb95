//! INI parsing logic for converting `Ini` → `LoggerConfig`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::{Ini, Properties};

use super::defaults::{HANDLER_SECTION_PREFIX, LOGGER_SECTION};
use super::file::ConfigFileError;
use super::settings::{HandlerSettings, LoggerConfig};
use crate::handler::{ParseFlagsError, SinkTarget};

/// Parse an `Ini` object into a `LoggerConfig`.
///
/// Starts from `LoggerConfig::default()` and overlays the `[logger]`
/// section. Every `[handler.<label>]` section becomes one handler, in file
/// order.
pub(super) fn parse_ini(ini: &Ini) -> Result<LoggerConfig, ConfigFileError> {
    let mut config = LoggerConfig::default();

    for (section_name, section) in ini.iter() {
        let Some(section_name) = section_name else {
            continue;
        };

        if section_name == LOGGER_SECTION {
            if let Some(v) = section.get("name") {
                let v = v.trim();
                if !v.is_empty() {
                    config.logger.name = v.to_string();
                }
            }
            continue;
        }

        let Some(label) = section_name.strip_prefix(HANDLER_SECTION_PREFIX) else {
            tracing::warn!(
                section = section_name,
                "Ignoring unknown configuration section"
            );
            continue;
        };
        let label = label.trim();
        if label.is_empty() {
            return Err(ConfigFileError::InvalidValue {
                section: section_name.to_string(),
                key: String::new(),
                value: String::new(),
                reason: "handler sections must be named [handler.<label>]".to_string(),
            });
        }
        if config.handlers.iter().any(|h| h.label == label) {
            return Err(ConfigFileError::DuplicateSection(section_name.to_string()));
        }

        config
            .handlers
            .push(parse_handler(section_name, label, section)?);
    }

    Ok(config)
}

fn parse_handler(
    section_name: &str,
    label: &str,
    section: &Properties,
) -> Result<HandlerSettings, ConfigFileError> {
    let mut handler = HandlerSettings::new(label);
    let invalid = |key: &str, value: &str, reason: String| ConfigFileError::InvalidValue {
        section: section_name.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason,
    };

    for (key, value) in section.iter() {
        match key {
            "kind" => {
                handler.kind = value.parse().map_err(|e| invalid(key, value, e))?;
            }
            "level" => {
                handler.level = value.parse().map_err(|_| {
                    invalid(
                        key,
                        value,
                        "must be one of: debug, info, notice, warn, error, fatal, emergency"
                            .to_string(),
                    )
                })?;
            }
            "sink" => {
                if value.trim().is_empty() {
                    return Err(invalid(
                        key,
                        value,
                        "expected stdout, stderr or a file path".to_string(),
                    ));
                }
                handler.sink = match value.parse::<SinkTarget>() {
                    Ok(sink) => sink,
                    Err(never) => match never {},
                };
            }
            "flags" => {
                handler.flags = value
                    .parse()
                    .map_err(|e: ParseFlagsError| invalid(key, value, e.to_string()))?;
            }
            other => {
                tracing::warn!(
                    section = section_name,
                    key = other,
                    "Ignoring unknown configuration key"
                );
            }
        }
    }

    Ok(handler)
}
