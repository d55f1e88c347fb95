//! `loft resolve` - show the handler chosen for every level.

use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use loft::config::default_config_path;
use loft::{DefaultLogger, LogLevel};

use crate::error::CliError;

/// Arguments for `loft resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Configuration file describing the handler stack
    #[arg(long, short, default_value_os_t = default_config_path())]
    pub config: PathBuf,
}

/// Print one `LEVEL -> label` line per level, `(dropped)` when no handler
/// accepts it.
///
/// Builds the real handlers, so file sinks are created if missing.
pub fn run(args: ResolveArgs) -> Result<(), CliError> {
    let config = super::load_config(&args.config)?;
    let labelled = config.build_handlers()?;
    let logger = DefaultLogger::new(
        config.logger.name.clone(),
        labelled.iter().map(|(_, h)| Arc::clone(h)).collect(),
    );

    println!("Logger: {}", logger.name());
    for level in LogLevel::ALL {
        let label = logger
            .resolve(level)
            .and_then(|resolved| {
                labelled
                    .iter()
                    .rev()
                    .find(|(_, h)| Arc::ptr_eq(h, &resolved))
                    .map(|(label, _)| label.as_str())
            })
            .unwrap_or("(dropped)");
        println!("  {:<9} -> {}", level.label(), label);
    }

    Ok(())
}
