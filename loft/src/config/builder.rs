//! Turning settings into live handlers and loggers.

use std::sync::Arc;

use super::file::ConfigFileError;
use super::settings::{HandlerKind, HandlerSettings, LoggerConfig};
use crate::handler::{Handler, StdHandler, TracingHandler};
use crate::logger::DefaultLogger;

/// A built handler paired with the label of the section it came from.
pub type LabelledHandler = (String, Arc<dyn Handler>);

impl HandlerSettings {
    /// Build the handler, opening its sink if it has one.
    pub fn build(&self) -> Result<Arc<dyn Handler>, ConfigFileError> {
        match self.kind {
            HandlerKind::Std => {
                let sink = self.sink.open().map_err(|source| self.sink_error(source))?;
                Ok(Arc::new(StdHandler::new(self.level, sink, self.flags)))
            }
            HandlerKind::Tracing => Ok(Arc::new(TracingHandler::new(self.level))),
        }
    }

    fn sink_error(&self, source: std::io::Error) -> ConfigFileError {
        ConfigFileError::SinkOpen {
            label: self.label.clone(),
            target: self.sink.to_string(),
            source,
        }
    }
}

impl LoggerConfig {
    /// Build every handler, bottom of the stack first, paired with its label.
    pub fn build_handlers(&self) -> Result<Vec<LabelledHandler>, ConfigFileError> {
        self.handlers
            .iter()
            .map(|settings| -> Result<_, ConfigFileError> {
                Ok((settings.label.clone(), settings.build()?))
            })
            .collect()
    }

    /// Build a logger with the configured name and handler stack.
    pub fn build(&self) -> Result<DefaultLogger, ConfigFileError> {
        let handlers = self
            .build_handlers()?
            .into_iter()
            .map(|(_, handler)| handler)
            .collect();
        tracing::debug!(
            logger = %self.logger.name,
            handlers = self.handlers.len(),
            "Built logger from configuration"
        );
        Ok(DefaultLogger::new(self.logger.name.clone(), handlers))
    }
}
