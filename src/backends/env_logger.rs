use std::path::Path;

use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

use crate::backend::{BackendId, ErrorBackend};
use crate::backends::{forward_to_log, open_append};
use crate::error::SetupError;

const TARGET: &str = "env_logger_bench";

/// `env_logger` behind an owned `Logger` that is never installed globally.
pub struct EnvLoggerBackend {
    logger: env_logger::Logger,
}

impl EnvLoggerBackend {
    /// Binds the logger to stdout, without color decoration.
    ///
    /// # Errors
    ///
    /// Infallible today; the `Result` keeps the construction contract
    /// uniform across adapters.
    pub fn console() -> Result<Self, SetupError> {
        let mut builder = Self::builder();
        builder.target(Target::Stdout);
        Ok(Self {
            logger: builder.build(),
        })
    }

    /// Binds the logger to its append-mode file below `dir`.
    ///
    /// # Errors
    ///
    /// [`SetupError::Sink`] if the file cannot be opened.
    pub fn file(dir: &Path) -> Result<Self, SetupError> {
        let file = open_append(dir, BackendId::EnvLogger)?;
        let mut builder = Self::builder();
        builder.target(Target::Pipe(Box::new(file)));
        Ok(Self {
            logger: builder.build(),
        })
    }

    fn builder() -> Builder {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Error)
            .write_style(WriteStyle::Never);
        builder
    }
}

impl ErrorBackend for EnvLoggerBackend {
    fn emit_error(&self, message: &str) {
        forward_to_log(&self.logger, TARGET, message);
    }

    fn release(&mut self) {
        log::Log::flush(&self.logger);
    }
}
