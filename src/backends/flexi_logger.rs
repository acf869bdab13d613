use std::path::Path;

use flexi_logger::{detailed_format, FileSpec, FlexiLoggerError, Logger, LoggerHandle, WriteMode};

use crate::backend::ErrorBackend;
use crate::backends::forward_to_log;
use crate::error::SetupError;

const TARGET: &str = "flexi_logger_bench";

/// `flexi_logger` built via [`Logger::build`], which yields a boxed logger
/// plus its [`LoggerHandle`] instead of touching the global `log` registry.
pub struct FlexiLoggerBackend {
    logger: Box<dyn log::Log>,
    handle: LoggerHandle,
}

impl FlexiLoggerBackend {
    /// Binds the logger to stdout. The `colors` feature is switched off for
    /// this crate, so the output carries no ANSI decoration.
    ///
    /// # Errors
    ///
    /// [`SetupError::FlexiLogger`] if the logger cannot be built.
    pub fn console() -> Result<Self, SetupError> {
        let (logger, handle) = Self::base()?.log_to_stdout().build()?;
        Ok(Self { logger, handle })
    }

    /// Binds the logger to `<dir>/flexi_logger.log` in append mode.
    ///
    /// # Errors
    ///
    /// [`SetupError::FlexiLogger`] if the log file cannot be opened.
    pub fn file(dir: &Path) -> Result<Self, SetupError> {
        let (logger, handle) = Self::base()?
            .log_to_file(
                FileSpec::default()
                    .directory(dir)
                    .basename("flexi_logger")
                    .suppress_timestamp(),
            )
            .append()
            .build()?;
        Ok(Self { logger, handle })
    }

    // WriteMode::Direct keeps the emit path synchronous and unbuffered,
    // like the other three backends.
    fn base() -> Result<Logger, FlexiLoggerError> {
        Ok(Logger::try_with_str("error")?
            .format(detailed_format)
            .write_mode(WriteMode::Direct))
    }
}

impl ErrorBackend for FlexiLoggerBackend {
    fn emit_error(&self, message: &str) {
        forward_to_log(self.logger.as_ref(), TARGET, message);
    }

    fn release(&mut self) {
        self.handle.shutdown();
    }
}
