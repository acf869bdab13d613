use std::path::Path;

use log4rs::config::Deserializers;

use crate::backend::ErrorBackend;
use crate::backends::forward_to_log;
use crate::error::SetupError;

const TARGET: &str = "log4rs_bench";

// Working-directory-relative, like the log directory itself.
const CONSOLE_CONFIG: &str = "log4rs-console.yaml";
const FILE_CONFIG: &str = "log4rs-file.yaml";

/// `log4rs` configured from a YAML file, the way its appender wiring is
/// meant to be supplied.
///
/// This is the one backend with an external configuration resource; a
/// missing or unparsable file aborts the run before any measurement.
pub struct Log4rsBackend {
    logger: log4rs::Logger,
}

impl Log4rsBackend {
    /// Loads `log4rs-console.yaml`: a plain-pattern stdout appender.
    ///
    /// # Errors
    ///
    /// [`SetupError::Log4rsConfig`] if the file is missing or invalid.
    pub fn console() -> Result<Self, SetupError> {
        Self::from_config(Path::new(CONSOLE_CONFIG))
    }

    /// Loads `log4rs-file.yaml`: an append-mode file appender. The sink
    /// path is fixed inside the configuration file, which is why this
    /// constructor takes no directory.
    ///
    /// # Errors
    ///
    /// [`SetupError::Log4rsConfig`] if the file is missing or invalid.
    pub fn file() -> Result<Self, SetupError> {
        Self::from_config(Path::new(FILE_CONFIG))
    }

    fn from_config(path: &Path) -> Result<Self, SetupError> {
        let config = log4rs::config::load_config_file(path, Deserializers::default()).map_err(
            |reason| SetupError::Log4rsConfig {
                path: path.to_owned(),
                reason,
            },
        )?;
        Ok(Self {
            logger: log4rs::Logger::new(config),
        })
    }
}

impl ErrorBackend for Log4rsBackend {
    fn emit_error(&self, message: &str) {
        forward_to_log(&self.logger, TARGET, message);
    }

    fn release(&mut self) {
        log::Log::flush(&self.logger);
    }
}
