use std::path::PathBuf;

use flexi_logger::FlexiLoggerError;
use thiserror::Error;

/// Describes failures while a benchmark run is being set up.
///
/// All variants are fatal: the harness has no partial-result mode, so any
/// setup error aborts the run before measurements start.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The log directory could not be created.
    #[error("log directory {path:?} is not usable")]
    LogDirectory {
        /// The directory the file phase writes into.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A backend's file sink could not be opened.
    #[error("sink for backend {backend} cannot be opened")]
    Sink {
        /// Name of the backend whose sink failed.
        backend: &'static str,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The `flexi_logger` backend could not be built.
    #[error(transparent)]
    FlexiLogger(#[from] FlexiLoggerError),

    /// The `log4rs` configuration file is missing or invalid.
    #[error("log4rs configuration {path:?} cannot be loaded: {reason}")]
    Log4rsConfig {
        /// Path of the configuration file that was rejected.
        path: PathBuf,
        /// What `log4rs` reported while loading it.
        reason: anyhow::Error,
    },

    /// Redirecting or restoring the process stdout stream failed.
    #[error("stdout redirection failed")]
    Redirect(#[source] std::io::Error),
}
