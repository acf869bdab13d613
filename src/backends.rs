//! One adapter per backend.
//!
//! Each module wires a third-party logging backend into an owned,
//! ready-to-write handle and implements [`ErrorBackend`] on top of it.
//! None of them registers with the process-global `log` or `tracing`
//! machinery; isolation between phases is a matter of dropping handles,
//! not of resetting hidden registries.

mod env_logger;
mod flexi_logger;
mod log4rs;
mod tracing;

pub use self::env_logger::EnvLoggerBackend;
pub use self::flexi_logger::FlexiLoggerBackend;
pub use self::log4rs::Log4rsBackend;
pub use self::tracing::TracingBackend;

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::backend::BackendId;
use crate::error::SetupError;

/// Opens the backend's file sink in append mode, creating it if necessary.
///
/// The handle stays open for the adapter's whole lifetime, so no backend
/// pays a per-call open cost that another one avoids.
pub(crate) fn open_append(dir: &Path, id: BackendId) -> Result<File, SetupError> {
    let path = dir.join(id.log_file_name());
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| SetupError::Sink {
            backend: id.name(),
            source,
        })
}

/// Hands one error-level record to an owned `log::Log` implementation.
///
/// The record is built here instead of going through the `log!` macros
/// because the macros only ever talk to the global logger.
pub(crate) fn forward_to_log(logger: &dyn log::Log, target: &'static str, message: &str) {
    logger.log(
        &log::Record::builder()
            .args(format_args!("{message}"))
            .level(log::Level::Error)
            .target(target)
            .build(),
    );
}
