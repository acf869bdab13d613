use std::path::Path;
use std::sync::Arc;

use tracing::dispatcher::{self, Dispatch};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::backend::{BackendId, ErrorBackend};
use crate::backends::open_append;
use crate::error::SetupError;

/// `tracing` events formatted by a `tracing-subscriber` fmt subscriber that
/// sits behind an owned [`Dispatch`] instead of the global default.
///
/// Entering the dispatcher is part of the timed path here; it is the price
/// of keeping this backend off the global registry, comparable to the
/// per-call provider indirection of the other adapters.
pub struct TracingBackend {
    dispatch: Dispatch,
}

impl TracingBackend {
    /// Binds the subscriber to stdout, ANSI decoration disabled.
    ///
    /// # Errors
    ///
    /// Infallible today; the `Result` keeps the construction contract
    /// uniform across adapters.
    pub fn console() -> Result<Self, SetupError> {
        Ok(Self {
            dispatch: Dispatch::new(Self::builder().finish()),
        })
    }

    /// Binds the subscriber to its append-mode file below `dir`. The file
    /// handle is shared behind an `Arc` and stays open across calls.
    ///
    /// # Errors
    ///
    /// [`SetupError::Sink`] if the file cannot be opened.
    pub fn file(dir: &Path) -> Result<Self, SetupError> {
        let file = open_append(dir, BackendId::Tracing)?;
        Ok(Self {
            dispatch: Dispatch::new(Self::builder().with_writer(Arc::new(file)).finish()),
        })
    }

    fn builder() -> SubscriberBuilder {
        tracing_subscriber::fmt()
            .with_max_level(Level::ERROR)
            .with_ansi(false)
    }
}

impl ErrorBackend for TracingBackend {
    fn emit_error(&self, message: &str) {
        dispatcher::with_default(&self.dispatch, || {
            tracing::error!("{message}");
        });
    }
}
