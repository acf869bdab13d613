#![deny(missing_docs)]
#![deny(clippy::all)]
//! Measures what one error-level log record costs with four Rust logging
//! backends — `env_logger`, `flexi_logger`, `log4rs` and `tracing` — once
//! against the console and once against per-backend log files.
//!
//! The measurable pieces are plain library types, so the criterion bench
//! binary stays a thin driver:
//!
//! * [`BenchmarkSubject`] builds one ready-to-write adapter per backend,
//!   all bound to the same [`OutputTarget`], and exposes them as an explicit
//!   name → adapter table.
//! * [`run_phases`] sequences the console phase and the file phase,
//!   suppresses the process stdout stream during the former, and tears every
//!   adapter down in between so no backend state leaks across phases.
//!
//! Run with `cargo bench`. The console phase expects `log4rs-console.yaml`
//! in the working directory; the file phase additionally expects
//! `log4rs-file.yaml` and appends below `log_files/`.

mod backend;
mod backends;
mod error;
mod orchestrator;
mod stdout_guard;
mod subject;

pub use crate::backend::{BackendId, ErrorBackend, OutputTarget, ERROR_MESSAGE};
pub use crate::backends::{
    EnvLoggerBackend, FlexiLoggerBackend, Log4rsBackend, TracingBackend,
};
pub use crate::error::SetupError;
pub use crate::orchestrator::{run_phases, Phase};
pub use crate::stdout_guard::StdoutGuard;
pub use crate::subject::{log_path, BenchmarkSubject, LOG_DIR};
