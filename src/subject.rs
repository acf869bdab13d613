use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::{BackendId, ErrorBackend, OutputTarget};
use crate::backends::{EnvLoggerBackend, FlexiLoggerBackend, Log4rsBackend, TracingBackend};
use crate::error::SetupError;

/// Directory below the working directory into which the file phase writes,
/// one file per backend. Files are appended across runs, never truncated
/// or rotated by the harness.
pub const LOG_DIR: &str = "log_files";

/// Path of `id`'s sink in the file phase.
#[must_use]
pub fn log_path(id: BackendId) -> PathBuf {
    Path::new(LOG_DIR).join(id.log_file_name())
}

/// The per-phase container: one ready-to-write adapter per backend, all
/// bound to the same output target.
///
/// A subject is built immediately before its phase is measured, lives for
/// exactly that phase, and is [released](Self::release) before the next
/// phase constructs its own subject.
pub struct BenchmarkSubject {
    target: OutputTarget,
    adapters: Vec<(BackendId, Box<dyn ErrorBackend>)>,
}

impl BenchmarkSubject {
    /// Builds all four adapters against the console, with any color or
    /// ANSI decoration disabled so no backend pays for escape sequences.
    ///
    /// # Errors
    ///
    /// The first adapter construction failure, typically a missing
    /// `log4rs-console.yaml`.
    pub fn console() -> Result<Self, SetupError> {
        Ok(Self {
            target: OutputTarget::Console,
            adapters: vec![
                (BackendId::EnvLogger, Box::new(EnvLoggerBackend::console()?)),
                (
                    BackendId::FlexiLogger,
                    Box::new(FlexiLoggerBackend::console()?),
                ),
                (BackendId::Log4rs, Box::new(Log4rsBackend::console()?)),
                (BackendId::Tracing, Box::new(TracingBackend::console()?)),
            ],
        })
    }

    /// Builds all four adapters against their files below [`LOG_DIR`],
    /// creating the directory first. Every adapter keeps a single open
    /// append handle for the subject's lifetime.
    ///
    /// # Errors
    ///
    /// [`SetupError::LogDirectory`] if the directory cannot be created,
    /// otherwise the first adapter construction failure.
    pub fn file() -> Result<Self, SetupError> {
        let dir = Path::new(LOG_DIR);
        fs::create_dir_all(dir).map_err(|source| SetupError::LogDirectory {
            path: dir.to_owned(),
            source,
        })?;
        Ok(Self {
            target: OutputTarget::File,
            adapters: vec![
                (BackendId::EnvLogger, Box::new(EnvLoggerBackend::file(dir)?)),
                (
                    BackendId::FlexiLogger,
                    Box::new(FlexiLoggerBackend::file(dir)?),
                ),
                (BackendId::Log4rs, Box::new(Log4rsBackend::file()?)),
                (BackendId::Tracing, Box::new(TracingBackend::file(dir)?)),
            ],
        })
    }

    /// The output target all adapters of this subject share.
    #[must_use]
    pub fn target(&self) -> OutputTarget {
        self.target
    }

    /// The measurable surface: benchmark name and adapter, in
    /// [`BackendId::ALL`] order. The table is built at construction time;
    /// nothing is discovered at runtime.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &dyn ErrorBackend)> + '_ {
        self.adapters
            .iter()
            .map(|(id, adapter)| (id.name(), adapter.as_ref()))
    }

    /// Tears down every adapter. The orchestrator calls this before the
    /// next phase's subject is constructed.
    pub fn release(&mut self) {
        for (_, adapter) in &mut self.adapters {
            adapter.release();
        }
    }
}

#[cfg(test)]
mod test {
    use super::{log_path, BenchmarkSubject};
    use crate::backend::BackendId;

    #[test]
    fn sink_paths_are_distinct() {
        let paths: Vec<_> = BackendId::ALL.iter().map(|id| log_path(*id)).collect();
        for (i, path) in paths.iter().enumerate() {
            assert!(!paths[i + 1..].contains(path), "duplicate sink {path:?}");
        }
    }

    #[test]
    fn table_follows_backend_order() {
        let subject = BenchmarkSubject::console().unwrap();
        let names: Vec<_> = subject.operations().map(|(name, _)| name).collect();
        let expected: Vec<_> = BackendId::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(names, expected);
    }
}
