use std::fmt;

/// The message every adapter writes, in both phases.
///
/// Keeping the payload constant keeps the measured work identical across
/// backends and across phases.
pub const ERROR_MESSAGE: &str = "This is my error";

/// The closed set of logging backends under measurement.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BackendId {
    /// `env_logger`, built without installing it as the global logger.
    EnvLogger,
    /// `flexi_logger`, built with an owned `LoggerHandle`.
    FlexiLogger,
    /// `log4rs`, configured from a YAML file per output target.
    Log4rs,
    /// `tracing`, with a `tracing-subscriber` fmt subscriber behind an
    /// owned `Dispatch`.
    Tracing,
}

impl BackendId {
    /// All backends, in the order in which their operations are registered
    /// with the measurement engine.
    pub const ALL: [BackendId; 4] = [
        BackendId::EnvLogger,
        BackendId::FlexiLogger,
        BackendId::Log4rs,
        BackendId::Tracing,
    ];

    /// The benchmark id under which this backend's operation is registered.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EnvLogger => "env_logger",
            Self::FlexiLogger => "flexi_logger",
            Self::Log4rs => "log4rs",
            Self::Tracing => "tracing",
        }
    }

    /// File name of this backend's sink within the log directory.
    ///
    /// Every backend writes to its own file; two adapters sharing a path
    /// would interleave records and spoil comparability.
    #[must_use]
    pub fn log_file_name(self) -> &'static str {
        match self {
            Self::EnvLogger => "env_logger.log",
            Self::FlexiLogger => "flexi_logger.log",
            Self::Log4rs => "log4rs.log",
            Self::Tracing => "tracing.log",
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The output environment a subject binds its adapters to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputTarget {
    /// The process stdout stream.
    Console,
    /// One append-mode file per backend below
    /// [`LOG_DIR`](crate::LOG_DIR).
    File,
}

/// A logging backend reduced to the one capability the harness measures.
///
/// Construction does all backend-specific setup (sink wiring, formatting,
/// level filtering). `emit_error` is the timed path and must do nothing but
/// hand one record to the already-configured pipeline.
pub trait ErrorBackend {
    /// Writes one error-level record with the given message to the
    /// configured sink.
    fn emit_error(&self, message: &str);

    /// Flushes outstanding output and tears backend state down, so that a
    /// subject built afterwards starts from a clean slate.
    fn release(&mut self) {}
}

#[cfg(test)]
mod test {
    use super::BackendId;

    #[test]
    fn ids_have_distinct_names_and_files() {
        for (i, a) in BackendId::ALL.iter().enumerate() {
            assert!(a.log_file_name().ends_with(".log"));
            for b in &BackendId::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.log_file_name(), b.log_file_name());
            }
        }
    }

    #[test]
    fn display_matches_name() {
        for id in BackendId::ALL {
            assert_eq!(id.to_string(), id.name());
        }
    }
}
