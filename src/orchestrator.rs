use crate::error::SetupError;
use crate::stdout_guard::StdoutGuard;
use crate::subject::BenchmarkSubject;

/// One complete run of all four backends under one subject.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// All adapters bound to the console.
    Console,
    /// All adapters bound to per-backend files.
    File,
}

impl Phase {
    /// The benchmark group name for this phase.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::File => "file",
        }
    }
}

/// Runs the console phase and then the file phase, handing each freshly
/// built subject to `engine` for measurement.
///
/// Between the phases the orchestrator releases every adapter of the
/// console subject, drops it, and restores the captured stdout stream;
/// nothing the first phase configured can reach into the second one. Setup
/// failures abort the whole run, there is no partial-result mode.
///
/// # Errors
///
/// The first [`SetupError`] encountered while redirecting stdout or
/// constructing a subject.
pub fn run_phases<E>(mut engine: E) -> Result<(), SetupError>
where
    E: FnMut(Phase, &BenchmarkSubject),
{
    let guard = StdoutGuard::discard()?;
    let mut console = BenchmarkSubject::console()?;
    engine(Phase::Console, &console);
    console.release();
    drop(console);
    drop(guard);

    let mut file = BenchmarkSubject::file()?;
    engine(Phase::File, &file);
    file.release();
    Ok(())
}
