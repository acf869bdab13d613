#[cfg(unix)]
use std::os::fd::OwnedFd;

use crate::error::SetupError;

/// Redirects the process-wide stdout descriptor for the lifetime of the
/// guard and restores the captured stream on drop.
///
/// The console phase runs with stdout pointed at a discard sink; otherwise
/// the measured writes would flood the terminal that later has to show the
/// results. Redirection happens at the file-descriptor level so that it
/// also catches backends holding their own handle to the stream.
#[cfg(unix)]
pub struct StdoutGuard {
    saved: OwnedFd,
}

#[cfg(unix)]
impl StdoutGuard {
    /// Redirects stdout to `/dev/null`.
    ///
    /// # Errors
    ///
    /// [`SetupError::Redirect`] if the sink cannot be opened or the
    /// descriptor juggling fails.
    pub fn discard() -> Result<Self, SetupError> {
        let sink = std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/null")
            .map_err(SetupError::Redirect)?;
        Self::redirect_to(&sink)
    }

    /// Redirects stdout to an arbitrary open file.
    ///
    /// # Errors
    ///
    /// [`SetupError::Redirect`] if flushing the old stream or duplicating
    /// descriptors fails.
    pub fn redirect_to(sink: &std::fs::File) -> Result<Self, SetupError> {
        use std::io::Write;

        // Whatever sits in std's stdout buffer still belongs to the old
        // stream.
        std::io::stdout().flush().map_err(SetupError::Redirect)?;
        let saved =
            nix::unistd::dup(std::io::stdout()).map_err(|e| SetupError::Redirect(e.into()))?;
        nix::unistd::dup2_stdout(sink).map_err(|e| SetupError::Redirect(e.into()))?;
        Ok(Self { saved })
    }
}

#[cfg(unix)]
impl Drop for StdoutGuard {
    fn drop(&mut self) {
        use std::io::Write;

        let _ = std::io::stdout().flush();
        let _ = nix::unistd::dup2_stdout(&self.saved);
    }
}

/// Stdout redirection is not implemented for non-unix targets; there the
/// guard leaves the stream alone.
#[cfg(not(unix))]
pub struct StdoutGuard;

#[cfg(not(unix))]
impl StdoutGuard {
    /// Does nothing on this platform.
    ///
    /// # Errors
    ///
    /// Never fails.
    pub fn discard() -> Result<Self, SetupError> {
        Ok(Self)
    }
}
