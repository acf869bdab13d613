#![allow(dead_code)]

// Helpers shared by the integration tests. Each test file is its own
// process, which keeps the descriptor-level stdout games of one scenario
// away from the others.

use std::fs::File;
use std::io::Read;
use std::path::Path;

#[cfg(unix)]
use logging_benchmark::StdoutGuard;

/// Captures everything written to the process stdout descriptor while `f`
/// runs, including writes that bypass the std handles, and returns the
/// captured bytes.
#[cfg(unix)]
pub fn capture_stdout<F: FnOnce()>(capture_file: &Path, f: F) -> Vec<u8> {
    let sink = File::create(capture_file).unwrap();
    let guard = StdoutGuard::redirect_to(&sink).unwrap();
    f();
    drop(guard);

    let mut bytes = Vec::new();
    File::open(capture_file)
        .unwrap()
        .read_to_end(&mut bytes)
        .unwrap();
    bytes
}

/// Number of non-empty lines in captured output.
pub fn line_count(bytes: &[u8]) -> usize {
    bytes
        .split(|b| *b == b'\n')
        .filter(|line| !line.is_empty())
        .count()
}
