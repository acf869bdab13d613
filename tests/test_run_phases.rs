#![cfg(unix)]

mod test_utils;

use std::fs;

use logging_benchmark::{log_path, run_phases, BackendId, Phase, ERROR_MESSAGE};
use temp_dir::TempDir;

#[test]
fn both_phases_run_isolated() {
    let tmp = TempDir::new().unwrap();
    let capture = tmp.child("run.txt");

    let mut seen = Vec::new();
    let bytes = test_utils::capture_stdout(&capture, || {
        run_phases(|phase, subject| {
            let mut operations = 0;
            for (_, backend) in subject.operations() {
                backend.emit_error(ERROR_MESSAGE);
                operations += 1;
            }
            seen.push((phase, operations));
        })
        .unwrap();
    });

    assert_eq!(seen, vec![(Phase::Console, 4), (Phase::File, 4)]);

    // The console phase ran behind the discard sink and the file phase only
    // touches files, so the stream that was current before the run stays
    // byte-free.
    assert!(
        bytes.is_empty(),
        "unexpected console output: {:?}",
        String::from_utf8_lossy(&bytes)
    );

    for id in BackendId::ALL {
        let path = log_path(id);
        let len = fs::metadata(&path)
            .unwrap_or_else(|e| panic!("{id}: {path:?} missing after file phase: {e}"))
            .len();
        assert!(len > 0, "{id}: {path:?} is empty after file phase");
    }
}
