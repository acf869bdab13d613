#![cfg(unix)]

use std::fs::File;
use std::io::Write;

use logging_benchmark::StdoutGuard;
use temp_dir::TempDir;

#[test]
fn guard_discards_and_restores() {
    let tmp = TempDir::new().unwrap();
    let capture_path = tmp.child("stdout.txt");

    let capture = File::create(&capture_path).unwrap();
    let outer = StdoutGuard::redirect_to(&capture).unwrap();
    {
        let inner = StdoutGuard::discard().unwrap();
        write_to_stdout("muted\n");
        drop(inner);
    }
    write_to_stdout("visible\n");
    drop(outer);

    // Only the bytes written after the discard guard was dropped may reach
    // the captured stream.
    let text = std::fs::read_to_string(&capture_path).unwrap();
    assert_eq!(text, "visible\n");
}

fn write_to_stdout(s: &str) {
    let mut out = std::io::stdout();
    out.write_all(s.as_bytes()).unwrap();
    out.flush().unwrap();
}
