use std::hint::black_box;

use criterion::Criterion;
use logging_benchmark::{run_phases, ERROR_MESSAGE};

// Hand-written harness instead of criterion_group!: the two phases share
// one process, and the orchestrator must redirect stdout and tear the
// console subject down between them.
fn main() {
    let mut criterion = Criterion::default().configure_from_args();

    run_phases(|phase, subject| {
        let mut group = criterion.benchmark_group(phase.name());
        for (name, backend) in subject.operations() {
            group.bench_function(name, |b| {
                b.iter(|| backend.emit_error(black_box(ERROR_MESSAGE)));
            });
        }
        group.finish();
    })
    .unwrap_or_else(|e| panic!("Benchmark setup failed with {e}"));

    criterion.final_summary();
}
