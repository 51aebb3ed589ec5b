//! Benchmarks for submission and drain throughput

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use seqexec::SequentialExecutor;
use std::sync::mpsc;

fn submit_and_drain(executor: &SequentialExecutor, count: usize) {
    for _ in 0..count {
        executor.execute(|| {}).unwrap();
    }

    let (tx, rx) = mpsc::channel();
    executor.execute(move || tx.send(()).unwrap()).unwrap();
    rx.recv().unwrap();
}

fn bench_submit_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_drain");

    for &count in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let executor = SequentialExecutor::new();
            b.iter(|| submit_and_drain(&executor, count));
            executor.shutdown();
        });
    }

    group.finish();
}

criterion_group!(benches, bench_submit_drain);
criterion_main!(benches);
