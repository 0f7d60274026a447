//! Criterion benchmark for the sieve and its report
//!
//! This provides detailed performance analysis using the Criterion benchmarking framework.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use primes_benchmark_runner::BenchmarkRunner;
use primes_report::PrimeReport;
use primes_sieve::Sieve;

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");

    for bound in [1_000usize, 100_000, 10_000_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bound), bound, |b, &bound| {
            b.iter(|| Sieve::new(black_box(bound)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let sieve = Sieve::new(100_000);

    c.bench_function("render(100000)", |b| b.iter(|| PrimeReport::new(black_box(&sieve)).render()));
}

fn bench_write_to_file(c: &mut Criterion) {
    let runner = BenchmarkRunner::new().expect("Failed to create benchmark runner");
    let sieve = Sieve::new(100_000);

    c.bench_function("write_to_file(100000)", |b| {
        b.iter(|| runner.run_report(black_box(&sieve)).expect("Failed to write report"))
    });
}

criterion_group!(benches, bench_sieve, bench_render, bench_write_to_file);
criterion_main!(benches);
