//! Benchmark for control structures: Maybe and Attempt.
//!
//! Measures the cost of deferred, memoized evaluation and of chaining.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use functional_utils::control::{Attempt, Failure, Maybe};
use std::hint::black_box;

// =============================================================================
// Attempt Benchmarks
// =============================================================================

fn benchmark_attempt_force(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("attempt_force");

    // Benchmark the first evaluation (cold path)
    group.bench_function("initial_evaluation", |bencher| {
        bencher.iter(|| {
            let attempt = Attempt::of(|| (0..100).sum::<i32>());
            black_box(attempt.into_result())
        });
    });

    // Benchmark cached access (hot path)
    let attempt = Attempt::of(|| (0..1000).sum::<i32>());
    let _ = attempt.is_success();
    group.bench_function("cached_access", |bencher| {
        bencher.iter(|| black_box(attempt.read().map(|value| *value)));
    });

    // Compare with a precomputed attempt (baseline)
    group.bench_function("succeeded_baseline", |bencher| {
        bencher.iter(|| black_box(Attempt::succeeded(black_box(42)).into_result()));
    });

    group.finish();
}

fn benchmark_attempt_failure(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("attempt_failure");

    group.bench_function("err_result", |bencher| {
        bencher.iter(|| {
            let attempt = Attempt::of_result(|| black_box("nan").parse::<i32>());
            black_box(attempt.is_failure())
        });
    });

    group.bench_function("failed_message", |bencher| {
        bencher.iter(|| {
            let attempt: Attempt<i32> = Attempt::failed(Failure::from_message("failed"));
            black_box(attempt.is_failure())
        });
    });

    group.finish();
}

fn benchmark_attempt_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("attempt_bind_chain");

    for depth in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut attempt = Attempt::succeeded(0_u64);
                for _ in 0..depth {
                    attempt = attempt.bind(|n| Attempt::of(move || n + 1));
                }
                black_box(attempt.into_result())
            });
        });
    }

    group.finish();
}

fn benchmark_attempt_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("attempt_map_chain");

    for depth in [10, 1000, 100_000] {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut attempt = Attempt::of(|| 0_u64);
                for _ in 0..depth {
                    attempt = attempt.map(|n| n + 1);
                }
                black_box(attempt.into_result())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Maybe Benchmarks
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    let halve = |n: u64| if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() };

    group.bench_function("bind_until_odd", |bencher| {
        bencher.iter(|| {
            let mut current = Maybe::some(black_box(1_u64 << 40));
            for _ in 0..64 {
                current = current.bind(halve);
            }
            black_box(current)
        });
    });

    group.bench_function("lift2", |bencher| {
        bencher.iter(|| {
            black_box(Maybe::lift2(
                |a: u64, b: u64| a * b,
                Maybe::some(black_box(6)),
                Maybe::some(black_box(7)),
            ))
        });
    });

    // Compare with Option (baseline)
    group.bench_function("option_baseline", |bencher| {
        bencher.iter(|| {
            let mut current = Some(black_box(1_u64 << 40));
            for _ in 0..64 {
                current = current.and_then(|n| if n % 2 == 0 { Some(n / 2) } else { None });
            }
            black_box(current)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_attempt_force,
    benchmark_attempt_failure,
    benchmark_attempt_bind_chain,
    benchmark_attempt_map_chain,
    benchmark_maybe_chain
);

criterion_main!(benches);
