//! Benchmarks for the binary-search suite.

use algokit::search::{binary_search, median_of_sorted, search_rotated};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// ============================================================================
// binary_search Benchmarks
// ============================================================================

fn benchmark_binary_search(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("binary_search");

    for size in [1_000_i32, 100_000, 10_000_000] {
        let values: Vec<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("hit", size), &size, |bencher, &size| {
            bencher.iter(|| binary_search(black_box(&values), black_box(size - 1)));
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &size, |bencher, &size| {
            bencher.iter(|| binary_search(black_box(&values), black_box(size)));
        });
    }

    group.finish();
}

// ============================================================================
// search_rotated Benchmarks
// ============================================================================

fn benchmark_search_rotated(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("search_rotated");

    for size in [1_000_i32, 100_000, 10_000_000] {
        let mut values: Vec<i32> = (0..size).collect();
        values.rotate_left(values.len() / 3);

        group.bench_with_input(BenchmarkId::new("hit", size), &size, |bencher, _| {
            bencher.iter(|| search_rotated(black_box(&values), black_box(0)));
        });
    }

    group.finish();
}

// ============================================================================
// median_of_sorted Benchmarks
// ============================================================================

fn benchmark_median_of_sorted(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("median_of_sorted");

    for size in [1_000_i32, 100_000, 1_000_000] {
        let evens: Vec<i32> = (0..size).map(|value| value * 2).collect();
        let odds: Vec<i32> = (0..size).map(|value| value * 2 + 1).collect();

        group.bench_with_input(
            BenchmarkId::new("interleaved", size),
            &size,
            |bencher, _| {
                bencher.iter(|| median_of_sorted(black_box(&evens), black_box(&odds)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_binary_search,
    benchmark_search_rotated,
    benchmark_median_of_sorted,
);
criterion_main!(benches);
