//! Benchmarks for the dynamic-programming suite.

use algokit::dp::{coin_change, edit_distance, longest_increasing_subsequence};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// ============================================================================
// Helpers
// ============================================================================

fn pseudo_random_values(count: usize) -> Vec<i32> {
    let mut state = 0x9e37_79b9_u64;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            (state >> 33) as i32
        })
        .collect()
}

fn repeated_word(length: usize) -> String {
    "abcdefgh".chars().cycle().take(length).collect()
}

// ============================================================================
// edit_distance Benchmarks
// ============================================================================

fn benchmark_edit_distance(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("edit_distance");

    for size in [64, 256, 1024] {
        let source = repeated_word(size);
        let target: String = source.chars().rev().collect();

        group.bench_with_input(
            BenchmarkId::new("reversed_word", size),
            &size,
            |bencher, _| {
                bencher.iter(|| edit_distance(black_box(&source), black_box(&target)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// longest_increasing_subsequence Benchmarks
// ============================================================================

fn benchmark_longest_increasing_subsequence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("longest_increasing_subsequence");

    for size in [1_000, 10_000, 100_000] {
        let values = pseudo_random_values(size);

        group.bench_with_input(
            BenchmarkId::new("random_values", size),
            &size,
            |bencher, _| {
                bencher.iter(|| longest_increasing_subsequence(black_box(&values)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// coin_change Benchmarks
// ============================================================================

fn benchmark_coin_change(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("coin_change");
    let coins = [186, 419, 83, 408];

    for amount in [1_000_u32, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("four_coins", amount),
            &amount,
            |bencher, &amount| {
                bencher.iter(|| coin_change(black_box(&coins), black_box(amount)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_edit_distance,
    benchmark_longest_increasing_subsequence,
    benchmark_coin_change,
);
criterion_main!(benches);
