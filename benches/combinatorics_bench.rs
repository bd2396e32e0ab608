//! Benchmark for the combinatorial generators.
//!
//! Measures full enumeration and first-element latency; the latter shows
//! that generators do not precompute their output.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazars::combinatorics::Selection;
use lazars::sequence::LazySequence;
use std::hint::black_box;

// =============================================================================
// Enumeration Benchmarks
// =============================================================================

fn benchmark_enumeration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("enumeration");
    let source = LazySequence::from_restartable_iter(0_u32..8);

    for selection in [
        Selection::RepeatedPermutation,
        Selection::Permutation,
        Selection::Combination,
        Selection::RepeatedCombination,
    ] {
        for size in [2_usize, 4] {
            group.bench_with_input(
                BenchmarkId::new(selection.name(), size),
                &size,
                |bencher, &size| {
                    let arrangements = source.arrangements(selection, size).unwrap();
                    bencher.iter(|| black_box(arrangements.count()));
                },
            );
        }
    }

    group.finish();
}

// =============================================================================
// Latency Benchmarks
// =============================================================================

fn benchmark_first_arrangement(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("first_arrangement");

    for length in [8_u32, 64, 512] {
        group.bench_with_input(
            BenchmarkId::new("permutation_of_4", length),
            &length,
            |bencher, &length| {
                let permutations = LazySequence::from_restartable_iter(0..length)
                    .permutation(4)
                    .unwrap();
                bencher.iter(|| black_box(permutations.first()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_enumeration, benchmark_first_arrangement);
criterion_main!(benches);
