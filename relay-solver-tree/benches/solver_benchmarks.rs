//! Criterion benchmarks for the tree solver.
//!
//! Measures solve time across input sizes and compares against exhaustive
//! enumeration where that is still feasible.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package relay-solver-tree
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use relay_core::Solver;
use relay_solver_permutation::PermutationSolver;
use relay_solver_tree::TreeSolver;


use bench_support::{BENCHMARK_SEED, generate_bookings};

/// Input sizes for the tree solver.
const TREE_SIZES: &[usize] = &[6, 9, 12];

/// Input sizes small enough for exhaustive enumeration.
const PERMUTATION_SIZES: &[usize] = &[6, 8];

fn bench_tree_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_solve_time");
    group.measurement_time(Duration::from_secs(10));

    let solver = TreeSolver::new();
    for &size in TREE_SIZES {
        let bookings = generate_bookings(size, BENCHMARK_SEED);
        group.throughput(Throughput::Elements(u64::try_from(size).unwrap_or(u64::MAX)));
        group.bench_with_input(BenchmarkId::new("bookings", size), &bookings, |b, input| {
            b.iter(|| black_box(solver.solve(input)));
        });
    }

    group.finish();
}

fn bench_against_permutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_vs_permutation");
    group.sample_size(20);

    let tree = TreeSolver::new();
    let permutation = PermutationSolver::new();
    for &size in PERMUTATION_SIZES {
        let bookings = generate_bookings(size, BENCHMARK_SEED);
        group.bench_with_input(BenchmarkId::new("tree", size), &bookings, |b, input| {
            b.iter(|| black_box(tree.solve(input)));
        });
        group.bench_with_input(
            BenchmarkId::new("permutation", size),
            &bookings,
            |b, input| {
                b.iter(|| black_box(permutation.solve(input)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tree_solver, bench_against_permutation);
criterion_main!(benches);
