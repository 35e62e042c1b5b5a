//! IAI-Callgrind benchmark for the set algebra constructors.
//!
//! Measures instruction counts for union, intersection, difference and both
//! unique algorithms over overlapping integer sets.
//! Data sizes: 3 sets of 100 and 3 sets of 10000 elements.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;
use toolbox::set::Set;

/// Three sets of `size` elements, each shifted by a third of `size`.
fn setup_overlapping_sets(size: i32) -> Vec<Set<i32>> {
    (0..3)
        .map(|shift| {
            let start = shift * size / 3;
            (start..start + size).collect()
        })
        .collect()
}

fn setup_sets_100() -> Vec<Set<i32>> {
    setup_overlapping_sets(100)
}

fn setup_sets_10000() -> Vec<Set<i32>> {
    setup_overlapping_sets(10000)
}

// union_of benchmarks
#[library_benchmark]
#[bench::small(setup_sets_100())]
#[bench::large(setup_sets_10000())]
fn union_of(sets: Vec<Set<i32>>) -> Set<i32> {
    black_box(Set::union_of(black_box(&sets)))
}

// intersection_of benchmarks
#[library_benchmark]
#[bench::small(setup_sets_100())]
#[bench::large(setup_sets_10000())]
fn intersection_of(sets: Vec<Set<i32>>) -> Set<i32> {
    black_box(Set::intersection_of(black_box(&sets)))
}

// difference_of benchmarks
#[library_benchmark]
#[bench::small(setup_sets_100())]
#[bench::large(setup_sets_10000())]
fn difference_of(sets: Vec<Set<i32>>) -> Set<i32> {
    black_box(Set::difference_of(black_box(&sets)))
}

// unique_of benchmarks
#[library_benchmark]
#[bench::small(setup_sets_100())]
#[bench::large(setup_sets_10000())]
fn unique_of(sets: Vec<Set<i32>>) -> Set<i32> {
    black_box(Set::unique_of(black_box(&sets)))
}

// unique_of_pairwise benchmarks (baseline for comparison)
#[library_benchmark]
#[bench::small(setup_sets_100())]
#[bench::large(setup_sets_10000())]
fn unique_of_pairwise(sets: Vec<Set<i32>>) -> Set<i32> {
    black_box(Set::unique_of_pairwise(black_box(&sets)))
}

library_benchmark_group!(
    name = set_algebra_group;
    benchmarks = union_of, intersection_of, difference_of, unique_of, unique_of_pairwise
);

main!(library_benchmark_groups = set_algebra_group);
