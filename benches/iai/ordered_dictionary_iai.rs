//! IAI-Callgrind benchmark for OrderedDictionary.
//!
//! Measures instruction counts for bulk construction and for front
//! insertion, which reindexes every trailing entry.

use extended_collections::dictionary::OrderedDictionary;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;

// Setup functions for different data sizes
fn setup_pairs_100() -> Vec<(u32, u32)> {
    (0..100).map(|index| (index, index)).collect()
}

fn setup_pairs_10000() -> Vec<(u32, u32)> {
    (0..10_000).map(|index| (index, index)).collect()
}

fn setup_dictionary_100() -> OrderedDictionary<u32, u32> {
    OrderedDictionary::try_from_pairs(setup_pairs_100()).unwrap_or_default()
}

fn setup_dictionary_10000() -> OrderedDictionary<u32, u32> {
    OrderedDictionary::try_from_pairs(setup_pairs_10000()).unwrap_or_default()
}

// try_from_pairs benchmarks
#[library_benchmark]
#[bench::with_setup(setup_pairs_100())]
fn try_from_pairs_100(pairs: Vec<(u32, u32)>) -> Option<OrderedDictionary<u32, u32>> {
    black_box(OrderedDictionary::try_from_pairs(black_box(pairs)).ok())
}

#[library_benchmark]
#[bench::with_setup(setup_pairs_10000())]
fn try_from_pairs_10000(pairs: Vec<(u32, u32)>) -> Option<OrderedDictionary<u32, u32>> {
    black_box(OrderedDictionary::try_from_pairs(black_box(pairs)).ok())
}

// insert_at(0) benchmarks
#[library_benchmark]
#[bench::with_setup(setup_dictionary_100())]
fn insert_at_front_100(mut dictionary: OrderedDictionary<u32, u32>) -> OrderedDictionary<u32, u32> {
    black_box(dictionary.insert_at(0, black_box(u32::MAX), black_box(0))).ok();
    dictionary
}

#[library_benchmark]
#[bench::with_setup(setup_dictionary_10000())]
fn insert_at_front_10000(
    mut dictionary: OrderedDictionary<u32, u32>,
) -> OrderedDictionary<u32, u32> {
    black_box(dictionary.insert_at(0, black_box(u32::MAX), black_box(0))).ok();
    dictionary
}

library_benchmark_group!(
    name = ordered_dictionary_group;
    benchmarks =
        try_from_pairs_100, try_from_pairs_10000,
        insert_at_front_100, insert_at_front_10000
);

main!(library_benchmark_groups = ordered_dictionary_group);
