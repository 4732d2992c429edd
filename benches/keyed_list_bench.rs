//! KeyedList construction benchmark.
//!
//! Compares `try_from_values` against repeated `add`, and derived-key lookup
//! against a linear scan of a `Vec`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use extended_collections::keyed::KeyedList;
use std::hint::black_box;

const SIZES: [u64; 3] = [100, 1_000, 10_000];

fn identifier(value: &(u64, u64)) -> u64 {
    value.0
}

fn generate_records(size: u64) -> Vec<(u64, u64)> {
    (0..size).map(|index| (index, index * 3)).collect()
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyed_list_construction");

    for size in SIZES {
        let records = generate_records(size);

        group.bench_with_input(
            BenchmarkId::new("try_from_values", size),
            &records,
            |bencher, records| {
                bencher.iter(|| {
                    black_box(KeyedList::try_from_values(
                        identifier,
                        black_box(records.iter().copied()),
                    ))
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("add", size), &records, |bencher, records| {
            bencher.iter(|| {
                let mut list = KeyedList::with_key_selector(identifier);
                for record in records {
                    black_box(list.add(black_box(*record))).ok();
                }
                black_box(list)
            });
        });
    }

    group.finish();
}

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyed_list_lookup");

    for size in SIZES {
        let records = generate_records(size);
        let list = KeyedList::try_from_values(identifier, records.iter().copied())
            .unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("KeyedList", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in 0..size {
                    black_box(list.try_get(black_box(&key)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in 0..size {
                    black_box(records.iter().find(|record| record.0 == black_box(key)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_construction, benchmark_lookup);

criterion_main!(benches);
