//! Criterion benchmarks for append and positional-shift workloads.
//!
//! The append benchmark mirrors the classic timing driver for this array:
//! start at capacity 10 000 and append with a growth increment of 10 000.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dyn_int_array::DynamicArray;

const INITIAL_CAPACITY: usize = 10_000;
const GROW_BY: usize = 10_000;

fn bench_push_back_additive(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_additive");
    for &n in &[10_000usize, 100_000, 200_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut a = DynamicArray::create(INITIAL_CAPACITY).unwrap();
                for i in 0..n {
                    a.push_back(black_box(i as i32 * 2), GROW_BY).unwrap();
                }
                a
            })
        });
    }
    group.finish();
}

fn bench_push_std_vec(c: &mut Criterion) {
    c.bench_function("std_vec_push_200k", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(INITIAL_CAPACITY);
            for i in 0..200_000 {
                v.push(black_box(i * 2));
            }
            v
        })
    });
}

fn bench_insert_remove_front(c: &mut Criterion) {
    let base: Vec<i32> = (0..1_000).collect();
    c.bench_function("insert_remove_front_1k", |b| {
        b.iter(|| {
            let mut a = DynamicArray::try_from(&base[..]).unwrap();
            a.insert_at(0, black_box(-1), 16).unwrap();
            a.remove_from(black_box(0))
        })
    });
}

fn bench_find_last(c: &mut Criterion) {
    let values: Vec<i32> = (0..10_000).map(|i| i % 97).collect();
    let a = DynamicArray::try_from(&values[..]).unwrap();
    c.bench_function("find_10k", |b| b.iter(|| a.find(black_box(42))));
}

criterion_group!(
    benches,
    bench_push_back_additive,
    bench_push_std_vec,
    bench_insert_remove_front,
    bench_find_last
);
criterion_main!(benches);
