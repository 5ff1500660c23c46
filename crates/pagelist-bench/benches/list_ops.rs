//! Criterion micro-benchmarks for push, remove/push churn, and traversal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pagelist::PagedFreeList;
use pagelist_bench::{churn, filled_list, sum_values};

/// Benchmark: push 10K values into a fresh list (includes page allocation).
fn bench_push_10k(c: &mut Criterion) {
    c.bench_function("push_10k", |b| {
        b.iter(|| {
            let mut list = PagedFreeList::new(1024);
            for i in 0..10_000u64 {
                let _ = black_box(list.push(i));
            }
            list
        });
    });
}

/// Benchmark: push 10K values into a list whose pages are already reserved.
fn bench_push_10k_reserved(c: &mut Criterion) {
    c.bench_function("push_10k_reserved", |b| {
        b.iter_batched(
            || {
                let mut list = PagedFreeList::new(1024);
                list.reserve(10_000);
                list
            },
            |mut list| {
                for i in 0..10_000u64 {
                    let _ = black_box(list.push(i));
                }
                list
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: remove and re-push every 4th value of a 10K list.
fn bench_churn_10k(c: &mut Criterion) {
    let (mut list, mut handles) = filled_list(1024, 10_000);
    c.bench_function("churn_10k_stride4", |b| {
        b.iter(|| black_box(churn(&mut list, &mut handles, 4)));
    });
}

/// Benchmark: full `for_each` traversal of a 10K list with every 3rd slot free.
fn bench_for_each_sparse_10k(c: &mut Criterion) {
    let (mut list, handles) = filled_list(1024, 10_000);
    for h in handles.into_iter().step_by(3) {
        let _ = list.remove(h);
    }
    c.bench_function("for_each_sparse_10k", |b| {
        b.iter(|| black_box(sum_values(&list)));
    });
}

criterion_group!(
    benches,
    bench_push_10k,
    bench_push_10k_reserved,
    bench_churn_10k,
    bench_for_each_sparse_10k
);
criterion_main!(benches);
