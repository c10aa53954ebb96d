use container::collections::BinHeap;
use container::Natural;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn scrambled(n: u64) -> Vec<u64> {
    // Multiplicative hashing gives a fixed, well-spread permutation.
    (0..n).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 16).collect()
}

fn bench_binary_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap");
    let data = scrambled(1000);

    group.bench_function("std_binary_heap_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for &x in &data {
                heap.push(Reverse(black_box(x)));
            }
        });
    });

    group.bench_function("bin_heap_push", |b| {
        b.iter(|| {
            let mut heap = BinHeap::new(Natural);
            for &x in &data {
                heap.push(black_box(x));
            }
        });
    });

    group.bench_function("bin_heap_push_closure_cmp", |b| {
        b.iter(|| {
            let mut heap = BinHeap::new(|a: &u64, b: &u64| a.cmp(b));
            for &x in &data {
                heap.push(black_box(x));
            }
        });
    });

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for &x in &data {
                heap.push(Reverse(x));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("bin_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinHeap::new(Natural);
            for &x in &data {
                heap.push(x);
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.finish();
}

fn bench_bulk_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap_init");

    for n in [1_000_u64, 100_000] {
        let data = scrambled(n);

        group.bench_with_input(BenchmarkId::new("std_from_vec", n), &data, |b, data| {
            b.iter(|| {
                let v: Vec<Reverse<u64>> = data.iter().copied().map(Reverse).collect();
                black_box(BinaryHeap::from(v))
            });
        });

        group.bench_with_input(BenchmarkId::new("bin_heap_init", n), &data, |b, data| {
            let mut heap = BinHeap::new(Natural);
            b.iter(|| {
                heap.init(data.iter().copied());
                black_box(heap.peek().copied())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_binary_heap, bench_bulk_init);
criterion_main!(benches);
