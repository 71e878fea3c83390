//! Criterion micro-benchmarks for append throughput under each growth
//! policy. The geometric policy should scale roughly linearly with N;
//! the exact policy reallocates on every growing push and degrades
//! quadratically — the comparison makes the amortization visible.

use bytevec::{GrowthPolicy, RawArray};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for n in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("geometric", n), &n, |b, &n| {
            b.iter(|| black_box(bytevec_bench::filled_raw(n, GrowthPolicy::Geometric)));
        });
        // Exact growth is quadratic; keep the sizes it sees small.
        if n <= 10_000 {
            group.bench_with_input(BenchmarkId::new("exact", n), &n, |b, &n| {
                b.iter(|| black_box(bytevec_bench::filled_raw(n, GrowthPolicy::Exact)));
            });
        }
    }
    group.finish();
}

fn bench_push_preallocated(c: &mut Criterion) {
    c.bench_function("push/preallocated_100k", |b| {
        b.iter(|| {
            let mut arr = RawArray::with_capacity(100_000, 4).unwrap();
            for v in 0..100_000u32 {
                arr.push(&v.to_le_bytes()).unwrap();
            }
            black_box(arr)
        });
    });
}

criterion_group!(benches, bench_push, bench_push_preallocated);
criterion_main!(benches);
