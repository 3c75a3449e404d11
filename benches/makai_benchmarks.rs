//! Makai Router Benchmarks
//!
//! This module contains benchmarks for the trie and the path router,
//! implemented with the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

/// Benchmark the Molokai Radix Trie
fn bench_molokai_trie(c: &mut Criterion) {
    use makai_router_lib::data_structures::molokai_trie::Trie;

    let mut group = c.benchmark_group("molokai_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let keys = |n: usize| -> Vec<String> {
        (0..n).map(|i| format!("segment-{i:06}")).collect()
    };

    for size in [100, 1_000, 10_000] {
        let data = keys(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &data, |b, data| {
            b.iter(|| {
                let mut trie = Trie::new();
                for (i, key) in data.iter().enumerate() {
                    trie.insert(black_box(key), i);
                }
            });
        });
    }

    for size in [100, 1_000, 10_000] {
        let data = keys(size);
        let mut trie = Trie::new();
        for (i, key) in data.iter().enumerate() {
            trie.insert(key, i);
        }
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("find", size), &data, |b, data| {
            b.iter(|| {
                for key in data {
                    black_box(trie.find(black_box(key)));
                }
            });
        });
    }

    {
        let mut trie = Trie::new();
        for (i, key) in keys(10_000).iter().enumerate() {
            trie.insert(key, i);
        }
        group.bench_function("iterate_prefixed", |b| {
            b.iter(|| {
                let count = trie
                    .find_prefixed(black_box("segment-00"), trie.max_key_len_added())
                    .count();
                black_box(count)
            });
        });
    }

    group.finish();
}

/// Benchmark path registration and resolution
fn bench_path_router(c: &mut Criterion) {
    use makai_router_lib::routing::{MethodHandlers, PathRouter};

    let mut group = c.benchmark_group("path_router");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let patterns: Vec<String> = (0..200)
        .map(|i| format!("/api/v{}/resource-{}/<?>", i % 3, i))
        .collect();

    group.bench_function("register_200_routes", |b| {
        b.iter(|| {
            let mut router: PathRouter<usize> = PathRouter::new();
            for (i, pattern) in patterns.iter().enumerate() {
                router
                    .register(black_box(pattern), MethodHandlers::new().with_get(i))
                    .unwrap();
            }
            black_box(router)
        });
    });

    let mut router: PathRouter<usize> = PathRouter::new();
    for (i, pattern) in patterns.iter().enumerate() {
        router
            .register(pattern, MethodHandlers::new().with_get(i))
            .unwrap();
    }

    group.bench_function("resolve_literal_hit", |b| {
        b.iter(|| black_box(router.resolve(black_box("/api/v1/resource-100/12345"))));
    });

    group.bench_function("resolve_miss", |b| {
        b.iter(|| black_box(router.resolve(black_box("/api/v9/unknown/12345"))));
    });

    group.finish();
}

criterion_group!(benches, bench_molokai_trie, bench_path_router);
criterion_main!(benches);
