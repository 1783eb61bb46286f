//! # Ordered Parallel Prefix Benchmarks
//!
//! Measures `range(0, N).parallel().prefix_sum()` - the three-phase chunked
//! scan whose output is identical to the sequential running total.
//!
//! Two variants per size:
//! - `parallel_ordered` - full pipeline cost, executor built per invocation
//! - `parallel_ordered_warm` - executor reused across invocations, isolating
//!   scan cost from pool setup

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use parascan::{auto_detect, EngineConfig, IntStream};

use super::SIZES;

pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix/ordered");

    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("parallel_ordered", n), &n, |b, &n| {
            b.iter(|| {
                IntStream::range(0, black_box(n))
                    .parallel()
                    .prefix_sum()
                    .to_vec()
                    .expect("ordered scan failed")
            });
        });
    }

    let executor = auto_detect(&EngineConfig::default()).expect("no backend available");
    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(
            BenchmarkId::new("parallel_ordered_warm", n),
            &n,
            |b, &n| {
                b.iter(|| {
                    IntStream::range(0, black_box(n))
                        .parallel()
                        .with_executor(executor.clone())
                        .prefix_sum()
                        .to_vec()
                        .expect("ordered scan failed")
                });
            },
        );
    }

    group.finish();
}
