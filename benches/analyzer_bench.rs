// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Benchmarks for `analyze()`: six strategies times the repetition count.
//!
//! The analyzer's own overhead (row assembly, reference result capture) should
//! be negligible next to the linear scans it runs.
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use search_bench::analyzer::analyze;
use search_bench::common::corpus::{Corpus, Query};
use search_bench::strategy::MatchMode;
use std::hint::black_box;

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for &n in &[100_usize, 1_000, 10_000, 100_000] {
        let corpus = Corpus::sorted((0..n).map(|i| format!("Movie {i:07}")).collect::<Vec<_>>());
        let query = Query::new(format!("movie {:07}", n / 3));
        group.throughput(Throughput::Elements(n as u64));
        for repetitions in [1_u32, 5] {
            group.bench_with_input(
                BenchmarkId::new(format!("reps_{repetitions}"), n),
                &repetitions,
                |b, &repetitions| {
                    b.iter(|| {
                        analyze(corpus.view(), black_box(&query), MatchMode::All, repetitions)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
