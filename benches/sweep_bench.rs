// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Benchmarks for full interval sweeps.
//!
//! Sweep cost is points x strategies x repetitions, with linear scans
//! dominating. These runs make the effect of the adaptive interval table
//! visible: finer intervals at small targets, coarser at large ones.
#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use search_bench::common::corpus::{Corpus, Query};
use search_bench::strategy::MatchMode;
use search_bench::sweep::{sweep, IntervalPolicy};
use std::hint::black_box;

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    group.sample_size(20);

    let corpus = Corpus::sorted((0..5_000).map(|i| format!("Film {i:05}")).collect::<Vec<_>>());
    let query = Query::new("film 01");

    for &target in &[10_usize, 300, 1_500, 5_000] {
        for (label, policy) in [
            ("adaptive", IntervalPolicy::Adaptive),
            ("fixed_10", IntervalPolicy::Fixed(10)),
        ] {
            group.bench_with_input(BenchmarkId::new(label, target), &target, |b, &target| {
                b.iter(|| {
                    sweep(
                        corpus.view(),
                        black_box(&query),
                        MatchMode::All,
                        target,
                        policy,
                        2,
                    )
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
