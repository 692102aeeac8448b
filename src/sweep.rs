// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Interval sweep: cost-vs-size growth curves from a single corpus.
//!
//! The sweep truncates the corpus to prefixes of increasing size and runs
//! the comparative analyzer on each prefix. Sizes step by `interval` from
//! `interval` up to `target_size`; when `target_size` is not a multiple of
//! `interval`, one final point uses exactly `target_size` records. A sweep
//! therefore always produces `ceil(target_size / interval)` points.
//!
//! ```text
//! target_size = 95, interval = 10
//! sizes: 10 20 30 40 50 60 70 80 90 95
//! ```
//!
//! # Intervals
//!
//! [`IntervalPolicy::Adaptive`] picks finer intervals for smaller targets,
//! trading curve resolution against total wall time (points x strategies x
//! repetitions):
//!
//! | target size | interval |
//! |-------------|----------|
//! | <= 10 | 1 |
//! | <= 20 | 2 |
//! | <= 300 | 10 |
//! | <= 500 | 20 |
//! | <= 1500 | 30 |
//! | > 1500 | 50 |
//!
//! # Cost and cancellation
//!
//! A sweep with interval 1 over a large corpus is O(size / interval x size)
//! work, dominated by the linear scans. Nothing inside the engine bounds it:
//! callers bound `target_size` and `repetitions`. [`Sweep`] is a lazy
//! iterator that measures one point per `next()`, so a caller that stops
//! iterating stops the sweep at point granularity.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analyzer::{compare, StrategyRow};
use crate::common::corpus::{CorpusView, Query};
use crate::config::SweepOptions;
use crate::error::{check_repetitions, BenchError, Result};
use crate::strategy::{MatchMode, StrategyId};
use crate::timing::{Clock, MonotonicClock};

/// How the sweep chooses its interval from the target size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalPolicy {
    /// Always use this interval. Must be >= 1.
    Fixed(usize),
    /// Size-dependent interval, see [`adaptive_interval`].
    #[default]
    Adaptive,
}

impl IntervalPolicy {
    /// Resolves the interval for a sweep up to `target_size`.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidInterval`] for `Fixed(0)`.
    pub const fn interval_for(self, target_size: usize) -> Result<usize> {
        match self {
            Self::Fixed(0) => Err(BenchError::InvalidInterval),
            Self::Fixed(interval) => Ok(interval),
            Self::Adaptive => Ok(adaptive_interval(target_size)),
        }
    }
}

/// Interval used by [`IntervalPolicy::Adaptive`].
#[must_use]
pub const fn adaptive_interval(target_size: usize) -> usize {
    match target_size {
        0..=10 => 1,
        11..=20 => 2,
        21..=300 => 10,
        301..=500 => 20,
        501..=1500 => 30,
        _ => 50,
    }
}

/// Prefix sizes visited by a sweep: `interval, 2*interval, ...`, capped at
/// the target, which is always the last size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepSizes {
    emitted: usize,
    interval: usize,
    target_size: usize,
}

impl SweepSizes {
    /// Sizes for a sweep up to `target_size`. An interval of zero is treated
    /// as one.
    #[must_use]
    pub fn new(target_size: usize, interval: usize) -> Self {
        Self {
            emitted: 0,
            interval: interval.max(1),
            target_size,
        }
    }
}

impl Iterator for SweepSizes {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.emitted >= self.target_size {
            return None;
        }
        self.emitted = self
            .emitted
            .saturating_add(self.interval)
            .min(self.target_size);
        Some(self.emitted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.target_size - self.emitted).div_ceil(self.interval);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SweepSizes {}

/// Measurements for one prefix size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepPoint {
    /// Number of records in the prefix.
    pub corpus_size: usize,
    /// One row per strategy, in [`StrategyId::ALL`] order.
    pub rows: Vec<StrategyRow>,
}

impl SweepPoint {
    /// Row for the given strategy.
    #[must_use]
    pub fn row(&self, strategy: StrategyId) -> Option<&StrategyRow> {
        self.rows.iter().find(|row| row.strategy == strategy)
    }
}

/// A completed sweep and the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// The query as supplied by the caller.
    pub query: String,
    /// Match mode every strategy ran with.
    pub match_mode: MatchMode,
    /// Repetitions averaged per strategy per point.
    pub repetitions: u32,
    /// Length of the full corpus the prefixes were cut from.
    pub total_data: usize,
    /// Size of the last prefix.
    pub target_size: usize,
    /// Resolved interval between prefix sizes.
    pub interval: usize,
    /// Points in increasing size order.
    pub points: Vec<SweepPoint>,
}

impl SweepReport {
    /// Number of points measured.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Prefix sizes, the x-axis of every curve.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.corpus_size).collect()
    }

    /// Mean seconds per point for one strategy.
    #[must_use]
    pub fn series(&self, strategy: StrategyId) -> Vec<f64> {
        self.points
            .iter()
            .filter_map(|p| p.row(strategy))
            .map(StrategyRow::mean_seconds)
            .collect()
    }
}

/// Lazy sweep: measures one [`SweepPoint`] per call to `next()`.
#[derive(Debug)]
pub struct Sweep<'a, 'q, R, C = MonotonicClock> {
    clock: C,
    corpus: CorpusView<'a, R>,
    query: &'q Query,
    mode: MatchMode,
    repetitions: NonZeroU32,
    interval: usize,
    sizes: SweepSizes,
}

impl<'a, 'q, R> Sweep<'a, 'q, R> {
    /// Validates the parameters and prepares a sweep on the monotonic clock.
    ///
    /// Nothing is measured until the iterator is advanced.
    ///
    /// # Errors
    ///
    /// - [`BenchError::InvalidRepetitionCount`] if `repetitions` is zero.
    /// - [`BenchError::InvalidInterval`] for `IntervalPolicy::Fixed(0)`.
    /// - [`BenchError::TargetSizeExceedsCorpus`] if `target_size` is larger
    ///   than the corpus.
    pub fn new(
        corpus: CorpusView<'a, R>,
        query: &'q Query,
        mode: MatchMode,
        target_size: usize,
        policy: IntervalPolicy,
        repetitions: u32,
    ) -> Result<Self> {
        Self::with_clock(MonotonicClock, corpus, query, mode, target_size, policy, repetitions)
    }
}

impl<'a, 'q, R, C: Clock> Sweep<'a, 'q, R, C> {
    /// [`Sweep::new`] on the given clock.
    pub fn with_clock(
        clock: C,
        corpus: CorpusView<'a, R>,
        query: &'q Query,
        mode: MatchMode,
        target_size: usize,
        policy: IntervalPolicy,
        repetitions: u32,
    ) -> Result<Self> {
        let repetitions = check_repetitions(repetitions)?;
        let interval = policy.interval_for(target_size)?;
        if target_size > corpus.len() {
            return Err(BenchError::TargetSizeExceedsCorpus {
                target_size,
                corpus_len: corpus.len(),
            });
        }
        Ok(Self {
            clock,
            corpus,
            query,
            mode,
            repetitions,
            interval,
            sizes: SweepSizes::new(target_size, interval),
        })
    }

    /// Resolved interval between prefix sizes.
    #[must_use]
    pub const fn interval(&self) -> usize {
        self.interval
    }

    /// Measures the remaining points and assembles the report.
    #[must_use]
    pub fn into_report(self) -> SweepReport {
        let query = self.query.text().to_owned();
        let match_mode = self.mode;
        let repetitions = self.repetitions.get();
        let total_data = self.corpus.len();
        let target_size = self.sizes.target_size;
        let interval = self.interval;
        info!(
            query = %query,
            total_data,
            target_size,
            interval,
            points = self.sizes.len(),
            repetitions,
            "starting sweep"
        );
        let points: Vec<SweepPoint> = self.collect();
        SweepReport {
            query,
            match_mode,
            repetitions,
            total_data,
            target_size,
            interval,
            points,
        }
    }
}

impl<R, C: Clock> Iterator for Sweep<'_, '_, R, C> {
    type Item = SweepPoint;

    fn next(&mut self) -> Option<SweepPoint> {
        let size = self.sizes.next()?;
        let prefix = self.corpus.prefix(size);
        let table = compare(&self.clock, prefix, self.query, self.mode, self.repetitions);
        debug!(corpus_size = size, "measured sweep point");
        Some(SweepPoint {
            corpus_size: table.corpus_size,
            rows: table.rows,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}

impl<R, C: Clock> ExactSizeIterator for Sweep<'_, '_, R, C> {}

/// Runs a full sweep on the monotonic clock.
///
/// # Errors
///
/// See [`Sweep::new`]. All checks happen before the first measurement; no
/// partial sweep is ever returned.
///
/// # Examples
///
/// ```
/// use search_bench::common::corpus::{Corpus, Query};
/// use search_bench::strategy::MatchMode;
/// use search_bench::sweep::{sweep, IntervalPolicy};
///
/// let titles: Vec<String> = (0..100).map(|i| format!("Movie {i:03}")).collect();
/// let corpus = Corpus::sorted(titles);
/// let report = sweep(
///     corpus.view(),
///     &Query::new("movie 04"),
///     MatchMode::All,
///     95,
///     IntervalPolicy::Fixed(10),
///     1,
/// )
/// .unwrap();
/// assert_eq!(report.sizes(), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 95]);
/// ```
pub fn sweep<R>(
    corpus: CorpusView<'_, R>,
    query: &Query,
    mode: MatchMode,
    target_size: usize,
    policy: IntervalPolicy,
    repetitions: u32,
) -> Result<SweepReport> {
    Ok(Sweep::new(corpus, query, mode, target_size, policy, repetitions)?.into_report())
}

/// [`sweep`] with mode, repetitions and interval policy taken from `options`.
pub fn sweep_with_options<R>(
    corpus: CorpusView<'_, R>,
    query: &Query,
    target_size: usize,
    options: &SweepOptions,
) -> Result<SweepReport> {
    sweep(
        corpus,
        query,
        options.match_mode,
        target_size,
        options.interval,
        options.repetitions,
    )
}
