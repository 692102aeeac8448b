// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Comparative analyzer: every strategy against one corpus/query pair.
//!
//! Runs the six strategies through the timing harness in
//! [`StrategyId::ALL`] order and folds their aggregates into an immutable
//! [`ComparisonTable`]. Each row carries the strategy's declared complexity
//! class alongside its measured mean duration and match count.
//!
//! The table also carries the full match set of
//! [`StrategyId::LinearIterative`], the exhaustive-scan reference, as the
//! authoritative result list for the caller.
//!
//! # Preconditions
//!
//! The corpus must already be sorted by folded key. The analyzer never sorts:
//! callers sort once (see [`Corpus::sorted`](crate::common::corpus::Corpus::sorted))
//! and analyze many times.

use std::num::NonZeroU32;
use std::time::Duration;

use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::common::corpus::{CorpusView, Query};
use crate::config::AnalysisOptions;
use crate::error::{check_repetitions, Result};
use crate::strategy::{Algorithm, ComplexityClass, Form, MatchMode, StrategyId};
use crate::timing::{average_checked, AggregateResult, Clock, MonotonicClock};

/// Strategy whose match set is returned as the authoritative results.
pub const REFERENCE_STRATEGY: StrategyId = StrategyId::LinearIterative;

/// Measured cost of one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyRow {
    /// Which strategy was measured.
    pub strategy: StrategyId,
    /// Declared, never measured.
    pub complexity: ComplexityClass,
    /// Mean wall-clock duration, serialized as seconds.
    #[serde(rename = "execution_time", serialize_with = "serialize_seconds")]
    pub mean: Duration,
    /// Records returned by the final repetition.
    pub match_count: usize,
}

impl StrategyRow {
    /// Builds a row from a strategy's aggregate.
    #[must_use]
    pub fn new<T>(strategy: StrategyId, aggregate: &AggregateResult<T>) -> Self {
        Self {
            strategy,
            complexity: strategy.complexity(),
            mean: aggregate.mean,
            match_count: aggregate.match_count(),
        }
    }

    /// Mean duration in seconds.
    #[must_use]
    pub fn mean_seconds(&self) -> f64 {
        self.mean.as_secs_f64()
    }
}

/// Iterative and recursive rows of one algorithm, side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmPair<'t> {
    /// The algorithm both rows implement.
    pub algorithm: Algorithm,
    /// Declared complexity class shared by both forms.
    pub complexity: ComplexityClass,
    /// Loop-based form.
    pub iterative: &'t StrategyRow,
    /// Self-calling form.
    pub recursive: &'t StrategyRow,
}

/// Result of one [`analyze`] call.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable<'a, R> {
    /// The query as supplied by the caller.
    pub query: String,
    /// Match mode every strategy ran with.
    pub match_mode: MatchMode,
    /// Repetitions averaged per strategy.
    pub repetitions: u32,
    /// Number of records searched.
    pub corpus_size: usize,
    /// One row per strategy, in [`StrategyId::ALL`] order.
    pub rows: Vec<StrategyRow>,
    /// Match set of [`REFERENCE_STRATEGY`].
    pub results: Vec<&'a R>,
}

impl<R> ComparisonTable<'_, R> {
    /// Row for the given strategy.
    #[must_use]
    pub fn row(&self, strategy: StrategyId) -> Option<&StrategyRow> {
        self.rows.iter().find(|row| row.strategy == strategy)
    }

    /// Rows grouped per algorithm as `{iterative, recursive}` pairs.
    pub fn by_algorithm(&self) -> impl Iterator<Item = AlgorithmPair<'_>> + '_ {
        Algorithm::ALL.into_iter().filter_map(move |algorithm| {
            Some(AlgorithmPair {
                algorithm,
                complexity: algorithm.complexity(),
                iterative: self.row(StrategyId::new(algorithm, Form::Iterative))?,
                recursive: self.row(StrategyId::new(algorithm, Form::Recursive))?,
            })
        })
    }
}

/// Benchmarks every strategy on the monotonic clock.
///
/// # Errors
///
/// [`BenchError::InvalidRepetitionCount`](crate::error::BenchError::InvalidRepetitionCount)
/// if `repetitions` is zero. No strategy runs in that case.
///
/// # Examples
///
/// ```
/// use search_bench::analyzer::analyze;
/// use search_bench::common::corpus::{Corpus, Query};
/// use search_bench::strategy::{MatchMode, StrategyId};
///
/// let corpus = Corpus::sorted(vec!["Echo", "Alpha", "Bravo Two", "Bravo"]);
/// let table = analyze(corpus.view(), &Query::new("bravo"), MatchMode::All, 3).unwrap();
/// assert_eq!(table.rows.len(), 6);
/// assert_eq!(table.results, vec![&"Bravo", &"Bravo Two"]);
/// assert_eq!(table.row(StrategyId::JumpRecursive).unwrap().match_count, 2);
/// ```
pub fn analyze<'a, R>(
    corpus: CorpusView<'a, R>,
    query: &Query,
    mode: MatchMode,
    repetitions: u32,
) -> Result<ComparisonTable<'a, R>> {
    analyze_with(&MonotonicClock, corpus, query, mode, repetitions)
}

/// [`analyze`] with match mode and repetitions taken from `options`.
pub fn analyze_with_options<'a, R>(
    corpus: CorpusView<'a, R>,
    query: &Query,
    options: &AnalysisOptions,
) -> Result<ComparisonTable<'a, R>> {
    analyze(corpus, query, options.match_mode, options.repetitions)
}

/// [`analyze`] on the given clock.
pub fn analyze_with<'a, C, R>(
    clock: &C,
    corpus: CorpusView<'a, R>,
    query: &Query,
    mode: MatchMode,
    repetitions: u32,
) -> Result<ComparisonTable<'a, R>>
where
    C: Clock,
{
    let repetitions = check_repetitions(repetitions)?;
    info!(
        corpus_size = corpus.len(),
        query = query.text(),
        ?mode,
        repetitions = repetitions.get(),
        "analyzing search strategies"
    );
    Ok(compare(clock, corpus, query, mode, repetitions))
}

/// Runs the six strategies and folds their aggregates into a table.
pub(crate) fn compare<'a, C, R>(
    clock: &C,
    corpus: CorpusView<'a, R>,
    query: &Query,
    mode: MatchMode,
    repetitions: NonZeroU32,
) -> ComparisonTable<'a, R>
where
    C: Clock,
{
    let mut rows = Vec::with_capacity(StrategyId::ALL.len());
    let mut results = Vec::new();

    for strategy in StrategyId::ALL {
        let aggregate = average_checked(clock, || strategy.run(corpus, query, mode), repetitions);
        debug!(
            %strategy,
            mean_seconds = aggregate.mean_seconds(),
            match_count = aggregate.match_count(),
            "measured strategy"
        );
        rows.push(StrategyRow::new(strategy, &aggregate));
        if strategy == REFERENCE_STRATEGY {
            results = aggregate.output;
        }
    }

    ComparisonTable {
        query: query.text().to_owned(),
        match_mode: mode,
        repetitions: repetitions.get(),
        corpus_size: corpus.len(),
        rows,
        results,
    }
}

/// Serializes a duration as fractional seconds.
pub(crate) fn serialize_seconds<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}
