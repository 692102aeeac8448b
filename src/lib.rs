//! # `search_bench` — Search Algorithm Benchmarking Engine
//!
//! Runs classical search strategies over a title-sorted corpus, measures
//! their wall-clock cost under controlled repetition, and reports measured
//! cost next to each strategy's declared complexity class. Sweeping the
//! corpus size turns single comparisons into cost-vs-size growth curves.
//!
//! ## Operations
//!
//! | Operation | Module | Description |
//! |-----------|--------|-------------|
//! | `StrategyId::run(corpus, query, mode)` | [`strategy`] | One of six searches: {linear, binary, jump} x {iterative, recursive} |
//! | `measure(f)` / `average(f, reps)` | [`timing`] | Monotonic timing of one invocation / mean over repetitions |
//! | `analyze(corpus, query, mode, reps)` | [`analyzer`] | All six strategies, one comparison table |
//! | `sweep(corpus, query, mode, target, policy, reps)` | [`sweep`] | Analyses over growing prefixes |
//!
//! Matching is case-insensitive substring containment on each record's key.
//!
//! ## Threading
//!
//! Measurement is strictly sequential on the calling thread. The engine
//! holds no shared state, so independent analyses may run on separate
//! threads, but doing so perturbs the timings each one reports.
//!
//! ## Example
//!
//! ```
//! use search_bench::analyzer::analyze;
//! use search_bench::common::corpus::{Corpus, Query};
//! use search_bench::strategy::{MatchMode, StrategyId};
//!
//! let corpus = Corpus::sorted(vec![
//!     "Foxtrot", "Alpha", "Bravo Two", "Charlie", "Delta", "Bravo", "Echo",
//! ]);
//! let table = analyze(corpus.view(), &Query::new("bravo"), MatchMode::All, 5)?;
//!
//! for row in &table.rows {
//!     println!(
//!         "{:<18} {:<12} {:.9}s {} matches",
//!         row.strategy, row.complexity, row.mean_seconds(), row.match_count
//!     );
//! }
//! assert_eq!(table.results, vec![&"Bravo", &"Bravo Two"]);
//! assert_eq!(table.row(StrategyId::JumpIterative).unwrap().match_count, 2);
//! # Ok::<(), search_bench::error::BenchError>(())
//! ```

pub mod analyzer;
pub mod common;
pub mod config;
pub mod error;
pub mod strategy;
pub mod sweep;
pub mod timing;

pub use analyzer::{analyze, ComparisonTable, StrategyRow};
pub use common::corpus::{Corpus, CorpusView, Query, Record};
pub use error::{BenchError, Result};
pub use strategy::{MatchMode, StrategyId};
pub use sweep::{sweep, IntervalPolicy, SweepPoint, SweepReport};
