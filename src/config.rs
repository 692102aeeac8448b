// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Run options for analyses and sweeps.
//!
//! Both option structs deserialize with `#[serde(default)]`, so callers can
//! load partial settings from any serde format and get the defaults for
//! anything left out.

use serde::{Deserialize, Serialize};

use crate::error::{check_repetitions, Result};
use crate::strategy::MatchMode;
use crate::sweep::IntervalPolicy;

/// Options for a single comparative analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Whether strategies stop at the first match.
    pub match_mode: MatchMode,
    /// Timed repetitions per strategy. Must be >= 1.
    pub repetitions: u32,
}

impl AnalysisOptions {
    /// Default repetitions for a one-off analysis.
    pub const DEFAULT_REPETITIONS: u32 = 5;

    /// Checks the options without running anything.
    pub fn validate(&self) -> Result<()> {
        check_repetitions(self.repetitions).map(drop)
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::All,
            repetitions: Self::DEFAULT_REPETITIONS,
        }
    }
}

/// Options for an interval sweep.
///
/// Sweeps default to fewer repetitions than single analyses because every
/// point multiplies the cost by six strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    /// Whether strategies stop at the first match.
    pub match_mode: MatchMode,
    /// Timed repetitions per strategy per point. Must be >= 1.
    pub repetitions: u32,
    /// How the interval between prefix sizes is chosen.
    pub interval: IntervalPolicy,
}

impl SweepOptions {
    /// Default repetitions per sweep point.
    pub const DEFAULT_REPETITIONS: u32 = 2;

    /// Checks the options without running anything.
    ///
    /// The target size is checked against the corpus only when the sweep
    /// starts.
    pub fn validate(&self) -> Result<()> {
        check_repetitions(self.repetitions)?;
        self.interval.interval_for(0).map(drop)
    }
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::All,
            repetitions: Self::DEFAULT_REPETITIONS,
            interval: IntervalPolicy::Adaptive,
        }
    }
}
