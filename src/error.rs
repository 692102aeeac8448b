// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Error taxonomy for the benchmarking engine.
//!
//! Every error is raised synchronously, before any measurement begins. The
//! engine never retries: re-running a benchmark with different parameters is
//! a different measurement, so recovery belongs to the caller.
//!
//! An unsorted corpus is deliberately *not* an error. Binary and jump search
//! assume ascending order by folded key; verifying that on every call would
//! add an O(n) pass to every benchmark. Violations produce incomplete but
//! in-bounds results.

use std::num::NonZeroU32;

/// Errors returned by the timing harness, analyzer and sweep controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BenchError {
    /// Repetition count was zero. Averages need at least one sample.
    #[error("repetitions must be >= 1, got {repetitions}")]
    InvalidRepetitionCount {
        /// The rejected repetition count.
        repetitions: u32,
    },

    /// A sweep asked for more records than the corpus holds.
    #[error("target size {target_size} exceeds corpus length {corpus_len}")]
    TargetSizeExceedsCorpus {
        /// Requested prefix size of the final sweep point.
        target_size: usize,
        /// Number of records actually available.
        corpus_len: usize,
    },

    /// A fixed interval policy of zero, which would never advance the sweep.
    #[error("sweep interval must be >= 1")]
    InvalidInterval,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Rejects a repetition count of zero.
pub(crate) fn check_repetitions(repetitions: u32) -> Result<NonZeroU32> {
    NonZeroU32::new(repetitions).ok_or(BenchError::InvalidRepetitionCount { repetitions })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_repetitions_rejected() {
        assert_eq!(
            check_repetitions(0),
            Err(BenchError::InvalidRepetitionCount { repetitions: 0 })
        );
    }

    #[test]
    fn test_positive_repetitions_accepted() {
        assert_eq!(check_repetitions(1).map(NonZeroU32::get), Ok(1));
        assert_eq!(check_repetitions(u32::MAX).map(NonZeroU32::get), Ok(u32::MAX));
    }

    #[test]
    fn test_display_messages() {
        let err = BenchError::TargetSizeExceedsCorpus {
            target_size: 120,
            corpus_len: 100,
        };
        assert_eq!(err.to_string(), "target size 120 exceeds corpus length 100");
        assert_eq!(
            BenchError::InvalidRepetitionCount { repetitions: 0 }.to_string(),
            "repetitions must be >= 1, got 0"
        );
        assert_eq!(
            BenchError::InvalidInterval.to_string(),
            "sweep interval must be >= 1"
        );
    }
}
