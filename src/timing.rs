// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Timing harness: wall-clock measurement of a single strategy invocation.
//!
//! [`measure`] takes a monotonic timestamp immediately before and after the
//! invocation. [`average`] repeats `measure` sequentially and reports the
//! arithmetic mean with no outlier rejection. Its output is the result set
//! of the **last** repetition only: the strategies are pure, so every
//! repetition over the same corpus and query returns the same records.
//!
//! Repetitions never run concurrently. Parallel runs would share caches and
//! scheduler time and distort the comparison between strategies.
//!
//! The clock is a trait so tests can script exact durations; production
//! callers use [`MonotonicClock`] through [`measure`] and [`average`].

use std::hint::black_box;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::{check_repetitions, Result};

/// Source of monotonic timestamps.
pub trait Clock {
    /// Opaque point in time.
    type Mark: Copy;

    /// Current point in time.
    fn now(&self) -> Self::Mark;

    /// Time elapsed since `mark`.
    fn elapsed(&self, mark: Self::Mark) -> Duration;
}

/// [`Clock`] backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Mark = Instant;

    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn elapsed(&self, mark: Instant) -> Duration {
        mark.elapsed()
    }
}

/// One measured invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkSample<T> {
    /// Wall-clock time of the invocation.
    pub elapsed: Duration,
    /// What the invocation returned.
    pub output: Vec<T>,
}

impl<T> BenchmarkSample<T> {
    /// Elapsed time in seconds, with sub-microsecond precision.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Number of records the invocation returned.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.output.len()
    }
}

/// Mean duration over repeated invocations plus the final result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult<T> {
    /// Arithmetic mean of every repetition's elapsed time.
    pub mean: Duration,
    /// Number of repetitions averaged.
    pub repetitions: u32,
    /// Output of the last repetition.
    pub output: Vec<T>,
}

impl<T> AggregateResult<T> {
    /// Mean duration in seconds.
    #[must_use]
    pub fn mean_seconds(&self) -> f64 {
        self.mean.as_secs_f64()
    }

    /// Number of records in the final repetition's output.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.output.len()
    }
}

impl<T> From<BenchmarkSample<T>> for AggregateResult<T> {
    fn from(sample: BenchmarkSample<T>) -> Self {
        Self {
            mean: sample.elapsed,
            repetitions: 1,
            output: sample.output,
        }
    }
}

/// Measures one invocation on the monotonic clock.
pub fn measure<T, F>(invocation: F) -> BenchmarkSample<T>
where
    F: FnOnce() -> Vec<T>,
{
    measure_with(&MonotonicClock, invocation)
}

/// Measures one invocation on the given clock.
pub fn measure_with<C, T, F>(clock: &C, invocation: F) -> BenchmarkSample<T>
where
    C: Clock,
    F: FnOnce() -> Vec<T>,
{
    let mark = clock.now();
    let output = black_box(invocation());
    let elapsed = clock.elapsed(mark);
    BenchmarkSample { elapsed, output }
}

/// Averages `repetitions` sequential invocations on the monotonic clock.
///
/// # Errors
///
/// [`BenchError::InvalidRepetitionCount`](crate::error::BenchError::InvalidRepetitionCount)
/// if `repetitions` is zero. Nothing is invoked in that case.
pub fn average<T, F>(invocation: F, repetitions: u32) -> Result<AggregateResult<T>>
where
    F: FnMut() -> Vec<T>,
{
    average_with(&MonotonicClock, invocation, repetitions)
}

/// Averages `repetitions` sequential invocations on the given clock.
pub fn average_with<C, T, F>(
    clock: &C,
    invocation: F,
    repetitions: u32,
) -> Result<AggregateResult<T>>
where
    C: Clock,
    F: FnMut() -> Vec<T>,
{
    let repetitions = check_repetitions(repetitions)?;
    Ok(average_checked(clock, invocation, repetitions))
}

/// [`average_with`] for an already validated repetition count.
pub(crate) fn average_checked<C, T, F>(
    clock: &C,
    mut invocation: F,
    repetitions: NonZeroU32,
) -> AggregateResult<T>
where
    C: Clock,
    F: FnMut() -> Vec<T>,
{
    let mut total = Duration::ZERO;
    let mut output = Vec::new();
    for _ in 0..repetitions.get() {
        let sample = measure_with(clock, &mut invocation);
        total += sample.elapsed;
        output = sample.output;
    }

    AggregateResult {
        mean: total / repetitions.get(),
        repetitions: repetitions.get(),
        output,
    }
}

/// Reports the same duration for every measurement.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub Duration);

#[cfg(test)]
impl Clock for FixedClock {
    type Mark = ();

    fn now(&self) {}

    fn elapsed(&self, (): ()) -> Duration {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Returns pre-scripted durations, one per `elapsed` call.
    struct ScriptedClock {
        ticks: RefCell<VecDeque<Duration>>,
    }

    impl ScriptedClock {
        fn millis(ms: &[u64]) -> Self {
            Self {
                ticks: RefCell::new(ms.iter().map(|&m| Duration::from_millis(m)).collect()),
            }
        }
    }

    impl Clock for ScriptedClock {
        type Mark = ();

        fn now(&self) {}

        fn elapsed(&self, (): ()) -> Duration {
            self.ticks.borrow_mut().pop_front().unwrap_or_default()
        }
    }

    #[test]
    fn test_measure_reports_clock_delta() {
        let clock = ScriptedClock::millis(&[3]);
        let sample = measure_with(&clock, || vec![1, 2]);
        assert_eq!(sample.elapsed, Duration::from_millis(3));
        assert_eq!(sample.match_count(), 2);
        assert!((sample.seconds() - 0.003).abs() < 1e-12);
    }

    #[test]
    fn test_average_single_repetition_equals_measure() {
        let sample = measure_with(&ScriptedClock::millis(&[7]), || vec!["x"]);
        let avg = average_with(&ScriptedClock::millis(&[7]), || vec!["x"], 1).unwrap();
        assert_eq!(avg.mean, sample.elapsed);
        assert_eq!(avg.output, sample.output);
        assert_eq!(avg, AggregateResult::from(sample));
    }

    #[test]
    fn test_average_is_arithmetic_mean() {
        let clock = ScriptedClock::millis(&[1, 2, 3, 10]);
        let avg = average_with(&clock, Vec::<u8>::new, 4).unwrap();
        assert_eq!(avg.mean, Duration::from_millis(4));
        assert_eq!(avg.repetitions, 4);
    }

    #[test]
    fn test_average_keeps_last_output() {
        let calls = Cell::new(0);
        let clock = ScriptedClock::millis(&[1, 1, 1]);
        let avg = average_with(
            &clock,
            || {
                calls.set(calls.get() + 1);
                vec![calls.get()]
            },
            3,
        )
        .unwrap();
        assert_eq!(calls.get(), 3);
        assert_eq!(avg.output, vec![3]);
    }

    #[test]
    fn test_zero_repetitions_never_invokes() {
        let calls = Cell::new(0);
        let result = average(
            || {
                calls.set(calls.get() + 1);
                Vec::<u8>::new()
            },
            0,
        );
        assert_eq!(
            result,
            Err(BenchError::InvalidRepetitionCount { repetitions: 0 })
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_monotonic_clock_is_non_negative() {
        let sample = measure(|| (0..1000).collect::<Vec<u32>>());
        assert_eq!(sample.match_count(), 1000);
        assert!(sample.seconds() >= 0.0);
    }

    #[test]
    fn test_empty_invocation_near_zero() {
        let avg = average(Vec::<u8>::new, 5).unwrap();
        assert_eq!(avg.match_count(), 0);
        assert!(avg.mean < Duration::from_millis(50));
    }
}
