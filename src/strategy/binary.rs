// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Binary search with adjacency recovery.
//!
//! The descent probes the midpoint of the closed range `[left, right]`. If
//! the probed key contains the query the descent stops; otherwise it keeps
//! the right half when `key < query` and the left half otherwise.
//!
//! Binary search only guarantees landing on *a* matching record. With
//! duplicate or prefix-overlapping keys the matches around that record form
//! a contiguous run, so `All` mode walks outward (left, then right) from the
//! hit until the first non-matching neighbour on each side.
//!
//! Bounds are kept half-open (`lo..hi`) internally so no index can go
//! negative. The midpoint `lo + (hi - 1 - lo) / 2` equals
//! `floor((left + right) / 2)` of the closed form, so both variants probe
//! the same records in the same order.

use std::ops::Range;

use super::MatchMode;
use crate::common::corpus::{CorpusView, Query};

/// Descends with a loop.
pub fn iterative<'a, R>(corpus: CorpusView<'a, R>, query: &Query, mode: MatchMode) -> Vec<&'a R> {
    let (mut lo, mut hi) = (0, corpus.len());
    let mut hit = None;
    while lo < hi {
        let mid = midpoint(lo, hi);
        if corpus.matches(mid, query) {
            hit = Some(mid);
            break;
        } else if corpus.precedes(mid, query) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    finish(corpus, query, mode, hit)
}

/// Descends by recursing into the kept half.
pub fn recursive<'a, R>(corpus: CorpusView<'a, R>, query: &Query, mode: MatchMode) -> Vec<&'a R> {
    let hit = descend(corpus, query, 0, corpus.len());
    finish(corpus, query, mode, hit)
}

fn descend<R>(corpus: CorpusView<'_, R>, query: &Query, lo: usize, hi: usize) -> Option<usize> {
    if lo >= hi {
        return None;
    }
    let mid = midpoint(lo, hi);
    if corpus.matches(mid, query) {
        Some(mid)
    } else if corpus.precedes(mid, query) {
        descend(corpus, query, mid + 1, hi)
    } else {
        descend(corpus, query, lo, mid)
    }
}

/// Closed-range midpoint of `lo..hi`. Requires `lo < hi`.
#[inline]
const fn midpoint(lo: usize, hi: usize) -> usize {
    lo + (hi - 1 - lo) / 2
}

fn finish<'a, R>(
    corpus: CorpusView<'a, R>,
    query: &Query,
    mode: MatchMode,
    hit: Option<usize>,
) -> Vec<&'a R> {
    match (hit, mode) {
        (None, _) => Vec::new(),
        (Some(idx), MatchMode::First) => corpus.single(idx),
        (Some(idx), MatchMode::All) => corpus.collect(adjacent_run(corpus, query, idx)),
    }
}

/// Widens `hit` to the maximal run of matching neighbours.
pub(crate) fn adjacent_run<R>(corpus: CorpusView<'_, R>, query: &Query, hit: usize) -> Range<usize> {
    extend_left(corpus, query, hit)..extend_right(corpus, query, hit + 1)
}

/// Lowest index such that every record in `idx..start` matches.
pub(crate) fn extend_left<R>(corpus: CorpusView<'_, R>, query: &Query, start: usize) -> usize {
    let mut idx = start;
    while idx > 0 && corpus.matches(idx - 1, query) {
        idx -= 1;
    }
    idx
}

/// One past the highest index such that every record in `end..idx` matches.
pub(crate) fn extend_right<R>(corpus: CorpusView<'_, R>, query: &Query, end: usize) -> usize {
    let mut idx = end;
    while idx < corpus.len() && corpus.matches(idx, query) {
        idx += 1;
    }
    idx
}
