// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Linear search: test every record in corpus order.
//!
//! The correctness reference for the other strategies. Sorting is irrelevant
//! to it, and `All` mode always finds every match regardless of where the
//! matches sit.
//!
//! The recursive form splits the index range in half and visits the left
//! half before the right. Visit order and results are identical to the
//! iterative loop, while recursion depth stays at O(log n), so large
//! corpora cannot overflow the stack.

use std::ops::Range;

use super::MatchMode;
use crate::common::corpus::{CorpusView, Query};

/// Scans the corpus with a loop.
pub fn iterative<'a, R>(corpus: CorpusView<'a, R>, query: &Query, mode: MatchMode) -> Vec<&'a R> {
    let mut results = Vec::new();
    for (idx, record) in corpus.records().iter().enumerate() {
        if corpus.matches(idx, query) {
            results.push(record);
            if mode == MatchMode::First {
                break;
            }
        }
    }
    results
}

/// Scans the corpus by recursive range halving.
pub fn recursive<'a, R>(corpus: CorpusView<'a, R>, query: &Query, mode: MatchMode) -> Vec<&'a R> {
    let mut results = Vec::new();
    scan(corpus, query, mode, 0..corpus.len(), &mut results);
    results
}

/// Appends matches in `range` to `acc`. Returns true once `First` mode has
/// its hit, which stops every enclosing call.
fn scan<'a, R>(
    corpus: CorpusView<'a, R>,
    query: &Query,
    mode: MatchMode,
    range: Range<usize>,
    acc: &mut Vec<&'a R>,
) -> bool {
    match range.len() {
        0 => false,
        1 => {
            if !corpus.matches(range.start, query) {
                return false;
            }
            acc.push(&corpus.records()[range.start]);
            mode == MatchMode::First
        }
        len => {
            let mid = range.start + len / 2;
            scan(corpus, query, mode, range.start..mid, acc)
                || scan(corpus, query, mode, mid..range.end, acc)
        }
    }
}
