// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Jump search: skip fixed-size blocks, then scan the located block.
//!
//! The block size is `floor(sqrt(n))` for the corpus length `n` at call
//! time. The descent advances one block while the *last* key of the current
//! block sorts strictly before the query. If advancing moves past the end of
//! the corpus the search returns empty, with no wrap-around.
//!
//! Every record in the located block is tested, not only a neighbourhood of
//! one hit. In `All` mode the run of matches is then continued across the
//! block edges the same way binary search's adjacency scan does: leftwards
//! if the block's first record matched, rightwards if its last did. Without
//! this, a run of equal-prefix titles split by a block boundary would be
//! truncated at the boundary.
//!
//! # Example
//!
//! ```
//! use search_bench::common::corpus::{Corpus, Query};
//! use search_bench::strategy::{jump, MatchMode};
//!
//! let corpus = Corpus::new(vec!["Alpha", "Bravo", "Bravo Two", "Charlie"]);
//! let found = jump::iterative(corpus.view(), &Query::new("bravo"), MatchMode::All);
//! assert_eq!(found, vec![&"Bravo", &"Bravo Two"]);
//! ```

use std::ops::Range;

use super::binary::{extend_left, extend_right};
use super::MatchMode;
use crate::common::corpus::{CorpusView, Query};

/// Block size for a corpus of `len` records: `floor(sqrt(len))`.
#[must_use]
#[inline]
pub const fn block_size(len: usize) -> usize {
    len.isqrt()
}

/// Walks the blocks with a loop.
pub fn iterative<'a, R>(corpus: CorpusView<'a, R>, query: &Query, mode: MatchMode) -> Vec<&'a R> {
    let block = locate_iterative(corpus, query);
    finish(corpus, query, mode, block)
}

/// Walks the blocks by recursing into the next block.
pub fn recursive<'a, R>(corpus: CorpusView<'a, R>, query: &Query, mode: MatchMode) -> Vec<&'a R> {
    let step = block_size(corpus.len());
    let block = locate_recursive(corpus, query, step, 0);
    finish(corpus, query, mode, block)
}

fn locate_iterative<R>(corpus: CorpusView<'_, R>, query: &Query) -> Option<Range<usize>> {
    let len = corpus.len();
    if len == 0 {
        return None;
    }
    let step = block_size(len);
    let mut prev = 0;
    while corpus.precedes((prev + step).min(len) - 1, query) {
        prev += step;
        if prev >= len {
            return None;
        }
    }
    Some(prev..(prev + step).min(len))
}

fn locate_recursive<R>(
    corpus: CorpusView<'_, R>,
    query: &Query,
    step: usize,
    prev: usize,
) -> Option<Range<usize>> {
    let len = corpus.len();
    if prev >= len {
        return None;
    }
    let next = (prev + step).min(len);
    if corpus.precedes(next - 1, query) {
        return locate_recursive(corpus, query, step, next);
    }
    Some(prev..next)
}

fn finish<'a, R>(
    corpus: CorpusView<'a, R>,
    query: &Query,
    mode: MatchMode,
    block: Option<Range<usize>>,
) -> Vec<&'a R> {
    let Some(block) = block else {
        return Vec::new();
    };
    let records = corpus.records();
    let mut hits = block.clone().filter(|&idx| corpus.matches(idx, query));

    if mode == MatchMode::First {
        return hits.next().map_or_else(Vec::new, |idx| corpus.single(idx));
    }

    let mut results = Vec::new();
    let mut first_hit = None;
    let mut last_hit = None;
    for idx in hits {
        if first_hit.is_none() {
            first_hit = Some(idx);
        }
        last_hit = Some(idx);
        results.push(&records[idx]);
    }

    if first_hit == Some(block.start) {
        let lo = extend_left(corpus, query, block.start);
        let mut leading = corpus.collect(lo..block.start);
        leading.append(&mut results);
        results = leading;
    }
    if last_hit == Some(block.end - 1) {
        let hi = extend_right(corpus, query, block.end);
        results.extend(corpus.collect(block.end..hi));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::corpus::Corpus;

    fn phonetic() -> Corpus<&'static str> {
        Corpus::new(vec![
            "Alpha", "Bravo", "Bravo Two", "Charlie", "Delta", "Echo", "Foxtrot",
        ])
    }

    #[test]
    fn test_block_size() {
        assert_eq!(block_size(0), 0);
        assert_eq!(block_size(1), 1);
        assert_eq!(block_size(3), 1);
        assert_eq!(block_size(4), 2);
        assert_eq!(block_size(7), 2);
        assert_eq!(block_size(100), 10);
        assert_eq!(block_size(99), 9);
    }

    #[test]
    fn test_locate_forms_agree() {
        let corpus = phonetic();
        for text in ["alpha", "bravo", "delta", "echo", "foxtrot", "zulu", ""] {
            let q = Query::new(text);
            let it = locate_iterative(corpus.view(), &q);
            let rec = locate_recursive(corpus.view(), &q, 2, 0);
            assert_eq!(it, rec, "{text}");
        }
    }

    #[test]
    fn test_locates_expected_blocks() {
        let corpus = phonetic();
        let view = corpus.view();
        assert_eq!(locate_iterative(view, &Query::new("bravo")), Some(0..2));
        assert_eq!(locate_iterative(view, &Query::new("charlie")), Some(2..4));
        assert_eq!(locate_iterative(view, &Query::new("foxtrot")), Some(6..7));
    }

    #[test]
    fn test_past_end_returns_empty() {
        let corpus = phonetic();
        let q = Query::new("zulu");
        assert_eq!(locate_iterative(corpus.view(), &q), None);
        assert!(iterative(corpus.view(), &q, MatchMode::All).is_empty());
        assert!(recursive(corpus.view(), &q, MatchMode::All).is_empty());
    }

    #[test]
    fn test_bravo_run_crosses_block_end() {
        let corpus = phonetic();
        let q = Query::new("Bravo");
        assert_eq!(
            iterative(corpus.view(), &q, MatchMode::All),
            vec![&"Bravo", &"Bravo Two"]
        );
        assert_eq!(
            recursive(corpus.view(), &q, MatchMode::All),
            vec![&"Bravo", &"Bravo Two"]
        );
    }

    #[test]
    fn test_run_crosses_block_start() {
        // Block size 3. "delta echo" sorts before "echo", so the walk passes
        // the first block and lands on [3, 6). Its first record matches, so
        // the run extends back into the previous block.
        let corpus = Corpus::new(vec![
            "alpha", "bravo", "delta echo", "echo", "echo two", "foxtrot", "golf", "hotel",
            "india",
        ]);
        let q = Query::new("echo");
        assert_eq!(locate_iterative(corpus.view(), &q), Some(3..6));
        assert_eq!(
            iterative(corpus.view(), &q, MatchMode::All),
            vec![&"delta echo", &"echo", &"echo two"]
        );
        assert_eq!(
            recursive(corpus.view(), &q, MatchMode::All),
            vec![&"delta echo", &"echo", &"echo two"]
        );
    }

    #[test]
    fn test_block_scan_tests_every_record() {
        // Block [0, 3) holds a non-adjacent second match.
        let corpus = Corpus::new(vec!["ab", "b", "cab", "x", "y", "z", "zz", "zzz", "zzzz"]);
        let q = Query::new("ab");
        assert_eq!(
            iterative(corpus.view(), &q, MatchMode::All),
            vec![&"ab", &"cab"]
        );
    }

    #[test]
    fn test_first_mode_lowest_in_block() {
        let corpus = phonetic();
        let q = Query::new("bravo");
        assert_eq!(iterative(corpus.view(), &q, MatchMode::First), vec![&"Bravo"]);
        assert_eq!(recursive(corpus.view(), &q, MatchMode::First), vec![&"Bravo"]);
    }

    #[test]
    fn test_single_record_corpus() {
        let corpus = Corpus::new(vec!["Only"]);
        assert_eq!(
            iterative(corpus.view(), &Query::new("only"), MatchMode::All),
            vec![&"Only"]
        );
        assert!(recursive(corpus.view(), &Query::new("zz"), MatchMode::All).is_empty());
    }
}
