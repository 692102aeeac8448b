// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Records, the sorted corpus they live in, and the search query.
//!
//! Every comparison in the engine is made on case-folded keys. Folding is
//! done once when a [`Corpus`] is built and once when a [`Query`] is built,
//! so strategy loops compare plain `&str` slices and never allocate.
//!
//! # Ordering
//!
//! A corpus is expected to be non-decreasing by folded key. [`Corpus::new`]
//! trusts the caller; [`Corpus::sorted`] sorts on the caller's behalf. The
//! strategies never check the order (see [`crate::error`]).

use std::ops::Range;

/// A searchable item with a single title-like key.
///
/// Identity beyond the key is irrelevant to the engine: two records with the
/// same key are distinct entries that both match the same queries.
pub trait Record {
    /// The key used for ordering and substring matching.
    fn key(&self) -> &str;
}

impl Record for str {
    fn key(&self) -> &str {
        self
    }
}

impl Record for String {
    fn key(&self) -> &str {
        self
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn key(&self) -> &str {
        (**self).key()
    }
}

/// Case-folds a key for ordering and matching.
#[must_use]
#[inline]
pub fn fold_key(key: &str) -> String {
    key.to_lowercase()
}

/// A search query: case-insensitive substring containment against keys.
///
/// An empty query is contained in every key and therefore matches every
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    text: String,
    folded: String,
}

impl Query {
    /// Creates a query, folding it once for all later comparisons.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded = fold_key(&text);
        Self { text, folded }
    }

    /// The query as supplied by the caller.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The case-folded query used for comparisons.
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// An owned, title-sorted collection of records with pre-folded keys.
#[derive(Debug, Clone)]
pub struct Corpus<R> {
    records: Vec<R>,
    keys: Vec<String>,
}

impl<R: Record> Corpus<R> {
    /// Wraps records that the caller has already sorted by folded key.
    ///
    /// The order is not verified. Use [`Corpus::sorted`] when the provider
    /// cannot guarantee it.
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        let keys = records.iter().map(|r| fold_key(r.key())).collect();
        Self { records, keys }
    }

    /// Sorts records ascending by folded key, then wraps them.
    ///
    /// The sort is stable: records with equal folded keys keep their
    /// provider order.
    #[must_use]
    pub fn sorted(records: Vec<R>) -> Self {
        let mut pairs: Vec<(String, R)> = records
            .into_iter()
            .map(|r| (fold_key(r.key()), r))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        let (keys, records) = pairs.into_iter().unzip();
        Self { records, keys }
    }
}

impl<R> Corpus<R> {
    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the corpus holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in corpus order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns true if folded keys are non-decreasing.
    ///
    /// O(n). The engine never calls this on the measurement path.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.keys.windows(2).all(|w| w[0] <= w[1])
    }

    /// Borrows the whole corpus as a view.
    #[must_use]
    pub fn view(&self) -> CorpusView<'_, R> {
        CorpusView {
            records: &self.records,
            keys: &self.keys,
        }
    }

    /// Consumes the corpus, returning the records in corpus order.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

impl<'a, R> From<&'a Corpus<R>> for CorpusView<'a, R> {
    fn from(corpus: &'a Corpus<R>) -> Self {
        corpus.view()
    }
}

/// A borrowed prefix of a [`Corpus`].
///
/// Views are `Copy` and cost two slice headers, so the sweep controller can
/// truncate the corpus to any prefix size without cloning records.
#[derive(Debug)]
pub struct CorpusView<'a, R> {
    records: &'a [R],
    keys: &'a [String],
}

impl<R> Clone for CorpusView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for CorpusView<'_, R> {}

impl<'a, R> CorpusView<'a, R> {
    /// Number of records in the view.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the view holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `size` records, or the whole view if it is shorter.
    #[must_use]
    pub fn prefix(self, size: usize) -> Self {
        let size = size.min(self.len());
        Self {
            records: &self.records[..size],
            keys: &self.keys[..size],
        }
    }

    /// The records in the view.
    #[must_use]
    pub const fn records(&self) -> &'a [R] {
        self.records
    }

    /// Returns true if the key at `idx` contains the query.
    #[inline]
    pub(crate) fn matches(&self, idx: usize, query: &Query) -> bool {
        self.keys[idx].contains(query.folded())
    }

    /// Returns true if the key at `idx` sorts strictly before the query.
    #[inline]
    pub(crate) fn precedes(&self, idx: usize, query: &Query) -> bool {
        self.keys[idx].as_str() < query.folded()
    }

    /// Collects the records in `range`, in corpus order.
    pub(crate) fn collect(&self, range: Range<usize>) -> Vec<&'a R> {
        self.records[range].iter().collect()
    }

    /// Collects the single record at `idx`.
    pub(crate) fn single(&self, idx: usize) -> Vec<&'a R> {
        vec![&self.records[idx]]
    }
}
