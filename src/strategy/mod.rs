// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! The six search strategies under benchmark.
//!
//! Three algorithms, each in an iterative and a recursive form, all matching
//! by case-insensitive substring containment against a record's key:
//!
//! | Strategy | Descent | Complexity class |
//! |----------|---------|------------------|
//! | [`linear`] | scan every record | linear |
//! | [`binary`] | halve on `key < query`, then adjacency scan | logarithmic |
//! | [`jump`] | skip `floor(sqrt(n))` blocks on `key < query`, then block scan | sqrt(n) |
//!
//! Strategies are pure functions of `(corpus, query, mode)`: they never
//! panic, never allocate beyond their result vector, and return records in
//! corpus order.
//!
//! # Known limitation
//!
//! Binary and jump search only locate *one* region of matches. If two
//! separately-sorted keys both contain the query but sit far apart in the
//! corpus, `All` mode reports only the region the descent landed in. Linear
//! search is the reference for the complete match set.

pub mod binary;
pub mod jump;
pub mod linear;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::corpus::{CorpusView, Query};

/// Whether a strategy stops at the first match or collects the whole
/// located region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Return at most one record.
    First,
    /// Return every match the algorithm can reach from its located position.
    #[default]
    All,
}

/// The three search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive scan.
    Linear,
    /// Halving descent.
    Binary,
    /// Fixed-block descent.
    Jump,
}

impl Algorithm {
    /// All algorithms in reporting order.
    pub const ALL: [Self; 3] = [Self::Linear, Self::Binary, Self::Jump];

    /// Declared complexity class. Never measured.
    #[must_use]
    pub const fn complexity(self) -> ComplexityClass {
        match self {
            Self::Linear => ComplexityClass::Linear,
            Self::Binary => ComplexityClass::Logarithmic,
            Self::Jump => ComplexityClass::SqrtN,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
            Self::Jump => "jump",
        }
    }
}

/// Iterative or recursive implementation of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    /// Loop-based.
    Iterative,
    /// Self-calling with carried bounds.
    Recursive,
}

/// Declared asymptotic cost of a strategy, attached for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityClass {
    /// O(n).
    #[serde(rename = "linear")]
    Linear,
    /// O(log n).
    #[serde(rename = "logarithmic")]
    Logarithmic,
    /// O(sqrt n).
    #[serde(rename = "sqrt(n)")]
    SqrtN,
}

impl ComplexityClass {
    /// The label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::SqrtN => "sqrt(n)",
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// One of the six benchmarked strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    /// [`linear::iterative`].
    LinearIterative,
    /// [`linear::recursive`].
    LinearRecursive,
    /// [`binary::iterative`].
    BinaryIterative,
    /// [`binary::recursive`].
    BinaryRecursive,
    /// [`jump::iterative`].
    JumpIterative,
    /// [`jump::recursive`].
    JumpRecursive,
}

impl StrategyId {
    /// All strategies in reporting order: algorithm first, iterative before
    /// recursive.
    pub const ALL: [Self; 6] = [
        Self::LinearIterative,
        Self::LinearRecursive,
        Self::BinaryIterative,
        Self::BinaryRecursive,
        Self::JumpIterative,
        Self::JumpRecursive,
    ];

    /// Builds the id for an algorithm/form pair.
    #[must_use]
    pub const fn new(algorithm: Algorithm, form: Form) -> Self {
        match (algorithm, form) {
            (Algorithm::Linear, Form::Iterative) => Self::LinearIterative,
            (Algorithm::Linear, Form::Recursive) => Self::LinearRecursive,
            (Algorithm::Binary, Form::Iterative) => Self::BinaryIterative,
            (Algorithm::Binary, Form::Recursive) => Self::BinaryRecursive,
            (Algorithm::Jump, Form::Iterative) => Self::JumpIterative,
            (Algorithm::Jump, Form::Recursive) => Self::JumpRecursive,
        }
    }

    /// The algorithm this strategy implements.
    #[must_use]
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::LinearIterative | Self::LinearRecursive => Algorithm::Linear,
            Self::BinaryIterative | Self::BinaryRecursive => Algorithm::Binary,
            Self::JumpIterative | Self::JumpRecursive => Algorithm::Jump,
        }
    }

    /// Iterative or recursive.
    #[must_use]
    pub const fn form(self) -> Form {
        match self {
            Self::LinearIterative | Self::BinaryIterative | Self::JumpIterative => Form::Iterative,
            Self::LinearRecursive | Self::BinaryRecursive | Self::JumpRecursive => Form::Recursive,
        }
    }

    /// Declared complexity class of the underlying algorithm.
    #[must_use]
    pub const fn complexity(self) -> ComplexityClass {
        self.algorithm().complexity()
    }

    /// Stable snake_case name, e.g. `"jump_recursive"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinearIterative => "linear_iterative",
            Self::LinearRecursive => "linear_recursive",
            Self::BinaryIterative => "binary_iterative",
            Self::BinaryRecursive => "binary_recursive",
            Self::JumpIterative => "jump_iterative",
            Self::JumpRecursive => "jump_recursive",
        }
    }

    /// Runs the strategy.
    ///
    /// The corpus must be sorted by folded key for binary and jump search to
    /// return meaningful results; unsorted input yields incomplete results
    /// but never panics.
    pub fn run<'a, R>(
        self,
        corpus: CorpusView<'a, R>,
        query: &Query,
        mode: MatchMode,
    ) -> Vec<&'a R> {
        match self {
            Self::LinearIterative => linear::iterative(corpus, query, mode),
            Self::LinearRecursive => linear::recursive(corpus, query, mode),
            Self::BinaryIterative => binary::iterative(corpus, query, mode),
            Self::BinaryRecursive => binary::recursive(corpus, query, mode),
            Self::JumpIterative => jump::iterative(corpus, query, mode),
            Self::JumpRecursive => jump::recursive(corpus, query, mode),
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
