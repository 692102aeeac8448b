// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Common types shared across strategies, the harness and the analyzer.

pub mod corpus;
