// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! End-to-end: an in-memory `DuckDB` table plays the corpus provider.
//!
//! The provider sorts titles with `ORDER BY lower(title)` and hands them to
//! the engine, which must accept that order as-is.

use duckdb::Connection;
use search_bench::analyzer::analyze;
use search_bench::common::corpus::{Corpus, Query, Record};
use search_bench::strategy::{MatchMode, StrategyId};
use search_bench::sweep::{sweep, IntervalPolicy};

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct Movie {
    id: i64,
    title: String,
}

impl Record for Movie {
    fn key(&self) -> &str {
        &self.title
    }
}

fn seed(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE movies (id BIGINT, title VARCHAR);
         INSERT INTO movies VALUES
           (1, 'Foxtrot'), (2, 'alpha'), (3, 'Bravo Two'), (4, 'Echo'),
           (5, 'bravo'), (6, 'Delta'), (7, 'Charlie');
         INSERT INTO movies
           SELECT 100 + i, 'Zulu Reel ' || lpad(CAST(i AS VARCHAR), 3, '0')
           FROM range(93) t(i);",
    )
    .unwrap();
}

fn load_sorted(conn: &Connection) -> Vec<Movie> {
    let mut stmt = conn
        .prepare("SELECT id, title FROM movies ORDER BY lower(title), id")
        .unwrap();
    let rows = stmt
        .query_map([], |row| {
            Ok(Movie {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })
        .unwrap();
    rows.collect::<Result<Vec<_>, _>>().unwrap()
}

#[test]
fn provider_order_is_accepted_as_sorted() {
    let conn = Connection::open_in_memory().unwrap();
    seed(&conn);
    let corpus = Corpus::new(load_sorted(&conn));
    assert_eq!(corpus.len(), 100);
    assert!(corpus.is_sorted());
}

#[test]
fn analyze_provider_corpus() {
    let conn = Connection::open_in_memory().unwrap();
    seed(&conn);
    let corpus = Corpus::new(load_sorted(&conn));

    let table = analyze(corpus.view(), &Query::new("BRAVO"), MatchMode::All, 3).unwrap();
    let ids: Vec<i64> = table.results.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![5, 3]);
    for strategy in StrategyId::ALL {
        assert_eq!(table.row(strategy).unwrap().match_count, 2, "{strategy}");
    }

    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["results"][0]["title"], "bravo");
    assert_eq!(json["corpus_size"], 100);
}

#[test]
fn sweep_provider_corpus() {
    let conn = Connection::open_in_memory().unwrap();
    seed(&conn);
    let corpus = Corpus::new(load_sorted(&conn));

    let report = sweep(
        corpus.view(),
        &Query::new("zulu reel"),
        MatchMode::All,
        95,
        IntervalPolicy::Fixed(10),
        2,
    )
    .unwrap();

    assert_eq!(report.point_count(), 10);
    assert_eq!(report.sizes(), vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 95]);
    // Seven phonetic titles sort first; every later record is a Zulu reel.
    let linear: Vec<usize> = report
        .points
        .iter()
        .map(|p| p.row(StrategyId::LinearIterative).unwrap().match_count)
        .collect();
    assert_eq!(linear, vec![3, 13, 23, 33, 43, 53, 63, 73, 83, 88]);
    assert_eq!(report.series(StrategyId::BinaryRecursive).len(), 10);
}

#[test]
fn sweep_rejects_oversized_target() {
    let conn = Connection::open_in_memory().unwrap();
    seed(&conn);
    let corpus = Corpus::new(load_sorted(&conn));
    assert!(sweep(
        corpus.view(),
        &Query::new("bravo"),
        MatchMode::All,
        101,
        IntervalPolicy::Adaptive,
        1,
    )
    .is_err());
}
