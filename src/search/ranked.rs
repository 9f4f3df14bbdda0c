// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked search over every record in the index.
//!
//! The corpus is a few dozen records, so there is no inverted index here:
//! each query scores every record against its cached lowercase fields, drops
//! the zeros, and sorts. The sort is stable and keyed on score alone, so
//! equal scores come back in corpus order.

use super::utils::parse_query;
use crate::types::{ContentIndex, Kind, Record};
use serde::Serialize;

/// Results returned by `search` when no limit is given.
pub const MAX_RESULTS: usize = 10;

/// A matching record and the score that placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredRecord<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub score: u32,
}

/// Knobs for `search_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results (default: 10).
    pub limit: usize,
    /// Only return records of these kinds. `None` means every kind.
    pub kinds: Option<Vec<Kind>>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: MAX_RESULTS,
            kinds: None,
        }
    }
}

impl SearchOptions {
    fn allows(&self, kind: Kind) -> bool {
        self.kinds.as_ref().map_or(true, |kinds| kinds.contains(&kind))
    }
}

/// Search the index and return up to 10 records, best first.
///
/// Empty or whitespace-only queries return nothing. Records that match no
/// term are left out.
///
/// # Example
///
/// ```
/// use folio::{search, ContentIndex};
///
/// let index = ContentIndex::bundled();
/// let hits = search(index, "dsge");
/// assert!(!hits.is_empty());
/// assert!(search(index, "   ").is_empty());
/// ```
pub fn search<'a>(index: &'a ContentIndex, query: &str) -> Vec<&'a Record> {
    search_scored(index, query)
        .into_iter()
        .map(|hit| hit.record)
        .collect()
}

/// Same ranking as `search`, keeping each record's score.
pub fn search_scored<'a>(index: &'a ContentIndex, query: &str) -> Vec<ScoredRecord<'a>> {
    search_with(index, query, &SearchOptions::default())
}

/// Ranked search with a custom limit and optional kind filter.
///
/// The kind filter runs before truncation, so `limit` counts only records
/// of the requested kinds.
pub fn search_with<'a>(
    index: &'a ContentIndex,
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredRecord<'a>> {
    let terms = parse_query(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<ScoredRecord<'a>> = index
        .entries()
        .filter(|(record, _)| options.allows(record.kind))
        .filter_map(|(record, haystack)| {
            let score = haystack.score(&terms);
            (score > 0).then_some(ScoredRecord { record, score })
        })
        .collect();

    let matched = hits.len();

    // Stable: ties keep corpus order. Don't add a secondary key.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(options.limit);

    tracing::debug!(
        terms = terms.len(),
        matched,
        returned = hits.len(),
        "search"
    );

    hits
}
