// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by search and suggestions.

/// Parse a query string into lowercase, whitespace-separated terms.
///
/// Leading and trailing whitespace disappears, runs of whitespace collapse,
/// and duplicates are kept: a repeated word counts once per occurrence.
///
/// # Example
///
/// ```
/// use folio::parse_query;
///
/// assert_eq!(parse_query("  DSGE   models dsge "), vec!["dsge", "models", "dsge"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Lowercased, trimmed form of a prefix query. Empty means "no query".
pub fn normalize_prefix(query: &str) -> String {
    query.trim().to_lowercase()
}
