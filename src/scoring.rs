// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every search term is checked against each field of a record with plain
//! case-insensitive substring containment. Each field that contains the term
//! adds its weight, and the combined haystack (all fields joined) adds a small
//! bonus on top. The rules are independent: one term that hits the title also
//! hits the combined haystack, so it earns `10 + 2`.
//!
//! # Weights
//!
//! | Field    | Weight | Applies when                     |
//! |----------|--------|----------------------------------|
//! | Title    | 10     | always                           |
//! | Tags     | 7      | any tag contains the term        |
//! | Content  | 5      | always                           |
//! | Excerpt  | 3      | excerpt present                  |
//! | Combined | 2      | any of the above fields          |
//!
//! The ordering is asserted at compile time in `verify::contracts`.
//!
//! Repeated query terms are scored once per occurrence. `"econ econ"` is worth
//! exactly twice `"econ"`.

use crate::types::Record;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Term found in the title.
pub const TITLE_WEIGHT: u32 = 10;

/// Term found in any tag.
pub const TAG_WEIGHT: u32 = 7;

/// Term found in the body.
pub const CONTENT_WEIGHT: u32 = 5;

/// Term found in the excerpt.
pub const EXCERPT_WEIGHT: u32 = 3;

/// Term found anywhere in the joined fields. Stacks with the field weights.
pub const COMBINED_WEIGHT: u32 = 2;

/// Lowercased copies of a record's scored fields.
///
/// Built once per record when the index is constructed, so a query only pays
/// for lowercasing its own terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystack {
    title: String,
    content: String,
    excerpt: Option<String>,
    tags: Option<Vec<String>>,
    combined: String,
}

impl Haystack {
    pub fn of(record: &Record) -> Self {
        let title = record.title.to_lowercase();
        let content = record.content.to_lowercase();
        let excerpt = record.excerpt.as_deref().map(str::to_lowercase);
        let tags: Option<Vec<String>> = record
            .tags
            .as_ref()
            .map(|tags| tags.iter().map(|t| t.to_lowercase()).collect());

        // Single-space joins. Terms never contain whitespace, so a term can't
        // straddle two fields.
        let mut combined = String::with_capacity(title.len() + content.len() + 64);
        combined.push_str(&title);
        combined.push(' ');
        combined.push_str(&content);
        if let Some(excerpt) = &excerpt {
            combined.push(' ');
            combined.push_str(excerpt);
        }
        if let Some(tags) = &tags {
            for tag in tags {
                combined.push(' ');
                combined.push_str(tag);
            }
        }

        Self {
            title,
            content,
            excerpt,
            tags,
            combined,
        }
    }

    /// Score contribution of a single lowercase term.
    pub fn term_score(&self, term: &str) -> u32 {
        let mut score = 0;
        if self.title.contains(term) {
            score += TITLE_WEIGHT;
        }
        if self.content.contains(term) {
            score += CONTENT_WEIGHT;
        }
        if self.excerpt.as_deref().is_some_and(|e| e.contains(term)) {
            score += EXCERPT_WEIGHT;
        }
        if self
            .tags
            .as_deref()
            .is_some_and(|tags| tags.iter().any(|t| t.contains(term)))
        {
            score += TAG_WEIGHT;
        }
        if self.combined.contains(term) {
            score += COMBINED_WEIGHT;
        }
        score
    }

    /// Sum of `term_score` over every term, duplicates included.
    pub fn score(&self, terms: &[String]) -> u32 {
        terms.iter().map(|term| self.term_score(term)).sum()
    }
}

/// Score a record against already-parsed, lowercase terms.
///
/// Convenience for callers without an index; the search path uses the
/// haystacks cached on `ContentIndex` instead.
pub fn score_record(record: &Record, terms: &[String]) -> u32 {
    Haystack::of(record).score(terms)
}
