// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions for a partial query.
//!
//! Candidates come from two places, scanned record by record in corpus order:
//! each whitespace-separated word of the title, then each tag as a whole
//! string. A title word has to be a genuine completion (strictly longer than
//! the prefix). A tag only has to start with the prefix, so typing a full tag
//! still offers it back. The asymmetry is deliberate.

use super::utils::normalize_prefix;
use crate::types::ContentIndex;

/// Most suggestions `suggest` will return.
pub const MAX_SUGGESTIONS: usize = 5;

/// Offer up to 5 unique lowercase completions for `query`.
///
/// Output depends only on the index and the query: the same inputs always
/// give the same list, in discovery order.
///
/// # Example
///
/// ```
/// use folio::{suggest, ContentIndex};
///
/// let completions = suggest(ContentIndex::bundled(), "Mon");
/// assert!(completions.iter().all(|s| s.starts_with("mon")));
/// assert!(completions.len() <= 5);
/// ```
pub fn suggest(index: &ContentIndex, query: &str) -> Vec<String> {
    let prefix = normalize_prefix(query);
    if prefix.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);

    for record in index.records() {
        for word in record.title.split_whitespace() {
            let word = word.to_lowercase();
            if word.starts_with(&prefix) && word.len() > prefix.len() {
                push_unique(&mut found, word);
                if found.len() == MAX_SUGGESTIONS {
                    return found;
                }
            }
        }

        for tag in record.tags.iter().flatten() {
            let tag = tag.to_lowercase();
            if tag.starts_with(&prefix) {
                push_unique(&mut found, tag);
                if found.len() == MAX_SUGGESTIONS {
                    return found;
                }
            }
        }
    }

    tracing::trace!(prefix = %prefix, suggestions = found.len(), "suggest");
    found
}

/// Candidates are already lowercase, so plain equality is the
/// case-insensitive check.
fn push_unique(found: &mut Vec<String>, candidate: String) {
    if !found.contains(&candidate) {
        found.push(candidate);
    }
}
