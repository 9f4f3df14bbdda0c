//! Record and index builders for unit and integration tests.
//!
//! Compiled into the library so `tests/` can reach it, hidden from docs.

#![doc(hidden)]

use crate::types::{ContentIndex, Kind, Record};

/// Create a page record with no excerpt, tags or metadata.
pub fn make_record(id: &str, title: &str, content: &str) -> Record {
    Record {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        kind: Kind::Page,
        target: format!("/{}", id),
        excerpt: None,
        tags: None,
        metadata: None,
    }
}

/// Create a page record carrying tags.
pub fn make_tagged_record(id: &str, title: &str, content: &str, tags: &[&str]) -> Record {
    Record {
        tags: Some(tags.iter().map(|t| t.to_string()).collect()),
        ..make_record(id, title, content)
    }
}

/// Create a record of a given kind with an excerpt.
pub fn make_kind_record(id: &str, kind: Kind, title: &str, content: &str, excerpt: &str) -> Record {
    Record {
        kind,
        excerpt: Some(excerpt.to_string()),
        ..make_record(id, title, content)
    }
}

/// Build an index from fixtures, panicking on invalid input.
pub fn make_index(records: Vec<Record>) -> ContentIndex {
    ContentIndex::new(records).expect("test fixtures must satisfy index invariants")
}
