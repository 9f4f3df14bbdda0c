// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a content index.
//!
//! A `Record` is one searchable unit of the portfolio: a page, a publication,
//! a blog post or a teaching resource. The `ContentIndex` owns every record
//! and never hands out mutable access, so once it exists it stays exactly as
//! it was built.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Record**: `!title.is_empty() ∧ !content.is_empty()`
//! - **ContentIndex**: `∀ i ≠ j. records[i].id ≠ records[j].id`
//!
//! Both are checked in `ContentIndex::new` (see `verify`). There is no other
//! way to obtain an index, which is what lets the search code skip the checks.

use crate::scoring::Haystack;
use crate::verify::{validate_records, IndexError, InvariantError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// =============================================================================
// RECORD TYPES
// =============================================================================

/// What kind of content a record points at.
///
/// Closed set. Anything else in a corpus file is rejected by serde before the
/// index ever sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Page,
    Publication,
    Blog,
    Teaching,
}

impl Kind {
    /// All variants, in declaration order.
    pub const ALL: [Kind; 4] = [Kind::Page, Kind::Publication, Kind::Blog, Kind::Teaching];

    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Page => "page",
            Kind::Publication => "publication",
            Kind::Blog => "blog",
            Kind::Teaching => "teaching",
        }
    }

    /// Parse the lowercase form back. Case-insensitive.
    pub fn parse(value: &str) -> Option<Kind> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-only fields attached to a record.
///
/// Nothing in here is scored. It rides along so the results dropdown can show
/// "Journal of Monetary Economics, 2023" under a publication title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Metadata {
    /// True when every field is absent.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.journal.is_none() && self.year.is_none() && self.tags.is_none()
    }
}

/// One searchable unit of content.
///
/// `target` is opaque to the engine. The navigation component hands it to its
/// page router when the user picks a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub title: String,
    pub content: String,
    pub kind: Kind,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

// =============================================================================
// CONTENT INDEX
// =============================================================================

/// The full, immutable collection of records.
///
/// Construction validates the invariants listed in the module docs. After
/// that the only operation is reading, so sharing `&ContentIndex` across
/// threads needs no locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIndex {
    records: Vec<Record>,
    /// Lowercased fields, parallel to `records`.
    haystacks: Vec<Haystack>,
}

impl ContentIndex {
    /// Build an index, rejecting duplicate ids and empty titles or bodies.
    pub fn new(records: Vec<Record>) -> Result<Self, InvariantError> {
        validate_records(&records)?;
        Ok(Self::assemble(records))
    }

    /// Build from records the caller has already validated.
    ///
    /// Only the bundled corpus goes through here; its table is checked at
    /// compile time.
    pub(crate) fn from_trusted(records: Vec<Record>) -> Self {
        debug_assert!(validate_records(&records).is_ok());
        Self::assemble(records)
    }

    fn assemble(records: Vec<Record>) -> Self {
        let haystacks = records.iter().map(Haystack::of).collect();
        Self { records, haystacks }
    }

    /// Parse a JSON array of records and validate it.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        let index = Self::new(records)?;
        tracing::info!(records = index.len(), "loaded corpus");
        Ok(index)
    }

    /// Read a JSON corpus file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Every record, in corpus order.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Records paired with their cached haystacks, in corpus order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&Record, &Haystack)> {
        self.records.iter().zip(self.haystacks.iter())
    }

    /// Look a record up by id.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContentIndex {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
