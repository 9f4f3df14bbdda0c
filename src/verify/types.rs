// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for index construction and corpus loading.
//!
//! Queries never fail. Everything that can go wrong happens while the index is
//! being built, and it surfaces here.

use crate::types::Record;
use std::collections::HashMap;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Record at `position` has an empty id.
    EmptyId { position: usize },
    /// Two records share an id. Positions are corpus indices.
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
    /// Record has an empty (or all-whitespace) title.
    EmptyTitle { id: String },
    /// Record has an empty (or all-whitespace) content body.
    EmptyContent { id: String },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::EmptyId { position } => {
                write!(f, "record at position {} has an empty id", position)
            }
            InvariantError::DuplicateId { id, first, second } => {
                write!(
                    f,
                    "duplicate id '{}' at positions {} and {}",
                    id, first, second
                )
            }
            InvariantError::EmptyTitle { id } => write!(f, "record '{}' has an empty title", id),
            InvariantError::EmptyContent { id } => {
                write!(f, "record '{}' has empty content", id)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Anything that can stop a corpus from becoming a `ContentIndex`.
#[derive(Debug)]
pub enum IndexError {
    /// The corpus file could not be read.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The corpus is not a JSON array of records.
    Parse(serde_json::Error),
    /// The records parsed but break an index invariant.
    Invariant(InvariantError),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::Io { path, source } => write!(f, "failed to read {}: {}", path, source),
            IndexError::Parse(e) => write!(f, "invalid corpus JSON: {}", e),
            IndexError::Invariant(e) => write!(f, "invalid corpus: {}", e),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Io { source, .. } => Some(source),
            IndexError::Parse(e) => Some(e),
            IndexError::Invariant(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(e: serde_json::Error) -> Self {
        IndexError::Parse(e)
    }
}

impl From<InvariantError> for IndexError {
    fn from(e: InvariantError) -> Self {
        IndexError::Invariant(e)
    }
}

/// Check every record-level and index-level invariant.
///
/// Reports the first violation in corpus order.
pub fn validate_records(records: &[Record]) -> Result<(), InvariantError> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());

    for (position, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            return Err(InvariantError::EmptyId { position });
        }
        if record.title.trim().is_empty() {
            return Err(InvariantError::EmptyTitle {
                id: record.id.clone(),
            });
        }
        if record.content.trim().is_empty() {
            return Err(InvariantError::EmptyContent {
                id: record.id.clone(),
            });
        }
        if let Some(first) = seen.insert(record.id.as_str(), position) {
            return Err(InvariantError::DuplicateId {
                id: record.id.clone(),
                first,
                second: position,
            });
        }
    }

    Ok(())
}
