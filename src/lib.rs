// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field-weighted content search for an academic portfolio site.
//!
//! The navigation bar's search box calls into this crate on every keystroke.
//! It holds a small, immutable corpus of records (pages, publications, blog
//! posts, teaching materials) and answers two questions: which records match
//! this query, best first (`search`), and how might this partial word end
//! (`suggest`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│   types.rs   │────▶│  search/*    │
//! │ (PORTFOLIO, │     │(ContentIndex,│     │(search,      │
//! │  bundled)   │     │ Record, Kind)│     │ suggest)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │           verify/*            scoring.rs            │
//! │  (compile-time + runtime      (field weights,       │
//! │   index invariants)            Haystack)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use folio::{search, suggest, ContentIndex};
//!
//! let index = ContentIndex::bundled();
//!
//! for record in search(index, "monetary policy") {
//!     println!("{} -> {}", record.title, record.target);
//! }
//!
//! let completions = suggest(index, "macro");
//! assert!(completions.len() <= 5);
//! ```
//!
//! Every engine function takes the index explicitly, so tests can build as
//! many independent indices as they need with `ContentIndex::new`.

// Module declarations
mod corpus;
pub mod scoring;
pub mod search;
mod types;
pub mod verify;

pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use corpus::{MetaDef, RecordDef, PORTFOLIO};
pub use scoring::{
    score_record, COMBINED_WEIGHT, CONTENT_WEIGHT, EXCERPT_WEIGHT, TAG_WEIGHT, TITLE_WEIGHT,
};
pub use search::{
    parse_query, search, search_scored, search_with, suggest, ScoredRecord, SearchOptions,
    MAX_RESULTS, MAX_SUGGESTIONS,
};
pub use types::{ContentIndex, Kind, Metadata, Record};
pub use verify::{validate_records, IndexError, InvariantError};

#[cfg(feature = "wasm")]
pub use wasm::FolioSearcher;
