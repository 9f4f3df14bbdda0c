// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the navigation bar search box.
//!
//! `FolioSearcher` wraps a `ContentIndex` and exposes `search` and `suggest`
//! to JavaScript. Results cross the boundary through `serde-wasm-bindgen`, so
//! the JS side receives plain objects shaped like the TypeScript interface
//! the nav component already expects.

use crate::search::{search_with, suggest, SearchOptions};
use crate::types::{ContentIndex, Kind, Metadata, Record};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
///
/// `target` goes straight back to the page router when a result is picked.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    id: &'a str,
    title: &'a str,
    kind: Kind,
    target: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Metadata>,
}

impl<'a> From<&'a Record> for SearchResultOutput<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            id: &record.id,
            title: &record.title,
            kind: record.kind,
            target: &record.target,
            excerpt: record.excerpt.as_deref(),
            metadata: record.metadata.as_ref(),
        }
    }
}

/// Search options passed from JavaScript.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct JsSearchOptions {
    /// Maximum number of results to return (default: 10)
    limit: Option<usize>,
    /// Restrict to these kinds (default: all)
    kinds: Option<Vec<Kind>>,
}

impl From<JsSearchOptions> for SearchOptions {
    fn from(js: JsSearchOptions) -> Self {
        let defaults = SearchOptions::default();
        SearchOptions {
            limit: js.limit.unwrap_or(defaults.limit),
            kinds: js.kinds,
        }
    }
}

/// WASM-accessible searcher.
#[wasm_bindgen]
pub struct FolioSearcher {
    index: ContentIndex,
}

#[wasm_bindgen]
impl FolioSearcher {
    /// Create a searcher over a JS array of records.
    ///
    /// Fails if the records don't deserialize or break an index invariant.
    #[wasm_bindgen(constructor)]
    pub fn new(records: JsValue) -> Result<FolioSearcher, JsValue> {
        let records: Vec<Record> = from_value(records).map_err(|e| e.to_string())?;
        let index = ContentIndex::new(records).map_err(|e| e.to_string())?;
        Ok(FolioSearcher { index })
    }

    /// Create a searcher over the bundled portfolio corpus.
    pub fn bundled() -> FolioSearcher {
        FolioSearcher {
            index: ContentIndex::bundled().clone(),
        }
    }

    /// Ranked results for `query`, at most 10 unless `options.limit` says otherwise.
    pub fn search(&self, query: &str, options: JsValue) -> Result<JsValue, JsValue> {
        let options: SearchOptions = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value::<JsSearchOptions>(options)
                .map_err(|e| e.to_string())?
                .into()
        };

        let results: Vec<SearchResultOutput> = search_with(&self.index, query, &options)
            .into_iter()
            .map(|hit| SearchResultOutput::from(hit.record))
            .collect();

        to_value(&results).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Up to 5 lowercase completions for `query`.
    pub fn suggest(&self, query: &str) -> Result<JsValue, JsValue> {
        to_value(&suggest(&self.index, query)).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of records in the index.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.index.len()
    }
}
