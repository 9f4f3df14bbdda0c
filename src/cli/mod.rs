// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Four subcommands: `search` and `suggest` run the same engine the nav bar
//! uses, `list` prints the corpus, and `validate` checks a JSON corpus file
//! against the index invariants. Every command reads the bundled corpus unless
//! `--corpus` (or `FOLIO_CORPUS`) points at a JSON file.

pub mod display;
pub mod logging;

use clap::{Args, Parser, Subcommand};
use folio::{ContentIndex, IndexError, Kind};
use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Field-weighted search over an academic portfolio",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Explicit log filter, e.g. "trace" or "folio=debug"
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank corpus records against a query
    Search {
        /// Search query (several words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        corpus: CorpusArgs,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Only show records of this kind (repeatable)
        #[arg(short, long = "kind", value_parser = parse_kind)]
        kinds: Vec<Kind>,

        /// Show each result's score
        #[arg(long)]
        scores: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Autocomplete a partial word
    Suggest {
        /// Prefix to complete
        prefix: String,

        #[command(flatten)]
        corpus: CorpusArgs,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every record in the corpus
    List {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Only show records of this kind (repeatable)
        #[arg(short, long = "kind", value_parser = parse_kind)]
        kinds: Vec<Kind>,
    },

    /// Check a JSON corpus file against the index invariants
    Validate {
        /// Path to a JSON array of records
        file: PathBuf,
    },
}

/// Where to read the corpus from.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// JSON corpus file (defaults to the bundled portfolio)
    #[arg(long, env = "FOLIO_CORPUS")]
    pub corpus: Option<PathBuf>,
}

impl CorpusArgs {
    /// Load the requested corpus. The bundled one is borrowed, not cloned.
    pub fn load(&self) -> Result<Cow<'static, ContentIndex>, IndexError> {
        match &self.corpus {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading corpus file");
                ContentIndex::from_path(path).map(Cow::Owned)
            }
            None => Ok(Cow::Borrowed(ContentIndex::bundled())),
        }
    }
}

fn parse_kind(value: &str) -> Result<Kind, String> {
    Kind::parse(value).ok_or_else(|| {
        format!(
            "unknown kind '{}' (expected one of: page, publication, blog, teaching)",
            value
        )
    })
}
