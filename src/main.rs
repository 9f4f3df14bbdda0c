// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use folio::{search_with, suggest, ContentIndex, Kind, SearchOptions};
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

mod cli;
use cli::display;
use cli::{Cli, Commands};

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("⚠️  logging disabled: {}", e);
    }

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> CliResult {
    match command {
        Commands::Search {
            query,
            corpus,
            limit,
            kinds,
            scores,
            json,
        } => {
            let index = corpus.load()?;
            let options = SearchOptions {
                limit,
                kinds: (!kinds.is_empty()).then_some(kinds),
            };
            run_search(&index, &query.join(" "), &options, scores, json)
        }
        Commands::Suggest {
            prefix,
            corpus,
            json,
        } => {
            let index = corpus.load()?;
            run_suggest(&index, &prefix, json)
        }
        Commands::List { corpus, kinds } => {
            let index = corpus.load()?;
            display::print_records(
                index
                    .records()
                    .iter()
                    .filter(|r| kinds.is_empty() || kinds.contains(&r.kind)),
            );
            Ok(())
        }
        Commands::Validate { file } => run_validate(&file),
    }
}

fn run_search(
    index: &ContentIndex,
    query: &str,
    options: &SearchOptions,
    scores: bool,
    json: bool,
) -> CliResult {
    let hits = search_with(index, query, options);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        display::print_results(query, &hits, scores);
    }
    Ok(())
}

fn run_suggest(index: &ContentIndex, prefix: &str, json: bool) -> CliResult {
    let suggestions = suggest(index, prefix);

    if json {
        println!("{}", serde_json::to_string(&suggestions)?);
    } else {
        display::print_suggestions(prefix, &suggestions);
    }
    Ok(())
}

/// Load a corpus file and report what's in it. Errors propagate to `main`,
/// which prints them and exits non-zero.
fn run_validate(file: &Path) -> CliResult {
    let index = ContentIndex::from_path(file)?;

    let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
    for record in index.records() {
        *by_kind.entry(record.kind.as_str()).or_default() += 1;
    }

    eprintln!("✅ {} is a valid corpus", file.display());
    eprint!("   {} records", index.len());
    for kind in Kind::ALL {
        if let Some(count) = by_kind.get(kind.as_str()) {
            eprint!(" │ {} {}", count, kind);
        }
    }
    eprintln!();
    Ok(())
}
