// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured logging setup for the CLI.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. Filter precedence: `FOLIO_LOG`, then `--log-level`, then
//! `--verbose`, then warnings only.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a compact stderr subscriber.
pub fn init_tracing(verbose: bool, log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Filter directive from CLI flags alone.
///
/// A bare level like "debug" is scoped to this crate; anything with `=` is
/// passed through as written.
fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("folio={}", level),
        (true, None) => "folio=debug".to_string(),
        (false, None) => "folio=warn".to_string(),
    }
}
