// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: index invariants checked before any search runs.
//!
//! Two complementary checks:
//!
//! 1. **Runtime validation** (`validate_records`) for corpora that arrive as
//!    data: JSON files, WASM callers, test fixtures. `ContentIndex::new` is the
//!    only constructor and it always runs this.
//!
//! 2. **Compile-time contracts** for the bundled literal corpus. The checks are
//!    `const fn`, so a duplicate id in `corpus.rs` is a build error, not a
//!    surprise at query time.

mod types;
pub mod contracts;

pub use types::*;
