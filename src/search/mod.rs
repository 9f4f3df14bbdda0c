// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: ranked search and autocomplete.
//!
//! Both entry points are pure functions of `(index, query)`. No caching, no
//! state between calls, no I/O. Call them on every keystroke if you like.

mod ranked;
mod suggest;
pub mod utils;

pub use ranked::*;
pub use suggest::*;
pub use utils::parse_query;
