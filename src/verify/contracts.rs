// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compile-time contracts for the bundled corpus and the scoring weights.
//!
//! Everything here is `const fn`, so the checks run inside `const _: () = ...`
//! blocks and a violation stops the build. The runtime validator in
//! `verify::types` checks the same properties for data that shows up later.
//!
//! | Contract                  | Checked against                  |
//! |---------------------------|----------------------------------|
//! | `ids_are_unique`          | `corpus::PORTFOLIO`              |
//! | `required_fields_present` | `corpus::PORTFOLIO`              |
//! | field weight ordering     | `scoring::*_WEIGHT` constants    |

use crate::corpus::RecordDef;
use crate::scoring::{COMBINED_WEIGHT, CONTENT_WEIGHT, EXCERPT_WEIGHT, TAG_WEIGHT, TITLE_WEIGHT};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Title outranks tags outranks content outranks excerpt outranks the
/// combined haystack bonus. If someone retunes a weight and breaks the
/// order, the crate won't build.
const _: () = {
    assert!(TITLE_WEIGHT > TAG_WEIGHT);
    assert!(TAG_WEIGHT > CONTENT_WEIGHT);
    assert!(CONTENT_WEIGHT > EXCERPT_WEIGHT);
    assert!(EXCERPT_WEIGHT > COMBINED_WEIGHT);
    assert!(COMBINED_WEIGHT > 0);
};

// ============================================================================
// CONST STRING HELPERS
// ============================================================================

/// Byte-wise string equality usable in const context.
pub const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// True if the string is empty or only ASCII whitespace.
///
/// Non-ASCII whitespace counts as content here; the runtime check uses
/// `str::trim` and is the stricter of the two.
pub const fn is_blank(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}

// ============================================================================
// CORPUS CONTRACTS
// ============================================================================

/// No two records in the table share an id.
pub const fn ids_are_unique(defs: &[RecordDef]) -> bool {
    let mut i = 0;
    while i < defs.len() {
        let mut j = i + 1;
        while j < defs.len() {
            if str_eq(defs[i].id, defs[j].id) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Every record has a non-blank id, title and content.
pub const fn required_fields_present(defs: &[RecordDef]) -> bool {
    let mut i = 0;
    while i < defs.len() {
        let def = &defs[i];
        if is_blank(def.id) || is_blank(def.title) || is_blank(def.content) {
            return false;
        }
        i += 1;
    }
    true
}
