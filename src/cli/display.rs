// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and drops colors entirely when stdout isn't a TTY, so piping results into
//! other tools gives plain text.
//!
//! # Theme detection order
//!
//! 1. `FOLIO_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use folio::{Kind, Record, ScoredRecord};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 or 9-15 is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// OneDark palette
mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

/// One Light palette
mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` characters, ending in an ellipsis when shortened
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!(
        "{}",
        themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded record kind badge, padded so titles line up
pub fn kind_label(kind: Kind) -> String {
    let text = format!("[{}]", kind);
    let colored = match kind {
        Kind::Page => themed(GRAY, &[], &text),
        Kind::Publication => themed(GREEN, &[], &text),
        Kind::Blog => themed(BLUE, &[], &text),
        Kind::Teaching => themed(MAGENTA, &[], &text),
    };
    pad_right(&colored, 13)
}

/// Color-coded score value
pub fn score_value(score: u32) -> String {
    let text = format!("{:>4}", score);
    if score >= 20 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 10 {
        themed(GREEN, &[], &text)
    } else if score >= 5 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// One-line summary of a record's display metadata, if it has any
pub fn metadata_line(record: &Record) -> Option<String> {
    let meta = record.metadata.as_ref()?;
    let mut parts: Vec<String> = Vec::new();
    if let Some(journal) = &meta.journal {
        parts.push(journal.clone());
    }
    if let Some(year) = meta.year {
        parts.push(year.to_string());
    }
    if let Some(date) = &meta.date {
        parts.push(date.clone());
    }
    if let Some(tags) = &meta.tags {
        parts.extend(tags.iter().cloned());
    }
    (!parts.is_empty()).then(|| parts.join(" · "))
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Boxed, ranked search results.
pub fn print_results(query: &str, hits: &[ScoredRecord<'_>], show_scores: bool) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    if hits.is_empty() {
        row(&themed(GRAY, &[DIM], "  no matches"));
    }
    for (rank, hit) in hits.iter().enumerate() {
        let score = if show_scores {
            format!("{} ", score_value(hit.score))
        } else {
            String::new()
        };
        let title = truncate(&hit.record.title, 48);
        row(&format!(
            " {:>2}. {}{} {}",
            rank + 1,
            score,
            kind_label(hit.record.kind),
            themed(YELLOW, &[BOLD], &title)
        ));

        let detail = metadata_line(hit.record)
            .or_else(|| hit.record.excerpt.clone())
            .unwrap_or_default();
        let target = format!("→ {}", hit.record.target);
        let indent = if show_scores { 10 } else { 5 };
        row(&format!(
            "{}{}  {}",
            " ".repeat(indent),
            themed(CYAN, &[], &target),
            themed(GRAY, &[], &truncate(&detail, 56))
        ));
    }
    section_bot();
}

/// Boxed suggestion list.
pub fn print_suggestions(prefix: &str, suggestions: &[String]) {
    section_top(&format!("SUGGEST \"{}\"", truncate(prefix, 40)));
    if suggestions.is_empty() {
        row(&themed(GRAY, &[DIM], "  no suggestions"));
    }
    for suggestion in suggestions {
        row(&format!("  {}", themed(GREEN, &[], suggestion)));
    }
    section_bot();
}

/// Boxed corpus listing.
pub fn print_records<'a>(records: impl IntoIterator<Item = &'a Record>) {
    section_top("CORPUS");
    let mut count = 0;
    for record in records {
        count += 1;
        row(&format!(
            " {} {}",
            kind_label(record.kind),
            truncate(&record.title, 64)
        ));
    }
    row(&themed(GRAY, &[DIM], &format!("  {} records", count)));
    section_bot();
}
