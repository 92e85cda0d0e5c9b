//! Compiled regex patterns for Markdown detection and output cleanup.
//!
//! All patterns are compiled once at first use using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Output Normalization
// =============================================================================

/// Three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

// =============================================================================
// Markdown Likeness (applied to trimmed lines)
// =============================================================================

/// A GFM table separator cell followed by a pipe: `---|`, `| :---: |`.
pub static MD_TABLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\|?\s*:?-{3,}:?\s*)\|").expect("MD_TABLE_SEPARATOR regex")
});

/// An ATX heading: one to six `#` then whitespace.
pub static MD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+").expect("MD_HEADING regex"));

/// A bullet list item: `-`, `*` or `+` then whitespace.
pub static MD_BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+").expect("MD_BULLET_ITEM regex"));

/// An ordered list item: digits, a dot, then whitespace.
pub static MD_ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("MD_ORDERED_ITEM regex"));
