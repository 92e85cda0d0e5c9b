//! Tag constants for the Markdown walker.
//!
//! Provides both arrays (for iteration) and `HashSets` (for O(1) lookup).

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Non-content containers: never emitted, never walked.
pub static SKIP_TAGS: [&str; 5] = ["style", "script", "noscript", "template", "svg"];

/// Containers whose text is never copied when met as an ancestor of a text node.
pub static TEXT_EXCLUDED_TAGS: [&str; 4] = ["style", "script", "noscript", "template"];

/// Heading tags, in level order.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Bold tags: strong, b
pub static BOLD_TAGS: [&str; 2] = ["strong", "b"];

/// Italic tags: em, i
pub static ITALIC_TAGS: [&str; 2] = ["em", "i"];

/// Strikethrough tags: del, s, strike
pub static STRIKE_TAGS: [&str; 3] = ["del", "s", "strike"];

/// List container tags: ul, ol
pub static LIST_TAGS: [&str; 2] = ["ul", "ol"];

/// Structural block containers passed through without decoration.
pub static BLOCK_TAGS: [&str; 3] = ["div", "section", "article"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `SKIP_TAGS` as a `HashSet`
pub static SKIP_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SKIP_TAGS.into_iter().collect());

/// `TEXT_EXCLUDED_TAGS` as a `HashSet`
pub static TEXT_EXCLUDED_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| TEXT_EXCLUDED_TAGS.into_iter().collect());

// === Helper Functions ===

/// Check if tag is a non-content container (style, script, svg, ...)
#[inline]
#[must_use]
pub fn is_skip_tag(tag: &str) -> bool {
    SKIP_TAG_SET.contains(tag)
}

/// Check if text below this tag is excluded from copying
#[inline]
#[must_use]
pub fn is_text_excluded_tag(tag: &str) -> bool {
    TEXT_EXCLUDED_TAG_SET.contains(tag)
}

/// Heading level (1-6) for h1..h6
#[must_use]
pub fn heading_level(tag: &str) -> Option<usize> {
    HEADING_TAGS.iter().position(|h| *h == tag).map(|i| i + 1)
}

/// Check if tag is a bold tag
#[inline]
#[must_use]
pub fn is_bold_tag(tag: &str) -> bool {
    BOLD_TAGS.contains(&tag)
}

/// Check if tag is an italic tag
#[inline]
#[must_use]
pub fn is_italic_tag(tag: &str) -> bool {
    ITALIC_TAGS.contains(&tag)
}

/// Check if tag is a strikethrough tag
#[inline]
#[must_use]
pub fn is_strike_tag(tag: &str) -> bool {
    STRIKE_TAGS.contains(&tag)
}

/// Check if tag is a list container (ul, ol)
#[inline]
#[must_use]
pub fn is_list_tag(tag: &str) -> bool {
    LIST_TAGS.contains(&tag)
}

/// Check if tag is a structural block container
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}
