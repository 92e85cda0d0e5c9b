//! Code language classifiers.
//!
//! Pure functions used when fencing a code block: tag normalization, a
//! "this already looks like Markdown" heuristic, and the layered resolution
//! of a block's language from attributes, a preceding caption, or its text.

use crate::dom::{self, NodeRef};
use crate::options::Options;
use crate::patterns::{MD_BULLET_ITEM, MD_HEADING, MD_ORDERED_ITEM, MD_TABLE_SEPARATOR};

/// Normalize a language tag: trim, lowercase, `markdown` becomes `md`.
///
/// # Examples
///
/// ```
/// use rs_mdcopy::language::normalize_language;
///
/// assert_eq!(normalize_language("  Python "), "python");
/// assert_eq!(normalize_language("Markdown"), "md");
/// assert_eq!(normalize_language("   "), "");
/// ```
#[must_use]
pub fn normalize_language(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered == "markdown" {
        return "md".to_string();
    }
    lowered
}

/// Heuristic test for text that is itself Markdown source.
///
/// True when any line is an ATX heading or a list item, or when the text
/// has a pipe somewhere together with a table separator line.
#[must_use]
pub fn looks_like_markdown(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let has_table = lines.iter().any(|line| line.contains('|'))
        && lines.iter().any(|line| MD_TABLE_SEPARATOR.is_match(line));
    let has_heading = lines.iter().any(|line| MD_HEADING.is_match(line));
    let has_list = lines
        .iter()
        .any(|line| MD_BULLET_ITEM.is_match(line) || MD_ORDERED_ITEM.is_match(line));

    has_table || has_heading || has_list
}

/// Resolve the language of a code block, first non-empty answer wins:
///
/// 1. a language attribute on the element, its nearest `<pre>`, or its parent
/// 2. the text of the element sibling right before the block, if it names a
///    known language
/// 3. `md` when the code text looks like Markdown
#[must_use]
pub fn resolve_code_language(
    element: &NodeRef,
    code_text: &str,
    options: &Options,
) -> Option<String> {
    let pre = dom::closest(element, |n| dom::is_tag(n, "pre"));

    let candidates = [Some(*element), pre, dom::parent_element(element)];
    for target in candidates.iter().flatten() {
        if let Some(lang) = language_attribute(target, options) {
            return Some(lang);
        }
    }

    let anchor = pre.unwrap_or(*element);
    if let Some(prev) = dom::previous_element_sibling(&anchor) {
        let label = normalize_language(&dom::text_content(&prev));
        if !label.is_empty() && options.is_known_language(&label) {
            return Some(label);
        }
    }

    if looks_like_markdown(code_text) {
        return Some("md".to_string());
    }

    None
}

fn language_attribute(node: &NodeRef, options: &Options) -> Option<String> {
    options
        .language_attributes
        .iter()
        .filter_map(|attr| dom::get_attribute(node, attr))
        .map(|raw| normalize_language(&raw))
        .find(|lang| !lang.is_empty())
}
