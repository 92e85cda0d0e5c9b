//! Element handlers, one per node kind.
//!
//! Leaf handlers read their element directly and never recurse. Wrapping
//! handlers receive the already-extracted content of their children and
//! only decorate it.

use crate::dom::{self, NodeRef};
use crate::language::resolve_code_language;
use crate::markdown::{
    code_span, extract_code_text, fenced_block, quote_lines, table_to_markdown, visible_text,
};
use crate::options::Options;
use crate::sources::NodeSources;

use super::classify::is_control;
use super::tags::is_list_tag;

// === Leaf handlers ===

/// Diagram container: fence the recorded source, never the rendered markup.
#[must_use]
pub fn handle_diagram(node: &NodeRef, sources: &NodeSources, options: &Options) -> String {
    match sources.diagram_source(node) {
        Some(source) if !source.is_empty() => {
            fenced_block(Some(&options.diagram_language), source)
        }
        _ => {
            log::debug!("diagram container without recorded source; skipping");
            String::new()
        }
    }
}

/// Table: pipe rows surrounded by newlines, or nothing.
#[must_use]
pub fn handle_table(node: &NodeRef, options: &Options) -> String {
    let table = table_to_markdown(node, options);
    let table = table.trim_end();
    if table.is_empty() {
        return String::new();
    }
    format!("\n{table}\n")
}

/// `<pre>` carrying the inline marker: a code span of its `<code>` child
/// (or its own text).
#[must_use]
pub fn handle_inline_pre(node: &NodeRef, options: &Options) -> String {
    let code = node
        .descendants()
        .into_iter()
        .find(|n| dom::is_tag(n, "code"));
    let text = visible_text(code.as_ref().unwrap_or(node), options);
    code_span(&text)
}

/// `<pre>` or code-block root: fenced block with a resolved language.
///
/// Trailing whitespace is dropped; leading and inner whitespace are kept.
#[must_use]
pub fn handle_code_block(node: &NodeRef, options: &Options) -> String {
    let code = extract_code_text(node, options);
    let code = code.trim_end();
    if code.is_empty() {
        return String::new();
    }
    let language = resolve_code_language(node, code, options);
    fenced_block(language.as_deref(), code)
}

/// `<code>` outside `<pre>`: literal text as a code span.
#[must_use]
pub fn handle_inline_code(node: &NodeRef, options: &Options) -> String {
    code_span(&visible_text(node, options))
}

// === Wrapping handlers ===

/// `#`-prefixed heading line.
#[must_use]
pub fn handle_heading(level: usize, content: &str) -> String {
    format!("\n{} {}\n", "#".repeat(level), content.trim())
}

/// Inline emphasis: `marker` on both sides of the trimmed content.
#[must_use]
pub fn handle_emphasis(content: &str, marker: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{marker}{trimmed}{marker}")
}

/// Whether an href is worth emitting as a Markdown link target.
#[must_use]
pub fn is_linkable_href(href: &str) -> bool {
    let href = href.trim();
    if href.is_empty() || href == "#" {
        return false;
    }
    let scheme = href.get(..11).unwrap_or(href);
    !scheme.eq_ignore_ascii_case("javascript:")
}

/// Anchor: `[text](href)` or bare text when the href is unusable.
#[must_use]
pub fn handle_link(node: &NodeRef, content: &str) -> String {
    let text = content.trim();
    if text.is_empty() {
        return String::new();
    }
    match dom::get_attribute(node, "href") {
        Some(href) if is_linkable_href(&href) => format!("[{text}]({})", href.trim()),
        _ => text.to_string(),
    }
}

/// Marker for a list item: `- ` or `n. `, indented two spaces per
/// enclosing list beyond the first.
///
/// Ordered items are numbered among their `li` siblings; control items are
/// not counted.
#[must_use]
pub fn list_item_prefix(node: &NodeRef, options: &Options) -> String {
    let depth = dom::count_ancestors(node, |n| dom::tag_name(n).is_some_and(|t| is_list_tag(&t)));
    let indent = "  ".repeat(depth.saturating_sub(1));

    let ordered_parent = dom::parent_element(node).filter(|p| dom::is_tag(p, "ol"));
    if let Some(list) = ordered_parent {
        let position = dom::element_children(&list)
            .iter()
            .filter(|c| dom::is_tag(c, "li") && !is_control(c, options))
            .position(|c| c.id == node.id)
            .map_or(1, |i| i + 1);
        return format!("{indent}{position}. ");
    }

    format!("{indent}- ")
}

/// List item line followed directly by its nested lists.
///
/// An item with neither text nor nested content collapses to nothing.
#[must_use]
pub fn handle_list_item(node: &NodeRef, text: &str, nested: &str, options: &Options) -> String {
    let text = text.trim();
    if text.is_empty() && nested.trim().is_empty() {
        return String::new();
    }
    format!("{}{text}\n{nested}", list_item_prefix(node, options))
}

/// List container: top-level lists get a leading newline; nested lists are
/// indented by their items.
#[must_use]
pub fn handle_list(node: &NodeRef, content: &str) -> String {
    if dom::has_ancestor(node, |n| dom::is_tag(n, "li")) {
        return content.to_string();
    }
    format!("\n{content}")
}

/// Paragraph surrounded by newlines, or nothing.
#[must_use]
pub fn handle_paragraph(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("\n{trimmed}\n")
}

/// Block quote: every line prefixed with `> `.
#[must_use]
pub fn handle_blockquote(content: &str) -> String {
    format!("\n{}\n", quote_lines(content.trim()))
}
