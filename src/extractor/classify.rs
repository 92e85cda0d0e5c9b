//! Node classification.
//!
//! Every element is mapped once to a closed `NodeKind` before dispatch. The
//! predicates overlap (a `<pre>` may also carry the code-block class, a
//! diagram container is usually a `<div>`), so `classify` checks them in a
//! fixed priority order and the first match wins.

use crate::dom::{self, NodeRef};
use crate::options::Options;

use super::tags::{
    heading_level, is_block_tag, is_bold_tag, is_italic_tag, is_list_tag, is_skip_tag,
    is_strike_tag, is_text_excluded_tag,
};

/// What an element contributes to the Markdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// style, script, noscript, template, svg
    Skip,
    /// UI-injected copy/feedback control
    Control,
    /// Rendered diagram; its source lives in the side-table
    Diagram,
    Table,
    /// `<pre>` carrying the inline marker
    InlinePre,
    Pre,
    /// Code-block marker class on a non-`<pre>` element
    CodeBlock,
    Heading(usize),
    Bold,
    Italic,
    Strikethrough,
    /// `<code>` outside any `<pre>`
    InlineCode,
    Link,
    ListItem,
    List { ordered: bool },
    Paragraph,
    LineBreak,
    BlockQuote,
    Rule,
    /// div, section, article
    Block,
    Other,
}

impl NodeKind {
    /// Whether the walker stops at this node instead of visiting its children.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::Skip
                | Self::Control
                | Self::Diagram
                | Self::Table
                | Self::InlinePre
                | Self::Pre
                | Self::CodeBlock
                | Self::InlineCode
                | Self::LineBreak
                | Self::Rule
        )
    }
}

/// Classify an element. Non-element nodes are `Other`.
#[must_use]
pub fn classify(node: &NodeRef, options: &Options) -> NodeKind {
    let Some(tag) = dom::tag_name(node) else {
        return NodeKind::Other;
    };
    let tag = tag.as_str();

    if is_skip_tag(tag) {
        return NodeKind::Skip;
    }
    if is_control(node, options) {
        return NodeKind::Control;
    }
    if dom::has_class(node, &options.diagram_class) {
        return NodeKind::Diagram;
    }
    if tag == "table" {
        return NodeKind::Table;
    }
    if tag == "pre" {
        if dom::has_class(node, &options.inline_code_class) {
            return NodeKind::InlinePre;
        }
        return NodeKind::Pre;
    }
    if dom::has_class(node, &options.code_block_class) {
        return NodeKind::CodeBlock;
    }
    if let Some(level) = heading_level(tag) {
        return NodeKind::Heading(level);
    }
    if is_bold_tag(tag) {
        return NodeKind::Bold;
    }
    if is_italic_tag(tag) {
        return NodeKind::Italic;
    }
    if is_strike_tag(tag) {
        return NodeKind::Strikethrough;
    }
    if tag == "code" && !dom::has_ancestor(node, |n| dom::is_tag(n, "pre")) {
        return NodeKind::InlineCode;
    }

    match tag {
        "a" => NodeKind::Link,
        "li" => NodeKind::ListItem,
        "p" => NodeKind::Paragraph,
        "br" => NodeKind::LineBreak,
        "blockquote" => NodeKind::BlockQuote,
        "hr" => NodeKind::Rule,
        t if is_list_tag(t) => NodeKind::List { ordered: t == "ol" },
        t if is_block_tag(t) => NodeKind::Block,
        _ => NodeKind::Other,
    }
}

/// Whether an element is a UI-injected control.
#[inline]
#[must_use]
pub fn is_control(node: &NodeRef, options: &Options) -> bool {
    node.attr("class").is_some_and(|c| {
        c.split_ascii_whitespace()
            .any(|token| options.is_control_class(token))
    })
}

/// Whether text found directly under `parent` must not be copied: some
/// element from `parent` up to the document root is a non-content
/// container, an injected control, a code block, or a `<pre>`.
#[must_use]
pub fn in_excluded_region(parent: &NodeRef, options: &Options) -> bool {
    dom::closest(parent, |n| {
        dom::tag_name(n).is_some_and(|t| is_text_excluded_tag(&t) || t == "pre")
            || is_control(n, options)
            || dom::has_class(n, &options.code_block_class)
    })
    .is_some()
}

/// Whether text below `node` is hidden from plain-text reads (cell text,
/// code text): non-content containers and injected controls.
#[must_use]
pub fn hides_text(node: &NodeRef, options: &Options) -> bool {
    dom::tag_name(node).is_some_and(|t| is_skip_tag(&t)) || is_control(node, options)
}
