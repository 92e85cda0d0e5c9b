//! Tree walk orchestration.
//!
//! `Extractor::node_content` (one element) and `Extractor::children_content`
//! (its child sequence) call each other down the tree. Classification picks
//! a handler per element; leaf kinds stop the descent. The final string is
//! cleaned once, at the very end, by `normalize_output`.

use crate::dom::{self, NodeRef};
use crate::options::Options;
use crate::patterns::MULTIPLE_NEWLINES;
use crate::sources::NodeSources;

use super::classify::{classify, in_excluded_region, NodeKind};
use super::handlers;
use super::state::Context;
use super::tags::is_list_tag;

/// Markdown extractor bound to a configuration and a side-table.
///
/// Holds no mutable state: one extractor can be reused for any number of
/// roots from the document its side-table was built for.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    options: &'a Options,
    sources: &'a NodeSources,
}

impl<'a> Extractor<'a> {
    #[must_use]
    pub fn new(options: &'a Options, sources: &'a NodeSources) -> Self {
        Self { options, sources }
    }

    /// Extract normalized Markdown from `root`.
    #[must_use]
    pub fn extract(&self, root: &NodeRef) -> String {
        let raw = self.node_content(root, Context::root());
        normalize_output(&raw)
    }

    /// Markdown fragment for one element, before normalization.
    #[must_use]
    pub fn node_content(&self, node: &NodeRef, ctx: Context) -> String {
        if ctx.exceeds(self.options.max_depth) {
            log::warn!(
                "depth limit {} reached; dropping subtree",
                self.options.max_depth
            );
            return String::new();
        }

        let opts = self.options;
        let kind = classify(node, opts);
        let inner = ctx.descend(kind);

        match kind {
            NodeKind::Skip | NodeKind::Control => String::new(),
            NodeKind::Diagram => handlers::handle_diagram(node, self.sources, opts),
            NodeKind::Table => handlers::handle_table(node, opts),
            NodeKind::InlinePre => handlers::handle_inline_pre(node, opts),
            NodeKind::Pre | NodeKind::CodeBlock => handlers::handle_code_block(node, opts),
            NodeKind::Heading(level) => {
                handlers::handle_heading(level, &self.children_content(node, inner))
            }
            NodeKind::Bold => handlers::handle_emphasis(&self.children_content(node, inner), "**"),
            NodeKind::Italic => handlers::handle_emphasis(&self.children_content(node, inner), "*"),
            NodeKind::Strikethrough => {
                handlers::handle_emphasis(&self.children_content(node, inner), "~~")
            }
            NodeKind::InlineCode => handlers::handle_inline_code(node, opts),
            NodeKind::Link => handlers::handle_link(node, &self.children_content(node, inner)),
            NodeKind::ListItem => self.list_item_content(node, inner),
            NodeKind::List { .. } => handlers::handle_list(node, &self.children_content(node, inner)),
            NodeKind::Paragraph => handlers::handle_paragraph(&self.children_content(node, inner)),
            NodeKind::LineBreak => "\n".to_string(),
            NodeKind::BlockQuote => {
                handlers::handle_blockquote(&self.children_content(node, inner))
            }
            NodeKind::Rule => "\n---\n".to_string(),
            NodeKind::Block | NodeKind::Other => self.children_content(node, inner),
        }
    }

    /// Concatenate the contributions of `node`'s children, in order.
    ///
    /// Whitespace-only text containing a newline is layout and dropped; other
    /// whitespace-only text becomes at most one separating space. Text inside
    /// excluded regions is never copied.
    #[must_use]
    pub fn children_content(&self, node: &NodeRef, ctx: Context) -> String {
        let mut out = String::new();
        let mut excluded: Option<bool> = None;

        for child in node.children() {
            if child.is_text() {
                let text = child.text();
                if text.trim().is_empty() {
                    if text.contains('\n') {
                        continue;
                    }
                    if !out.is_empty() && !out.ends_with(' ') && !out.ends_with('\n') {
                        out.push(' ');
                    }
                    continue;
                }
                if *excluded.get_or_insert_with(|| in_excluded_region(node, self.options)) {
                    continue;
                }
                out.push_str(&text);
            } else if child.is_element() {
                out.push_str(&self.node_content(&child, ctx));
            }
        }

        out
    }

    /// List item: inline content on the marker line, nested lists below it.
    fn list_item_content(&self, node: &NodeRef, ctx: Context) -> String {
        let mut text = String::new();
        let mut nested = String::new();
        let mut excluded: Option<bool> = None;

        for child in node.children() {
            if child.is_element() {
                let is_nested_list = dom::tag_name(&child).is_some_and(|t| is_list_tag(&t));
                let content = self.node_content(&child, ctx);
                if is_nested_list {
                    nested.push_str(&content);
                } else {
                    text.push_str(&content);
                }
            } else if child.is_text() {
                if *excluded.get_or_insert_with(|| in_excluded_region(node, self.options)) {
                    continue;
                }
                text.push_str(&child.text());
            }
        }

        handlers::handle_list_item(node, &text, &nested, self.options)
    }
}

/// Collapse runs of three or more newlines to two and trim the result.
///
/// # Examples
///
/// ```
/// use rs_mdcopy::extractor::normalize_output;
///
/// assert_eq!(normalize_output("\n\n# Title\n\n\n\ntext\n"), "# Title\n\ntext");
/// ```
#[must_use]
pub fn normalize_output(markdown: &str) -> String {
    MULTIPLE_NEWLINES
        .replace_all(markdown, "\n\n")
        .trim()
        .to_string()
}

/// Extract normalized Markdown from `root`.
///
/// The tree is only read. Calling this twice on an unchanged tree returns
/// the same string.
#[must_use]
pub fn extract_formatted_text(root: &NodeRef, sources: &NodeSources, options: &Options) -> String {
    Extractor::new(options, sources).extract(root)
}

/// Non-fatal issues the walk will run into below `root`: diagram
/// containers without a recorded source and subtrees past the depth limit.
#[must_use]
pub fn scan_warnings(root: &NodeRef, sources: &NodeSources, options: &Options) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut missing_sources = 0usize;
    let mut truncated = false;
    let mut stack = vec![(*root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if !node.is_element() {
            continue;
        }
        if depth > options.max_depth {
            truncated = true;
            continue;
        }
        let kind = classify(&node, options);
        if kind == NodeKind::Diagram && sources.diagram_source(&node).is_none_or(str::is_empty) {
            missing_sources += 1;
        }
        if kind.is_leaf() {
            continue;
        }
        stack.extend(node.children().into_iter().map(|c| (c, depth + 1)));
    }

    if missing_sources > 0 {
        warnings.push(format!(
            "{missing_sources} diagram container(s) without recorded source were skipped"
        ));
    }
    if truncated {
        warnings.push(format!(
            "content nested deeper than {} levels was dropped",
            options.max_depth
        ));
    }
    warnings
}
