//! Markdown leaf builders.
//!
//! Each function here consumes one element (or one already-extracted string)
//! and produces one Markdown fragment without recursing through the
//! dispatcher: tables, fenced code, inline code spans, quoted lines.

use dom_query::Selection;

use crate::dom::{self, NodeRef};
use crate::extractor::classify::hides_text;
use crate::options::Options;

/// Text content of `node` without text under non-content containers or
/// injected controls.
///
/// Like `textContent`, whitespace is preserved exactly.
#[must_use]
pub fn visible_text(node: &NodeRef, options: &Options) -> String {
    let mut out = String::new();
    let mut stack: Vec<NodeRef> = node.children().into_iter().rev().collect();

    while let Some(current) = stack.pop() {
        if current.is_text() {
            out.push_str(&current.text());
        } else if current.is_element() && !hides_text(&current, options) {
            stack.extend(current.children().into_iter().rev());
        }
    }

    out
}

/// Prepare cell text for a pipe table: trim, fold newlines into spaces,
/// escape literal pipes.
///
/// # Examples
///
/// ```
/// use rs_mdcopy::markdown::escape_table_cell;
///
/// assert_eq!(escape_table_cell("  a|b\nc "), r"a\|b c");
/// ```
#[must_use]
pub fn escape_table_cell(text: &str) -> String {
    text.trim().replace('\n', " ").replace('|', r"\|")
}

/// Convert a table element to pipe-table rows.
///
/// Every `tr` below the table becomes one row of its `th`/`td` cells. When
/// the first row holds a header cell, a `---` separator row follows it.
/// Rows are joined with newlines; a table without rows yields an empty
/// string.
///
/// # Example Output
///
/// ```text
/// | A | B |
/// | --- | --- |
/// | 1 | 2 |
/// ```
#[must_use]
pub fn table_to_markdown(table: &NodeRef, options: &Options) -> String {
    let table = Selection::from(*table);
    let mut lines: Vec<String> = Vec::new();

    for (row_idx, row) in table.select("tr").iter().enumerate() {
        let cells: Vec<String> = row
            .select("th, td")
            .nodes()
            .iter()
            .map(|cell| escape_table_cell(&visible_text(cell, options)))
            .collect();

        lines.push(format!("| {} |", cells.join(" | ")));

        if row_idx == 0 && !row.select("th").is_empty() {
            let separator = vec!["---"; cells.len()];
            lines.push(format!("| {} |", separator.join(" | ")));
        }
    }

    lines.join("\n")
}

/// Recover the source text of a code block.
///
/// Finds the code-block root (the element itself or its first marked
/// descendant). If the root renders one marked element per line, the
/// lines are joined with newlines, which drops gutters and line numbers.
/// Otherwise the root's text is used; without a root, the element's own.
#[must_use]
pub fn extract_code_text(element: &NodeRef, options: &Options) -> String {
    let code_root = if dom::has_class(element, &options.code_block_class) {
        Some(*element)
    } else {
        element
            .descendants()
            .into_iter()
            .find(|n| n.is_element() && dom::has_class(n, &options.code_block_class))
    };

    let Some(root) = code_root else {
        return visible_text(element, options);
    };

    let lines: Vec<String> = root
        .descendants()
        .iter()
        .filter(|n| n.is_element() && dom::has_class(n, &options.line_content_class))
        .map(|line| visible_text(line, options))
        .collect();

    if lines.is_empty() {
        visible_text(&root, options)
    } else {
        lines.join("\n")
    }
}

/// Wrap code in a fenced block, surrounded by newlines.
///
/// The body is emitted verbatim.
#[must_use]
pub fn fenced_block(language: Option<&str>, body: &str) -> String {
    let language = language.unwrap_or_default();
    format!("\n```{language}\n{body}\n```\n")
}

/// Backtick-wrap inline code. Blank text yields an empty string.
#[must_use]
pub fn code_span(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    format!("`{text}`")
}

/// Prefix every line with `> `.
#[must_use]
pub fn quote_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
