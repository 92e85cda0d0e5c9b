//! # rs-mdcopy
//!
//! Formatted Markdown extraction from rendered chat and document markup.
//!
//! A rendered chat message is a tree full of presentation detail: injected
//! copy buttons, syntax-highlighted code split into line elements, diagrams
//! replaced by SVG. This library walks such a tree and produces the clean
//! Markdown a reader expects on the clipboard.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_mdcopy::extract;
//!
//! let html = r#"<div class="message">
//!   <h2>Setup</h2>
//!   <p>Run <code>make</code> first.</p>
//!   <button class="manager-copy-btn">Copy</button>
//! </div>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.markdown, "## Setup\n\nRun `make` first.");
//! # Ok::<(), rs_mdcopy::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Structure**: headings, paragraphs, nested lists, block quotes, rules
//! - **Inline formatting**: bold, italic, strikethrough, code spans, links
//! - **Tables**: pipe tables with a header separator
//! - **Code blocks**: line-split highlighted code is reassembled, the fence
//!   language is resolved from attributes, captions or content
//! - **Diagrams**: emitted from their recorded source, never from the SVG
//! - **Read-only**: the tree is never modified

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Markdown extraction walker (classification, handlers, pipeline).
pub mod extractor;

/// Side-table of out-of-band node properties.
pub mod sources;

/// Code-fence language resolution.
pub mod language;

/// Markdown building blocks (tables, fences, code spans).
pub mod markdown;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::{extract_formatted_text, Extractor};
pub use options::Options;
pub use result::ExtractResult;
pub use sources::{NodeMeta, NodeSources};

/// Extracts Markdown from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_mdcopy::extract;
///
/// let result = extract("<ol><li>first</li><li>second</li></ol>")?;
/// assert_eq!(result.markdown, "1. first\n2. second");
/// # Ok::<(), rs_mdcopy::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts Markdown from an HTML document with custom options.
///
/// Fails only when `options.root_selector` is invalid or matches nothing.
///
/// # Example
///
/// ```rust
/// use rs_mdcopy::{extract_with_options, Options};
///
/// let html = r#"<nav>menu</nav><div id="answer"><p>Only this.</p></div>"#;
/// let options = Options {
///     root_selector: Some("#answer".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.markdown, "Only this.");
/// # Ok::<(), rs_mdcopy::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts Markdown from an already-parsed document.
///
/// `sources` may carry diagram sources and raw text recorded by the caller
/// before rendering; values found in the markup are added to it, recorded
/// values are never overwritten.
///
/// # Example
///
/// ```rust
/// use rs_mdcopy::dom::{first_node, parse};
/// use rs_mdcopy::{extract_document, NodeSources, Options};
///
/// let doc = parse(r#"<div class="manager-mermaid-container"><svg></svg></div>"#);
/// let container = first_node(&doc.select("div")).expect("container");
///
/// let mut sources = NodeSources::new();
/// sources.set_diagram_source(&container, "graph TD; A-->B;");
///
/// let result = extract_document(&doc, &mut sources, &Options::default())?;
/// assert_eq!(result.markdown, "```mermaid\ngraph TD; A-->B;\n```");
/// # Ok::<(), rs_mdcopy::Error>(())
/// ```
pub fn extract_document(
    document: &dom::Document,
    sources: &mut NodeSources,
    options: &Options,
) -> Result<ExtractResult> {
    extract::extract_from_document(document, sources, options)
}

/// Extracts Markdown from HTML bytes with automatic encoding detection.
///
/// The encoding is taken from a byte-order mark or a `<meta>` charset
/// declaration and defaults to UTF-8. Invalid sequences are replaced with
/// U+FFFD rather than causing errors.
///
/// # Example
///
/// ```rust
/// use rs_mdcopy::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let result = extract_bytes(html)?;
/// assert_eq!(result.markdown, "Café");
/// # Ok::<(), rs_mdcopy::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts Markdown from HTML bytes with custom options and automatic
/// encoding detection.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
