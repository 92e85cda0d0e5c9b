//! Document-level extraction.
//!
//! Locates the extraction root, fills the side-table from the markup where
//! possible, then runs the tree walker and collects warnings.

use dom_query::Matcher;

use crate::dom::{self, Document, NodeRef};
use crate::error::{Error, Result};
use crate::extractor::{extract_formatted_text, scan_warnings};
use crate::options::Options;
use crate::result::ExtractResult;
use crate::sources::NodeSources;

/// Parse `html` and extract Markdown with a fresh side-table.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    log::debug!("parsing {} bytes of markup", html.len());
    let document = dom::parse(html);
    let mut sources = NodeSources::new();
    extract_from_document(&document, &mut sources, options)
}

/// Extract Markdown from an already-parsed document.
pub(crate) fn extract_from_document(
    document: &Document,
    sources: &mut NodeSources,
    options: &Options,
) -> Result<ExtractResult> {
    let root = select_root(document, options)?;

    if let Some(attribute) = options.diagram_source_attribute.as_deref() {
        sources.harvest_attribute(&root, &options.diagram_class, attribute);
    }

    let raw_text = options
        .capture_raw_text
        .then(|| sources.capture_raw_text(&root).to_string());

    let mut warnings = scan_warnings(&root, sources, options);
    let markdown = extract_formatted_text(&root, sources, options);

    if markdown.is_empty() {
        log::debug!("extraction produced no markdown");
        warnings.push("no extractable content below the root".to_string());
    }

    Ok(ExtractResult {
        markdown,
        raw_text,
        warnings,
    })
}

/// Pick the extraction root: the first match of `root_selector`, else
/// `<body>`, else the document node.
fn select_root<'a>(document: &'a Document, options: &Options) -> Result<NodeRef<'a>> {
    let Some(selector) = options.root_selector.as_deref() else {
        return Ok(dom::first_node(&document.select("body")).unwrap_or_else(|| document.root()));
    };

    let matcher = Matcher::new(selector).map_err(|_| Error::InvalidSelector(selector.to_string()))?;
    let root = dom::first_node(&document.select_matcher(&matcher))
        .ok_or_else(|| Error::RootNotFound(selector.to_string()))?;

    log::debug!("extraction root selected by `{selector}`");
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_root(selector: &str) -> Options {
        Options {
            root_selector: Some(selector.to_string()),
            ..Options::default()
        }
    }

    #[test]
    fn test_default_root_is_body() {
        let doc = dom::parse("<p>hello</p>");
        let root = select_root(&doc, &Options::default()).expect("root");
        assert!(dom::is_tag(&root, "body"));
    }

    #[test]
    fn test_root_selector() {
        let doc = dom::parse(r#"<p>skip</p><div class="message"><p>keep</p></div>"#);
        let root = select_root(&doc, &options_with_root(".message")).expect("root");
        assert!(dom::has_class(&root, "message"));
    }

    #[test]
    fn test_invalid_selector() {
        let doc = dom::parse("<p>x</p>");
        let err = select_root(&doc, &options_with_root("div >")).expect_err("invalid");
        assert!(matches!(err, Error::InvalidSelector(_)));
    }

    #[test]
    fn test_root_not_found() {
        let doc = dom::parse("<p>x</p>");
        let err = select_root(&doc, &options_with_root("article")).expect_err("missing");
        assert!(matches!(err, Error::RootNotFound(s) if s == "article"));
    }

    #[test]
    fn test_extract_content_collects_raw_text() {
        let result = extract_content("<p>Hello <b>there</b></p>", &Options::default()).expect("ok");
        assert_eq!(result.markdown, "Hello **there**");
        assert_eq!(result.raw_text.as_deref(), Some("Hello there"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_raw_text_capture_disabled() {
        let options = Options {
            capture_raw_text: false,
            ..Options::default()
        };
        let result = extract_content("<p>x</p>", &options).expect("ok");
        assert!(result.raw_text.is_none());
    }

    #[test]
    fn test_empty_result_warns() {
        let result = extract_content("<script>x()</script>", &Options::default()).expect("ok");
        assert!(result.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_caller_sources_are_kept() {
        let doc = dom::parse(r#"<div class="manager-mermaid-container" data-diagram-source="graph LR; X-->Y;"></div>"#);
        let mut sources = NodeSources::new();
        let div = dom::first_node(&doc.select("div")).expect("div");
        sources.set_diagram_source(&div, "graph TD; A-->B;");

        let result = extract_from_document(&doc, &mut sources, &Options::default()).expect("ok");
        assert_eq!(result.markdown, "```mermaid\ngraph TD; A-->B;\n```");
    }
}
