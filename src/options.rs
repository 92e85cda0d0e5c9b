//! Configuration options for Markdown extraction.
//!
//! The `Options` struct names the marker classes and attributes produced by
//! the chat UI's renderer, so the same walker can follow renderer changes
//! without code edits.

use serde::Deserialize;

use crate::error::Result;

/// Configuration options for Markdown extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the stock renderer's marker classes.
///
/// # Example
///
/// ```rust
/// use rs_mdcopy::Options;
///
/// let options = Options {
///     max_depth: 64,
///     root_selector: Some(".message-body".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.code_block_class, "code-block");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Classes marking UI-injected controls (copy and feedback buttons).
    ///
    /// Elements carrying any of these are excluded from output entirely.
    pub control_classes: Vec<String>,

    /// Class marking a rendered diagram container.
    ///
    /// Default: `manager-mermaid-container`
    pub diagram_class: String,

    /// Language tag used on the fence emitted for diagram sources.
    ///
    /// Default: `mermaid`
    pub diagram_language: String,

    /// Class marking a code block root that is not itself a `<pre>`.
    ///
    /// Default: `code-block`
    pub code_block_class: String,

    /// Class marking one rendered line of a code block.
    ///
    /// Default: `line-content`
    pub line_content_class: String,

    /// Class turning a `<pre>` into inline code.
    ///
    /// Default: `inline`
    pub inline_code_class: String,

    /// Attributes consulted, in order, for an explicit code language.
    pub language_attributes: Vec<String>,

    /// Language names accepted from a caption preceding a code block.
    pub known_languages: Vec<String>,

    /// Maximum element nesting depth walked below the root.
    ///
    /// Deeper subtrees are dropped from the output.
    ///
    /// Default: `256`
    pub max_depth: usize,

    /// CSS selector locating the extraction root in a full document.
    ///
    /// `None` uses `<body>`.
    ///
    /// Default: `None`
    pub root_selector: Option<String>,

    /// Attribute carrying a diagram's source in serialized snapshots.
    ///
    /// When set, the document-level entry points copy it into the side-table
    /// for every diagram container before walking.
    ///
    /// Default: `Some("data-diagram-source")`
    pub diagram_source_attribute: Option<String>,

    /// Record the root's raw text in the side-table and return it.
    ///
    /// Default: `true`
    pub capture_raw_text: bool,
}

impl Options {
    /// Parse options from JSON, falling back to defaults for missing fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `class` is one of the injected-control marker classes.
    #[must_use]
    pub fn is_control_class(&self, class: &str) -> bool {
        self.control_classes.iter().any(|c| c == class)
    }

    /// Whether `lang` (already normalized) is an accepted caption language.
    #[must_use]
    pub fn is_known_language(&self, lang: &str) -> bool {
        self.known_languages.iter().any(|l| l == lang)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            control_classes: strings(&[
                "manager-copy-btn",
                "manager-copy-button",
                "manager-copy-bottom",
                "manager-feedback-copy",
            ]),
            diagram_class: "manager-mermaid-container".to_string(),
            diagram_language: "mermaid".to_string(),
            code_block_class: "code-block".to_string(),
            line_content_class: "line-content".to_string(),
            inline_code_class: "inline".to_string(),
            language_attributes: strings(&[
                "data-language",
                "data-lang",
                "data-mode",
                "data-code-language",
            ]),
            known_languages: strings(&[
                "xml", "html", "css", "javascript", "typescript", "python", "java", "json",
                "bash", "shell", "sql", "yaml", "markdown", "md", "go", "rust", "c", "cpp",
                "csharp", "php", "ruby", "swift", "kotlin",
            ]),
            max_depth: 256,
            root_selector: None,
            diagram_source_attribute: Some("data-diagram-source".to_string()),
            capture_raw_text: true,
        }
    }
}
