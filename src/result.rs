//! Result type for document-level extraction.

use serde::Serialize;

use crate::error::{Error, Result};

/// Result of extracting Markdown from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractResult {
    /// Normalized Markdown. Empty when nothing was extractable.
    pub markdown: String,

    /// Raw text captured for the root before extraction (if enabled).
    ///
    /// Callers can fall back to this when the Markdown comes out emptier
    /// than expected.
    pub raw_text: Option<String>,

    /// Non-fatal issues noticed while extracting, such as:
    /// - diagram containers without a recorded source
    /// - subtrees dropped by the depth limit
    /// - an empty result
    pub warnings: Vec<String>,
}

impl ExtractResult {
    /// Whether the extraction produced no Markdown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markdown.is_empty()
    }

    /// Pretty-printed JSON of the whole result.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }
}
