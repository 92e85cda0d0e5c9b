//! Side-table of out-of-band node properties.
//!
//! Rendering passes destroy some of the text a reader would want copied: a
//! diagram's source is replaced by generated SVG, and a message's raw text
//! is gone once controls are injected. Those values are recorded here, keyed
//! by node identity, instead of being stored on the tree itself.
//!
//! A table belongs to the one `Document` whose nodes were used as keys.

use std::collections::HashMap;

use crate::dom::{self, NodeId, NodeRef};

/// Properties recorded for one node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMeta {
    /// Pre-render source of a diagram container.
    pub diagram_source: Option<String>,

    /// Text captured before the subtree was rewritten.
    pub raw_text: Option<String>,
}

/// Map from node identity to its recorded properties.
#[derive(Debug, Clone, Default)]
pub struct NodeSources {
    entries: HashMap<NodeId, NodeMeta>,
}

impl NodeSources {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the original source of a diagram container.
    pub fn set_diagram_source(&mut self, node: &NodeRef, source: impl Into<String>) {
        self.entries.entry(node.id).or_default().diagram_source = Some(source.into());
    }

    /// Original source recorded for a diagram container, if any.
    #[must_use]
    pub fn diagram_source(&self, node: &NodeRef) -> Option<&str> {
        self.entries
            .get(&node.id)
            .and_then(|meta| meta.diagram_source.as_deref())
    }

    /// Record raw text for a node, replacing any previous value.
    pub fn set_raw_text(&mut self, node: &NodeRef, text: impl Into<String>) {
        self.entries.entry(node.id).or_default().raw_text = Some(text.into());
    }

    /// Raw text recorded for a node, if any.
    #[must_use]
    pub fn raw_text(&self, node: &NodeRef) -> Option<&str> {
        self.entries.get(&node.id).and_then(|meta| meta.raw_text.as_deref())
    }

    /// Record the node's current text content unless text was already captured.
    ///
    /// Returns the captured text.
    pub fn capture_raw_text(&mut self, node: &NodeRef) -> &str {
        let meta = self.entries.entry(node.id).or_default();
        meta.raw_text
            .get_or_insert_with(|| dom::text_content(node).to_string())
            .as_str()
    }

    /// Copy `attribute` from every `marker_class` element under `root`
    /// (inclusive) into the diagram-source column.
    ///
    /// Sources already recorded are kept. Returns how many were added.
    pub fn harvest_attribute(&mut self, root: &NodeRef, marker_class: &str, attribute: &str) -> usize {
        let mut added = 0;
        let candidates = std::iter::once(*root).chain(root.descendants());

        for node in candidates {
            if !node.is_element() || !dom::has_class(&node, marker_class) {
                continue;
            }
            if self.diagram_source(&node).is_some() {
                continue;
            }
            if let Some(source) = dom::get_attribute(&node, attribute) {
                self.set_diagram_source(&node, source);
                added += 1;
            }
        }

        if added > 0 {
            log::debug!("harvested {added} diagram source(s) from `{attribute}`");
        }
        added
    }

    /// Metadata recorded for a node.
    #[must_use]
    pub fn get(&self, node: &NodeRef) -> Option<&NodeMeta> {
        self.entries.get(&node.id)
    }

    /// Number of nodes with recorded metadata.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
