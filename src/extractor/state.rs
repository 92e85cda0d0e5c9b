//! Per-call walk context.
//!
//! `Context` is threaded by value through the mutually recursive element
//! and children visitors. It carries the depth used by the recursion guard
//! and the kind of the element being walked; handlers may ignore it.

use super::classify::NodeKind;

/// Walk context for one visited node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    /// Element depth below the extraction root (the root is 0).
    pub depth: usize,

    /// Kind of the enclosing element, `None` at the root.
    pub parent_kind: Option<NodeKind>,
}

impl Context {
    /// Context for the extraction root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Context for the children of an element of kind `kind`.
    #[must_use]
    pub fn descend(self, kind: NodeKind) -> Self {
        Self {
            depth: self.depth + 1,
            parent_kind: Some(kind),
        }
    }

    /// Whether this context lies beyond `max_depth`.
    #[inline]
    #[must_use]
    pub fn exceeds(&self, max_depth: usize) -> bool {
        self.depth > max_depth
    }
}
