//! Markdown extraction walker.
//!
//! # Module Structure
//!
//! - `tags`: Tag constants and helper functions
//! - `classify`: Closed `NodeKind` classification in dispatch priority order
//! - `state`: Per-call walk context (depth, enclosing kind)
//! - `handlers`: One handler per node kind
//! - `pipeline`: Recursive walk, sibling aggregation and final normalization
//!
//! # Usage
//!
//! ```rust
//! use rs_mdcopy::dom::{first_node, parse};
//! use rs_mdcopy::extractor::extract_formatted_text;
//! use rs_mdcopy::{NodeSources, Options};
//!
//! let doc = parse("<div><h1>Title</h1><ul><li>one</li><li>two</li></ul></div>");
//! let root = first_node(&doc.select("div")).expect("div");
//!
//! let markdown = extract_formatted_text(&root, &NodeSources::new(), &Options::default());
//! assert_eq!(markdown, "# Title\n\n- one\n- two");
//! ```

pub mod classify;
pub mod handlers;
pub mod pipeline;
pub mod state;
pub mod tags;

pub use classify::{classify, NodeKind};
pub use pipeline::{extract_formatted_text, normalize_output, scan_warnings, Extractor};
pub use state::Context;
