//! Prelude module for common imports.
//!
//! ```
//! use tagforge::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, Document, Element, ElementIter, Node, Text};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Error
pub use crate::error::{BuildError, BuildResult};

// Render
pub use crate::render::{render_document, render_node, strip_blank_lines, DEFAULT_INDENT};
