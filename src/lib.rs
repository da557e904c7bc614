//! tagforge - Chainable HTML Document Builder
//!
//! Builds an in-memory tree of tagged elements and text leaves, then renders
//! it to a formatted HTML string. The doctype and `<html>` wrapper are built
//! in; callers supply their own head and body elements.
//!
//! ## Core Concepts
//!
//! - **Block vs. inline**: a block element breaks onto its own indented line;
//!   an inline element flows inside surrounding text. The flag affects only
//!   formatting, never syntax.
//! - **Paired vs. self-closing**: a self-closing element renders just an
//!   opening tag and rejects children at the point of mutation.
//! - **Verbatim output**: tag names, attribute values, and text are emitted
//!   exactly as supplied - no escaping, no validation.
//!
//! ## Modules
//! - `node`: Node/Element/Text/Document types
//! - `attr`: Attribute pairs and helpers
//! - `render`: Tree-to-string rendering and whitespace cleanup
//! - `error`: Structural-precondition errors
//!
//! ## Usage
//!
//! ```
//! use tagforge::{BuildResult, Document, Element};
//!
//! fn main() -> BuildResult<()> {
//!     let body = Element::new("body")
//!         .child(Element::new("h1").with_id("title").text("Hello")?)?;
//!
//!     let html = Document::new().node(body).render();
//!     assert!(html.starts_with("<!DOCTYPE html>\n<html>\n"));
//!     assert!(html.ends_with("</html>\n"));
//!     Ok(())
//! }
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Attribute types
pub mod attr;

/// Error types
pub mod error;

/// Node types: Document, Element, Node, Text
pub mod node;

/// Prelude for common imports
pub mod prelude;

/// HTML rendering
pub mod render;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Document, Element, ElementIter, Node, Text};

// Attribute types
pub use attr::{Attrs, AttrsExt};

// Error types
pub use error::{BuildError, BuildResult};

// Render
pub use render::{render_document, render_node, strip_blank_lines, DEFAULT_INDENT};

// =============================================================================
// Tests
// =============================================================================
