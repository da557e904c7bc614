//! Element type - tagged markup nodes
//!
//! The core building block of the tree. An element carries a tag name,
//! attributes in insertion order, and child nodes. Two private layout flags
//! control rendering: whether the tag is paired with a closing tag, and
//! whether it flows inline with surrounding text.

use crate::attr::{Attrs, AttrsExt};
use crate::error::{BuildError, BuildResult};

use super::{Children, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// Tagged markup element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, emitted as-is
    pub tag: String,
    /// Attributes in insertion order, duplicates allowed
    pub attrs: Attrs,
    // Children stay private: a self-closing element must never gain any,
    // so every append goes through push_child.
    children: Children,
    closing: bool,
    inline: bool,
}

impl Element {
    fn with_layout(tag: impl Into<String>, closing: bool, inline: bool) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Children::new(),
            closing,
            inline,
        }
    }

    /// Create a paired-tag element rendered on its own line
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_layout(tag, true, false)
    }

    /// Create a paired-tag element that flows inline with surrounding text
    pub fn inline(tag: impl Into<String>) -> Self {
        Self::with_layout(tag, true, true)
    }

    /// Create a self-closing element rendered on its own line
    ///
    /// Self-closing elements emit only an opening tag and can never
    /// contain children.
    pub fn void(tag: impl Into<String>) -> Self {
        Self::with_layout(tag, false, false)
    }

    /// Create a self-closing element that flows inline with surrounding text
    pub fn void_inline(tag: impl Into<String>) -> Self {
        Self::with_layout(tag, false, true)
    }

    /// Whether this element is paired with a closing tag
    pub fn requires_closing_tag(&self) -> bool {
        self.closing
    }

    /// Whether this element renders without surrounding newlines or indentation
    pub fn is_inline(&self) -> bool {
        self.inline
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an attribute, builder-style
    ///
    /// Names and values are not validated or escaped; duplicates are kept.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push_attr(name, value);
        self
    }

    /// Append an attribute in place
    pub fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.push_attr(name, value);
        self
    }

    /// Set the `id` attribute, builder-style
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `class` attribute, builder-style
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Get the first attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// Get the `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Get the `class` attribute
    pub fn class(&self) -> Option<&str> {
        self.get_attr("class")
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Children
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a child node, builder-style
    ///
    /// Fails with [`BuildError::VoidChild`] on a self-closing element.
    /// The child subtree is moved in; children render in insertion order.
    pub fn child(mut self, node: impl Into<Node>) -> BuildResult<Self> {
        self.push_child(node)?;
        Ok(self)
    }

    /// Append a text child, builder-style
    pub fn text(self, content: impl Into<String>) -> BuildResult<Self> {
        self.child(Text::new(content))
    }

    /// Append a child node in place
    ///
    /// Fails with [`BuildError::VoidChild`] on a self-closing element,
    /// leaving the element untouched.
    pub fn push_child(&mut self, node: impl Into<Node>) -> BuildResult<()> {
        if !self.closing {
            return Err(BuildError::void_child(self.tag.clone()));
        }
        self.children.push(node.into());
        Ok(())
    }

    /// Child nodes in render order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if element has children
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of direct children (all node types)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterate over direct child element references
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| n.as_element())
    }

    /// Get text content of this element (concatenated from all text descendants)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }

    /// Render this element and its subtree at the given indent layer
    ///
    /// See [`crate::render::render_node`] for the formatting rules.
    pub fn render(&self, layer: usize, unit: &str) -> String {
        let mut out = String::new();
        crate::render::render_element(self, layer, unit, &mut out);
        out
    }
}
