//! Node types for the document tree.
//!
//! A tree is built from two node kinds: [`Element`] (tagged, with attributes
//! and children) and [`Text`] (verbatim leaf content). Text nodes carry no
//! attributes and no children by construction, so that invariant needs no
//! runtime checks.

mod document;
mod element;
mod text;

pub use document::{Document, ElementIter};
pub use element::Element;
pub use text::Text;

use smallvec::SmallVec;

use crate::error::{BuildError, BuildResult};

/// Node in a document tree - either Element or Text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    /// Check if this is an element node.
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Get as element reference.
    #[inline]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as mutable element reference.
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get as mutable text reference.
    #[inline]
    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            Node::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Append an attribute. Silent no-op on text nodes.
    pub fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        if let Node::Element(e) = self {
            e.push_attr(name, value);
        }
        self
    }

    /// Append a child node.
    ///
    /// Fails with [`BuildError::TextChild`] on a text node and
    /// [`BuildError::VoidChild`] on a self-closing element.
    pub fn push_child(&mut self, child: impl Into<Node>) -> BuildResult<()> {
        match self {
            Node::Element(e) => e.push_child(child),
            Node::Text(_) => Err(BuildError::TextChild),
        }
    }

    /// Render this node at the given indent layer.
    ///
    /// See [`crate::render::render_node`] for the formatting rules.
    pub fn render(&self, layer: usize, unit: &str) -> String {
        let mut out = String::new();
        crate::render::render_node(self, layer, unit, &mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(Text::new(content))
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(Text::new(content))
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;
