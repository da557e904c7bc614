//! Document type and related utilities
//!
//! The root container for a page: an ordered sequence of top-level nodes
//! plus the indentation unit used when rendering. The doctype and `<html>`
//! wrapper are built in; callers supply their own head and body elements.

use crate::render;

use super::{Element, Node};

// =============================================================================
// Document
// =============================================================================

/// Root document container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
    indent: String,
}

impl Document {
    /// Create an empty document with the default two-space indent unit
    pub fn new() -> Self {
        Self::with_indent(render::DEFAULT_INDENT)
    }

    /// Create an empty document with a custom indent unit (e.g. `"\t"`)
    pub fn with_indent(unit: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            indent: unit.into(),
        }
    }

    /// Append a top-level node
    pub fn push_node(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Append a top-level node, builder-style
    pub fn node(mut self, node: impl Into<Node>) -> Self {
        self.push_node(node);
        self
    }

    /// Top-level nodes in document order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The indentation unit used by [`Document::render`]
    pub fn indent_unit(&self) -> &str {
        &self.indent
    }

    /// Render the full document to a string
    ///
    /// Wraps the top-level nodes in the doctype and `<html>` boilerplate,
    /// then strips whitespace-only lines. Side-effect-free; repeated calls
    /// on an unmodified document return identical strings.
    pub fn render(&self) -> String {
        render::render_document(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find first element matching predicate (depth-first search)
    pub fn find<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().find(|e| predicate(e))
    }

    /// Find all elements matching predicate
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.elements().filter(|e| predicate(e)).collect()
    }

    /// Check if any element matches predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        self.find(predicate).is_some()
    }

    /// Visit all elements with a closure (read-only, depth-first)
    pub fn for_each_element<F>(&self, mut f: F)
    where
        F: FnMut(&Element),
    {
        for elem in self.elements() {
            f(elem);
        }
    }

    /// Count total elements in the document
    pub fn element_count(&self) -> usize {
        self.elements().count()
    }

    /// Iterate over all elements (depth-first, document order)
    pub fn elements(&self) -> ElementIter<'_> {
        ElementIter::new(&self.nodes)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ElementIter - depth-first element traversal
// =============================================================================

/// Depth-first iterator over elements
pub struct ElementIter<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> ElementIter<'a> {
    fn new(nodes: &'a [Node]) -> Self {
        // Top-level nodes pushed in reverse so they pop in document order
        let stack = nodes.iter().rev().filter_map(|n| n.as_element()).collect();
        Self { stack }
    }
}

impl<'a> Iterator for ElementIter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        for child in elem.children().iter().rev() {
            if let Some(child_elem) = child.as_element() {
                self.stack.push(child_elem);
            }
        }
        Some(elem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildResult;
    use crate::node::Text;

    fn head_and_body() -> BuildResult<Document> {
        let head = Element::new("head")
            .child(Element::void("meta").attr("charset", "utf-8"))?;
        let body = Element::new("body").child(Element::new("h1").text("Hi")?)?;
        Ok(Document::new().node(head).node(body))
    }

    #[test]
    fn test_render_wraps_in_boilerplate() -> BuildResult<()> {
        let doc = head_and_body()?;
        let html = doc.render();

        assert!(html.starts_with("<!DOCTYPE html>\n<html>\n"));
        assert!(html.ends_with("</html>\n"));
        assert_eq!(
            html,
            "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n</head>\n  <body>\n    <h1>Hi</h1>\n  </body>\n</html>\n"
        );
        Ok(())
    }

    #[test]
    fn test_render_has_no_blank_lines() -> BuildResult<()> {
        let html = head_and_body()?.render();
        for line in html.lines() {
            assert!(
                line.bytes().any(|b| !matches!(b, b' ' | b'\t' | b'\r')),
                "blank line in output: {line:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn test_render_is_idempotent() -> BuildResult<()> {
        let doc = head_and_body()?;
        assert_eq!(doc.render(), doc.render());
        Ok(())
    }

    #[test]
    fn test_custom_indent_unit() -> BuildResult<()> {
        let body = Element::new("body").child(Element::new("h1").text("Hi")?)?;
        let doc = Document::with_indent("\t").node(body);
        let html = doc.render();
        assert!(html.contains("\t<body>"));
        assert!(html.contains("\t\t<h1>Hi</h1>"));
        Ok(())
    }

    #[test]
    fn test_text_node_allowed_at_top_level() {
        let doc = Document::new().node(Text::new("loose text"));
        let html = doc.render();
        assert!(html.contains("loose text"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_query_api() -> BuildResult<()> {
        let doc = head_and_body()?;

        assert_eq!(doc.element_count(), 4); // head, meta, body, h1
        let h1 = doc.find(|e| e.tag == "h1").unwrap();
        assert_eq!(h1.text_content(), "Hi");
        assert!(doc.any(|e| e.tag == "meta"));
        assert!(doc.find(|e| e.tag == "missing").is_none());

        let tags: Vec<_> = doc.elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["head", "meta", "body", "h1"]);
        Ok(())
    }

    #[test]
    fn test_find_all() -> BuildResult<()> {
        let body = Element::new("body")
            .child(Element::new("p").text("one")?)?
            .child(Element::new("p").text("two")?)?;
        let doc = Document::new().node(body);
        assert_eq!(doc.find_all(|e| e.tag == "p").len(), 2);
        Ok(())
    }
}
