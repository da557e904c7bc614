//! Rendering for document trees
//!
//! Turns node trees into formatted HTML text. Block elements break onto
//! their own indented lines, inline elements flow with surrounding text,
//! and a final pass over the document drops whitespace-only lines left
//! behind by inline siblings.

use crate::attr::Attrs;
use crate::node::{Document, Element, Node};

/// Default indentation unit: two spaces.
pub const DEFAULT_INDENT: &str = "  ";

// =============================================================================
// Document rendering
// =============================================================================

/// Render a full document to an HTML string.
///
/// Emits the `<!DOCTYPE html>` and `<html>` boilerplate, renders each
/// top-level node at indent layer 1 with the document's unit, closes with
/// `</html>`, then strips whitespace-only lines.
pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n");
    for node in doc.nodes() {
        render_node(node, 1, doc.indent_unit(), &mut out);
    }
    out.push_str("</html>");
    strip_blank_lines(&out)
}

// =============================================================================
// Node rendering
// =============================================================================

/// Render a node into the output buffer.
///
/// Text nodes emit their content verbatim, regardless of `layer` and `unit`.
/// Elements follow the block/inline rules described on [`render_element`].
pub fn render_node(node: &Node, layer: usize, unit: &str, out: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, layer, unit, out),
        Node::Text(text) => out.push_str(&text.content),
    }
}

/// Render an element and its subtree into the output buffer.
///
/// Block elements open with a newline and `layer` copies of `unit` before
/// `<tag attrs...>`. Self-closing elements stop there (plus a newline when
/// block). Paired elements render children at `layer + 1` with no separator,
/// append `</tag>`, and when block finish with a newline and `layer - 1`
/// copies of `unit` - one short, so the line is pre-indented for whatever
/// the parent emits next. Inline elements skip every newline and indent.
pub(crate) fn render_element(elem: &Element, layer: usize, unit: &str, out: &mut String) {
    if !elem.is_inline() {
        out.push('\n');
        push_indent(out, unit, layer);
    }

    out.push('<');
    out.push_str(&elem.tag);
    render_attrs(&elem.attrs, out);
    out.push('>');

    if !elem.requires_closing_tag() {
        // No children possible, no closing tag
        if !elem.is_inline() {
            out.push('\n');
        }
        return;
    }

    for child in elem.children() {
        render_node(child, layer + 1, unit, out);
    }

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');

    if !elem.is_inline() {
        out.push('\n');
        push_indent(out, unit, layer.saturating_sub(1));
    }
}

/// Render attributes in insertion order, unescaped.
fn render_attrs(attrs: &Attrs, out: &mut String) {
    for (name, value) in attrs.iter() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn push_indent(out: &mut String, unit: &str, count: usize) {
    for _ in 0..count {
        out.push_str(unit);
    }
}

// =============================================================================
// Whitespace cleanup
// =============================================================================

/// Drop every whitespace-only line, terminating each kept line with `\n`.
///
/// Inline elements render with no surrounding newline, which leaves stray
/// indentation-only lines between their block siblings; this pass removes
/// them. A non-empty result always ends with a newline.
pub fn strip_blank_lines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for line in s.split('\n') {
        if !is_blank(line) {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildResult;
    use crate::node::Text;

    #[test]
    fn test_text_ignores_layer_and_unit() {
        let node: Node = Text::new("verbatim  text").into();
        assert_eq!(node.render(0, "  "), "verbatim  text");
        assert_eq!(node.render(7, "\t"), "verbatim  text");
        assert_eq!(node.render(3, "xyz"), "verbatim  text");
    }

    #[test]
    fn test_block_element_with_attr_and_text() -> BuildResult<()> {
        let p = Element::new("p").attr("id", "x").text("hi")?;
        assert_eq!(p.render(1, "  "), "\n  <p id=\"x\">hi</p>\n");
        Ok(())
    }

    #[test]
    fn test_closing_line_indented_one_unit_short() -> BuildResult<()> {
        let p = Element::new("p").text("hi")?;
        // At layer 2 the closing line carries a single unit, not two
        assert_eq!(p.render(2, "  "), "\n    <p>hi</p>\n  ");
        Ok(())
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let meta = Element::void("meta").attr("charset", "utf-8");
        let html = meta.render(2, "  ");
        assert_eq!(html, "\n    <meta charset=\"utf-8\">\n");
        assert!(!html.contains("</meta>"));
    }

    #[test]
    fn test_inline_element_emits_no_newlines() -> BuildResult<()> {
        let em = Element::inline("em").text("RED")?;
        assert_eq!(em.render(5, "  "), "<em>RED</em>");
        Ok(())
    }

    #[test]
    fn test_void_inline_element() {
        let wbr = Element::void_inline("wbr");
        assert_eq!(wbr.render(3, "  "), "<wbr>");
    }

    #[test]
    fn test_inline_nested_in_block_text() -> BuildResult<()> {
        let p = Element::new("p")
            .text("A ")?
            .child(Element::inline("em").text("RED")?)?
            .text(" word.")?;
        assert_eq!(p.render(1, "  "), "\n  <p>A <em>RED</em> word.</p>\n");
        Ok(())
    }

    #[test]
    fn test_attrs_render_in_insertion_order_unescaped() {
        let div = Element::new("div")
            .attr("class", "a")
            .attr("style", "color: red")
            .attr("class", "b")
            .attr("data-raw", "a \"quoted\" <value>");
        let html = div.render(0, "  ");
        assert_eq!(
            html,
            "\n<div class=\"a\" style=\"color: red\" class=\"b\" data-raw=\"a \"quoted\" <value>\"></div>\n"
        );
    }

    #[test]
    fn test_block_at_layer_zero() -> BuildResult<()> {
        // layer 0: no leading indent, and the closing indent saturates at zero
        let p = Element::new("p").text("hi")?;
        assert_eq!(p.render(0, "  "), "\n<p>hi</p>\n");
        Ok(())
    }

    #[test]
    fn test_strip_blank_lines() {
        assert_eq!(strip_blank_lines("a\n  \nb"), "a\nb\n");
        assert_eq!(strip_blank_lines("a\n\t\nb\n"), "a\nb\n");
        assert_eq!(strip_blank_lines("\n\n"), "");
        assert_eq!(strip_blank_lines("  \r\n x"), " x\n");
        assert_eq!(strip_blank_lines("no newline"), "no newline\n");
    }

    #[test]
    fn test_strip_keeps_indentation_on_content_lines() {
        assert_eq!(strip_blank_lines("  <p>hi</p>\n  "), "  <p>hi</p>\n");
    }
}
