//! Recursive tree-to-JSX serialization.
//!
//! One visit per node, dispatching on the rcdom node kind. Each call
//! returns its own string and callers concatenate, so no output state is
//! shared across the walk and any single node serializes in isolation.

use html5ever::Attribute;
use markup5ever_rcdom::{Handle, NodeData};
use tracing::warn;

use crate::dom::{parent_element_tag, text_content};
use crate::escape::{escape_html_text, escape_jsx_string_literal};
use crate::names::{jsx_attribute_name, jsx_tag_name};
use crate::style::{is_numeric, translate_inline_style};

/// Default per-level indentation unit.
pub const DEFAULT_INDENT: &str = "  ";

/// Emits JSX source text for one node tree.
pub struct JsxSerializer {
    indent: String,
}

impl JsxSerializer {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// Serialize one node at the given nesting depth.
    ///
    /// Node kinds outside element/text/comment (doctypes, processing
    /// instructions from a permissive parse) are diagnosed and skipped;
    /// siblings keep serializing.
    pub fn serialize(&self, node: &Handle, level: usize) -> String {
        match &node.data {
            NodeData::Element { name, attrs, .. } => {
                self.serialize_element(node, &name.local, &attrs.borrow(), level)
            }
            NodeData::Text { contents } => self.serialize_text(node, &contents.borrow(), level),
            NodeData::Comment { contents } => self.serialize_comment(contents, level),
            other => {
                warn!(
                    kind = node_kind_name(other),
                    "skipping node of unrecognized kind"
                );
                String::new()
            }
        }
    }

    fn serialize_element(
        &self,
        node: &Handle,
        raw_tag: &str,
        attributes: &[Attribute],
        level: usize,
    ) -> String {
        let tag = jsx_tag_name(raw_tag);
        let tag_lower = raw_tag.to_lowercase();

        let mut out = String::new();
        if level > 0 {
            out.push('\n');
            out.push_str(&self.indent.repeat(level));
        }
        out.push('<');
        out.push_str(&tag);

        for attribute in attributes {
            if let Some(rendered) = render_attribute(&tag_lower, attribute) {
                out.push(' ');
                out.push_str(&rendered);
            }
        }

        // textarea text must become defaultValue, and style sheets use
        // braces too liberally to survive as JSX children; both relocate
        // their content into a synthesized attribute.
        if tag == "textarea" {
            out.push_str(&format!(
                " defaultValue={{{}}}",
                json_string(&text_content(node))
            ));
        } else if tag == "style" {
            out.push_str(&format!(
                " dangerouslySetInnerHTML={{{{__html: {} }}}}",
                json_string(&text_content(node))
            ));
        }

        let children = node.children.borrow();
        if children.is_empty() || tag == "textarea" || tag == "style" {
            out.push_str(" />");
            return out;
        }

        out.push('>');
        for child in children.iter() {
            out.push_str(&self.serialize(child, level + 1));
        }
        if needs_closing_break(&children) {
            out.push('\n');
            out.push_str(&self.indent.repeat(level));
        }
        out.push_str("</");
        out.push_str(&tag);
        out.push('>');
        out
    }

    fn serialize_text(&self, node: &Handle, raw: &str, level: usize) -> String {
        // textarea/style content was already relocated by the parent.
        if let Some(parent_tag) = parent_element_tag(node) {
            let parent = jsx_tag_name(&parent_tag);
            if parent == "textarea" || parent == "style" {
                return String::new();
            }
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        let escaped = escape_jsx_string_literal(&escape_html_text(trimmed));
        if !escaped.contains('\n') {
            return format!("{{'{}'}}", escaped);
        }

        let mut out = String::new();
        for line in escaped.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            out.push('\n');
            out.push_str(&self.indent.repeat(level));
            out.push_str("{'");
            out.push_str(line);
            out.push_str("'}");
        }
        out
    }

    fn serialize_comment(&self, contents: &str, level: usize) -> String {
        // an unescaped "/" could end the generated block comment early
        format!(
            "\n{}{{/*{}*/}}",
            self.indent.repeat(level),
            contents.replace('/', "\\/")
        )
    }
}

impl Default for JsxSerializer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

/// Render one attribute, or `None` when it is dropped from the output.
fn render_attribute(tag_lower: &str, attribute: &Attribute) -> Option<String> {
    let name = attribute.name.local.to_string();
    let value = attribute.value.to_string();

    if name == "style" {
        return Some(format!("style={{{}}}", translate_inline_style(&value)));
    }

    let prop = jsx_attribute_name(tag_lower, &name);
    if is_numeric(&value) {
        Some(format!("{}={{{}}}", prop, value.trim()))
    } else if !value.is_empty() {
        Some(format!("{}=\"{}\"", prop, value.replace('"', "&quot;")))
    } else if prop == "alt" {
        // empty alt is meaningful to screen readers
        Some("alt=\"\"".to_string())
    } else {
        None
    }
}

/// Emits a JSON string literal for relocated `textarea`/`style` content,
/// mirroring the original `JSON.stringify` behavior.
fn json_string(text: &str) -> String {
    serde_json::to_string(text).expect("serializing a string to JSON cannot fail")
}

/// The closing tag moves to its own line when the body spans multiple
/// children, or when the sole text child itself spans lines.
fn needs_closing_break(children: &[Handle]) -> bool {
    if children.len() > 1 {
        return true;
    }
    match children.first().map(|child| &child.data) {
        Some(NodeData::Text { contents }) => contents.borrow().trim().contains('\n'),
        _ => false,
    }
}

fn node_kind_name(data: &NodeData) -> &'static str {
    match data {
        NodeData::Document => "document",
        NodeData::Doctype { .. } => "doctype",
        NodeData::Text { .. } => "text",
        NodeData::Comment { .. } => "comment",
        NodeData::Element { .. } => "element",
        NodeData::ProcessingInstruction { .. } => "processing-instruction",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_into_container;

    fn first_element(html: &str) -> Handle {
        let container = parse_into_container(html).unwrap();
        // Move the element out of the container so the container's drop does
        // not drain the returned subtree (rcdom's Drop recursively clears the
        // children of every node still reachable from the one being dropped).
        let element = container
            .children
            .borrow_mut()
            .drain(..)
            .find(|child| matches!(child.data, NodeData::Element { .. }))
            .unwrap();
        element
    }

    #[test]
    fn test_empty_element_self_closes() {
        let serializer = JsxSerializer::default();
        assert_eq!(serializer.serialize(&first_element("<br>"), 0), "<br />");
        assert_eq!(
            serializer.serialize(&first_element("<div></div>"), 0),
            "<div />"
        );
    }

    #[test]
    fn test_numeric_attribute_value_braced() {
        let serializer = JsxSerializer::default();
        assert_eq!(
            serializer.serialize(&first_element("<div tabindex=\"3\"></div>"), 0),
            "<div tabindex={3} />"
        );
    }

    #[test]
    fn test_double_quotes_in_attribute_value() {
        let serializer = JsxSerializer::default();
        assert_eq!(
            serializer.serialize(&first_element("<div title='a \"b\"'></div>"), 0),
            "<div title=\"a &quot;b&quot;\" />"
        );
    }

    #[test]
    fn test_nested_element_indentation() {
        let serializer = JsxSerializer::default();
        assert_eq!(
            serializer.serialize(&first_element("<ul><li>a</li><li>b</li></ul>"), 0),
            "<ul>\n  <li>{'a'}</li>\n  <li>{'b'}</li>\n</ul>"
        );
    }

    #[test]
    fn test_multiline_text_is_split() {
        let serializer = JsxSerializer::default();
        assert_eq!(
            serializer.serialize(&first_element("<p>one\ntwo</p>"), 0),
            "<p>\n  {'one'}\n  {'two'}\n</p>"
        );
    }

    #[test]
    fn test_comment_slashes_escaped() {
        let serializer = JsxSerializer::default();
        assert_eq!(
            serializer.serialize(&first_element("<div><!-- a/b/c --></div>"), 0),
            "<div>\n  {/* a\\/b\\/c */}</div>"
        );
    }
}
