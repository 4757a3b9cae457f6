//! Adapter over the external HTML parser.
//!
//! The converter core does not embed an HTML parser; html5ever builds an
//! rcdom tree and this module exposes the handful of operations the rest
//! of the crate needs: fragment parsing into a detached container, a
//! script-descendant existence check, text aggregation, and parent lookup.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use html5ever::tendril::TendrilSink;
use html5ever::{local_name, namespace_url, ns, parse_fragment, ParseOpts, QualName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

/// Parse an HTML fragment and re-parent its top-level nodes under a
/// detached `<div>` container. The container doubles as the wrapper
/// element when the fragment turns out to have no single root.
pub fn parse_into_container(html: &str) -> io::Result<Handle> {
    let dom = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("div")),
        Vec::new(),
    )
    .from_utf8()
    .read_from(&mut html.as_bytes())?;

    let container = new_container();
    // Fragment parsing roots the content under a synthetic <html> element.
    let document_children = dom.document.children.borrow();
    if let Some(root) = document_children
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
    {
        let mut adopted = container.children.borrow_mut();
        for child in root.children.borrow_mut().drain(..) {
            child.parent.set(Some(Rc::downgrade(&container)));
            adopted.push(child);
        }
    }
    Ok(container)
}

fn new_container() -> Handle {
    Node::new(NodeData::Element {
        name: QualName::new(None, ns!(html), local_name!("div")),
        attrs: RefCell::new(Vec::new()),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

/// Existence check equivalent to `querySelector("script")`.
pub fn has_script_descendant(handle: &Handle) -> bool {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if name.local == local_name!("script") {
                return true;
            }
        }
        if has_script_descendant(child) {
            return true;
        }
    }
    false
}

/// Concatenated descendant text, the DOM `textContent` read.
pub fn text_content(handle: &Handle) -> String {
    let mut out = String::new();
    collect_text(handle, &mut out);
    out
}

fn collect_text(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            out.push_str(&contents.borrow());
        }
        collect_text(child, out);
    }
}

/// Tag name of the nearest parent element, if the node has one.
pub fn parent_element_tag(handle: &Handle) -> Option<String> {
    let weak = handle.parent.take();
    let tag = weak
        .as_ref()
        .and_then(|parent| parent.upgrade())
        .and_then(|parent| match &parent.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        });
    handle.parent.set(weak);
    tag
}
