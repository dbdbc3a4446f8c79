//! Builds DOM elements from selectkit markup.

use selectkit_core::markup::{Element as Markup, Node};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Create a DOM element, children included.
pub fn build(document: &Document, markup: &Markup) -> Result<Element, JsValue> {
    let element = document.create_element(&markup.tag)?;
    if !markup.classes.is_empty() {
        element.set_class_name(&markup.classes.join(" "));
    }
    for (name, value) in &markup.attributes {
        element.set_attribute(name, value)?;
    }
    append_nodes(document, &element, &markup.children)?;
    Ok(element)
}

/// Create an HTML element, children included.
pub fn build_html(document: &Document, markup: &Markup) -> Result<HtmlElement, JsValue> {
    build(document, markup)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("<{}> is not an HTML element", markup.tag)))
}

/// Append markup nodes to `parent`.
pub fn append_nodes(document: &Document, parent: &Element, nodes: &[Node]) -> Result<(), JsValue> {
    for node in nodes {
        match node {
            Node::Text(text) => {
                parent.append_child(&document.create_text_node(text))?;
            }
            Node::Element(child) => {
                let element = build(document, child)?;
                parent.append_child(&element)?;
            }
        }
    }
    Ok(())
}

/// Replace every child of `parent` with markup nodes.
pub fn replace_children(
    document: &Document,
    parent: &Element,
    nodes: &[Node],
) -> Result<(), JsValue> {
    parent.set_text_content(None);
    append_nodes(document, parent, nodes)
}
