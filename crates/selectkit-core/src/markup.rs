//! Backend-neutral markup for a control.
//!
//! The functions here turn a [`ControlView`] into a [`Node`] tree that
//! follows the markup contract:
//!
//! ```text
//! div.custom-select-container[tabindex=0]
//! ├── span.custom-select-value      (icon? + label)
//! └── ul.custom-select-options(.show)
//!     └── li.custom-select-option(.selected)[data-value=…]   (icon? + label)
//! ```
//!
//! Browser backends build real elements from the same pieces; on the host,
//! [`Node::to_html`] renders the tree as a string.

use crate::config::ClassNames;
use crate::view::{ControlView, LabelView, RowView};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Attribute holding a row's option value.
pub const DATA_VALUE: &str = "data-value";

/// A markup node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Element with classes, attributes and children
    Element(Element),
    /// Text content
    Text(String),
}

/// A markup element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name
    pub tag: String,
    /// Class list
    pub classes: Vec<String>,
    /// Attributes other than `class`, in insertion order
    pub attributes: Vec<(String, String)>,
    /// Child nodes
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add several classes.
    #[must_use]
    pub fn classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Add a class when `on` is true.
    #[must_use]
    pub fn class_if(self, class: &str, on: bool) -> Self {
        if on {
            self.class(class)
        } else {
            self
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append child nodes.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Check for a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    /// Render as HTML with text and attribute escaping.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(text) => escape_into(text, out),
            Self::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                if !el.classes.is_empty() {
                    out.push_str(" class=\"");
                    escape_into(&el.classes.join(" "), out);
                    out.push('"');
                }
                for (name, value) in &el.attributes {
                    let _ = write!(out, " {name}=\"");
                    escape_into(value, out);
                    out.push('"');
                }
                out.push('>');
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }

    /// Number of elements in this subtree carrying `class`.
    #[must_use]
    pub fn count_class(&self, class: &str) -> usize {
        match self {
            Self::Text(_) => 0,
            Self::Element(el) => {
                usize::from(el.has_class(class))
                    + el.children.iter().map(|c| c.count_class(class)).sum::<usize>()
            }
        }
    }

    /// Concatenated text content.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Element(el) => el.children.iter().map(Self::text_content).collect(),
        }
    }
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Icon element followed by a separating space, or nothing.
#[must_use]
pub fn icon_prefix(icon: &[String]) -> Vec<Node> {
    if icon.is_empty() {
        return Vec::new();
    }
    vec![
        Element::new("span").classes(icon.iter().cloned()).into(),
        Node::Text(" ".to_string()),
    ]
}

/// Children of the label region.
#[must_use]
pub fn label_content(label: &LabelView) -> Vec<Node> {
    let mut nodes = icon_prefix(&label.icon);
    nodes.push(Node::Text(label.text.clone()));
    nodes
}

/// The label-display region.
#[must_use]
pub fn label(label: &LabelView, classes: &ClassNames) -> Element {
    Element::new("span")
        .class(&classes.value)
        .children(label_content(label))
}

/// One option row.
#[must_use]
pub fn row(row: &RowView, classes: &ClassNames) -> Element {
    Element::new("li")
        .class(&classes.option)
        .class_if(&classes.selected, row.selected)
        .attr(DATA_VALUE, &row.value)
        .children(icon_prefix(&row.icon))
        .text(&row.label)
}

/// The option list without rows.
#[must_use]
pub fn list_shell(open: bool, classes: &ClassNames) -> Element {
    Element::new("ul")
        .class(&classes.options)
        .class_if(&classes.show, open)
}

/// The container without children.
#[must_use]
pub fn container_shell(classes: &ClassNames) -> Element {
    Element::new("div")
        .class(&classes.container)
        .attr("tabindex", "0")
}

/// The full visual tree of a control.
#[must_use]
pub fn container(view: &ControlView, classes: &ClassNames) -> Node {
    let list = list_shell(view.open, classes)
        .children(view.rows.iter().map(|r| row(r, classes).into()));
    container_shell(classes)
        .child(label(&view.label, classes))
        .child(list)
        .into()
}
