//! # Fragment: Detached Markup
//!
//! Renderers never touch a live document. They return a `Fragment`, a small
//! owned tree of elements and text, which an adapter either mounts into a
//! document or serializes to HTML.

use serde::Serialize;
use std::fmt::Write;

/// Elements that never carry children or a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node inside a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(ElementNode),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and everything below it.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(el) => el.write_html(out),
        }
    }
}

impl From<ElementNode> for Node {
    fn from(el: ElementNode) -> Self {
        Node::Element(el)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// An element with ordered attributes, classes, inline styles and children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ElementNode {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Shorthand for `ElementNode::new`.
pub fn el(tag: &str) -> ElementNode {
    ElementNode::new(tag)
}

impl ElementNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.styles.push((property.to_string(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Inline style declaration as it would appear in a `style` attribute.
    pub fn style_text(&self) -> String {
        self.styles
            .iter()
            .map(|(prop, value)| format!("{prop}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Depth-first, document-order list of descendant elements (self excluded).
    pub fn descendants(&self) -> Vec<&ElementNode> {
        let mut found = Vec::new();
        for child in &self.children {
            if let Node::Element(el) = child {
                found.push(el);
                found.extend(el.descendants());
            }
        }
        found
    }

    /// Descendant elements carrying `class`, in document order.
    pub fn find_class(&self, class: &str) -> Vec<&ElementNode> {
        self.descendants()
            .into_iter()
            .filter(|el| el.has_class(class))
            .collect()
    }

    pub fn text_content(&self) -> String {
        Node::Element(self.clone()).text_content()
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        if !self.styles.is_empty() {
            let _ = write!(out, " style=\"{}\"", escape_attr(&self.style_text()));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// An ordered list of sibling nodes produced by one renderer call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Fragment {
    pub nodes: Vec<Node>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level elements, skipping bare text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.nodes.iter().filter_map(Node::as_element)
    }

    /// All elements in the fragment carrying `class`, in document order.
    pub fn find_class(&self, class: &str) -> Vec<&ElementNode> {
        let mut found = Vec::new();
        for top in self.elements() {
            if top.has_class(class) {
                found.push(top);
            }
            found.extend(top.find_class(class));
        }
        found
    }

    pub fn text_content(&self) -> String {
        self.nodes.iter().map(Node::text_content).collect()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.write_html(&mut out);
        }
        out
    }
}

impl FromIterator<Node> for Fragment {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<ElementNode> for Fragment {
    fn from_iter<I: IntoIterator<Item = ElementNode>>(iter: I) -> Self {
        iter.into_iter().map(Node::Element).collect()
    }
}

pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

pub fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_nested_markup() {
        let frag: Fragment = [el("div")
            .class("card")
            .attr("data-id", "a\"b")
            .style("animation-delay", "0.1s")
            .child(el("span").text("x < y"))]
        .into_iter()
        .collect();

        assert_eq!(
            frag.to_html(),
            r#"<div class="card" data-id="a&quot;b" style="animation-delay: 0.1s;"><span>x &lt; y</span></div>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let frag: Fragment = [el("img").attr("src", "me.jpeg")].into_iter().collect();
        assert_eq!(frag.to_html(), r#"<img src="me.jpeg">"#);
    }

    #[test]
    fn test_find_class_walks_in_document_order() {
        let frag: Fragment = [
            el("ul").child(el("li").class("item").text("one")),
            el("div").class("item").child(el("b").class("item").text("two")),
        ]
        .into_iter()
        .collect();

        let texts: Vec<_> = frag
            .find_class("item")
            .iter()
            .map(|el| el.text_content())
            .collect();
        assert_eq!(texts, vec!["one", "two", "two"]);
    }
}
