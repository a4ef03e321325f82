//! Minimal markup tree and its serializer.
//!
//! Views build an [`Element`] tree; [`to_html`] writes it with `quick-xml`,
//! which escapes every text node and attribute value. Nothing in the tree
//! can carry raw markup, so metadata and copy always render as plain text.
//!
//! Element keys mirror list-item identity: they are kept on the tree for
//! uniqueness checks but never rendered.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["meta", "link", "img", "br", "hr", "input"];

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(elem) => Some(elem),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Self::Element(elem)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub key: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            key: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
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

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements, skipping text nodes.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Depth-first search for the first element matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.element_children().find_map(|child| child.find(pred))
    }
}

fn collect_text(elem: &Element, out: &mut String) {
    for child in &elem.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) => collect_text(inner, out),
        }
    }
}

/// Serialize a document root, prefixed with the HTML5 doctype.
pub fn to_html(root: &Element) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.get_mut().write_all(b"<!DOCTYPE html>")?;
    write_element(&mut writer, root)?;
    Ok(writer.into_inner().into_inner())
}

/// Serialize a fragment without doctype.
pub fn fragment_to_html(elem: &Element) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_element(&mut writer, elem)?;
    Ok(writer.into_inner().into_inner())
}

fn write_element(writer: &mut XmlWriter, elem: &Element) -> Result<()> {
    let mut start = BytesStart::new(elem.tag);
    for (name, value) in &elem.attrs {
        start.push_attribute((*name, value.as_str()));
    }

    if VOID_ELEMENTS.contains(&elem.tag) {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in &elem.children {
        match child {
            Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            Node::Element(inner) => write_element(writer, inner)?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(elem.tag)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(elem: &Element) -> String {
        String::from_utf8(fragment_to_html(elem).unwrap()).unwrap()
    }

    #[test]
    fn test_nested_elements() {
        let elem = Element::new("div")
            .class("grid")
            .child(Element::new("span").text("React"));

        assert_eq!(render(&elem), r#"<div class="grid"><span>React</span></div>"#);
    }

    #[test]
    fn test_void_elements_self_close() {
        let elem = Element::new("meta")
            .attr("name", "robots")
            .attr("content", "index, follow");

        assert_eq!(render(&elem), r#"<meta name="robots" content="index, follow"/>"#);
    }

    #[test]
    fn test_empty_non_void_keeps_closing_tag() {
        assert_eq!(render(&Element::new("main")), "<main></main>");
    }

    #[test]
    fn test_text_and_attrs_are_escaped() {
        let elem = Element::new("p")
            .attr("title", "a\"b")
            .text("<script>alert(1)</script>");
        let html = render(&elem);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_keys_are_not_rendered() {
        let elem = Element::new("div").key("React").text("React");
        assert_eq!(render(&elem), "<div>React</div>");
    }

    #[test]
    fn test_doctype_prefix() {
        let html = to_html(&Element::new("html").attr("lang", "es")).unwrap();
        assert_eq!(html, br#"<!DOCTYPE html><html lang="es"></html>"#);
    }

    #[test]
    fn test_text_content_and_find() {
        let elem = Element::new("h1")
            .text("¡Hola! Soy ")
            .child(Element::new("span").class("text-primary").text("Ana"));

        assert_eq!(elem.text_content(), "¡Hola! Soy Ana");
        let span = elem
            .find(&|e| e.get_attr("class") == Some("text-primary"))
            .unwrap();
        assert_eq!(span.text_content(), "Ana");
    }
}
