//! Document shell: `<html>`, `<head>` and the body wrapper around the
//! content slot.

use super::markup::Element;

/// Base classes applied to `<body>` after the font class.
const BODY_CLASSES: &str = "font-sans antialiased min-h-screen bg-background";

/// Wrap `content` in the page skeleton.
///
/// ```text
/// html[lang]
/// ├── head
/// └── body.{font} font-sans antialiased min-h-screen bg-background
///     └── div.relative flex min-h-screen flex-col
///         └── main.flex-1
///             └── content
/// ```
pub fn shell(lang: &str, head: Element, font_class: Option<&str>, content: Element) -> Element {
    let body_class = match font_class {
        Some(font) => format!("{font} {BODY_CLASSES}"),
        None => BODY_CLASSES.to_owned(),
    };

    let body = Element::new("body").class(body_class).child(
        Element::new("div")
            .class("relative flex min-h-screen flex-col")
            .child(Element::new("main").class("flex-1").child(content)),
    );

    Element::new("html").attr("lang", lang).child(head).child(body)
}
