//! `<head>` tags derived from [`PageMetadata`].

use super::{RenderContext, markup::Element, metadata::PageMetadata};
use crate::utils::assets::versioned;

fn meta_name(name: &'static str, content: impl Into<String>) -> Element {
    Element::new("meta").attr("name", name).attr("content", content)
}

fn meta_property(property: &'static str, content: impl Into<String>) -> Element {
    Element::new("meta")
        .attr("property", property)
        .attr("content", content)
}

/// Build the `<head>` element.
///
/// Tag order is fixed: charset and viewport, title, description, authorship,
/// robots, verification, Open Graph, Twitter, then stylesheets and icon.
pub fn head(meta: &PageMetadata, ctx: &RenderContext) -> Element {
    let mut tags = vec![
        Element::new("meta").attr("charset", "utf-8"),
        meta_name("viewport", "width=device-width, initial-scale=1"),
        Element::new("title").text(&meta.title),
        meta_name("description", &meta.description),
    ];

    for author in &meta.authors {
        if let Some(url) = &author.url {
            tags.push(Element::new("link").attr("rel", "author").attr("href", url));
        }
        tags.push(meta_name("author", &author.name));
    }
    if !meta.keywords.is_empty() {
        tags.push(meta_name("keywords", meta.keywords.join(",")));
    }
    if let Some(creator) = &meta.creator {
        tags.push(meta_name("creator", creator));
    }

    tags.push(meta_name("robots", &meta.robots));
    if let Some(bot) = &meta.google_bot {
        tags.push(meta_name("googlebot", bot));
    }
    if let Some(token) = &meta.google_verification {
        tags.push(meta_name("google-site-verification", token));
    }

    let og = &meta.open_graph;
    tags.push(meta_property("og:title", &og.title));
    tags.push(meta_property("og:description", &og.description));
    if let Some(url) = &og.url {
        tags.push(meta_property("og:url", url));
    }
    tags.push(meta_property("og:site_name", &og.site_name));
    tags.push(meta_property("og:locale", &og.locale));
    tags.push(meta_property("og:type", &og.kind));

    let tw = &meta.twitter;
    tags.push(meta_name("twitter:card", tw.card.as_str()));
    if let Some(creator) = &tw.creator {
        tags.push(meta_name("twitter:creator", creator));
    }
    tags.push(meta_name("twitter:title", &tw.title));
    tags.push(meta_name("twitter:description", &tw.description));

    let version = ctx.version.as_deref();
    for href in &ctx.stylesheets {
        tags.push(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", versioned(href, version)),
        );
    }
    if let Some(icon) = &ctx.icon {
        tags.push(
            Element::new("link")
                .attr("rel", "icon")
                .attr("href", versioned(icon, version)),
        );
    }

    Element::new("head").children(tags)
}
