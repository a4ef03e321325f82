//! Page rendering.
//!
//! The document is a single route (`/`): the shell wraps the home view, and
//! the head is derived from the resolved [`PageMetadata`]. Rendering is pure:
//! identical configuration and context give byte-identical markup.

pub mod button;
pub mod head;
pub mod home;
pub mod markup;
pub mod metadata;
pub mod shell;

use crate::{
    config::SiteConfig,
    utils::{
        assets::asset_href,
        css::TAILWIND_STYLESHEET,
        font::{FONT_STYLESHEET, FontManifest},
    },
};
use anyhow::Result;
use markup::Element;
use metadata::PageMetadata;

/// Build-time inputs to rendering that do not come from `[site]`/`[content]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Stylesheet hrefs, in link order.
    pub stylesheets: Vec<String>,
    pub icon: Option<String>,
    /// Font variable class applied to `<body>`.
    pub font_class: Option<String>,
    /// Cache-busting version appended to stylesheet and icon links.
    pub version: Option<String>,
}

impl RenderContext {
    pub fn new(config: &SiteConfig, font: Option<&FontManifest>) -> Self {
        let mut stylesheets = Vec::new();
        if font.is_some() {
            stylesheets.push(site_href(FONT_STYLESHEET));
        }
        stylesheets.extend(config.build.head.styles.iter().map(|p| asset_href(p)));
        if config.build.tailwind.enable {
            stylesheets.push(site_href(TAILWIND_STYLESHEET));
        }

        Self {
            stylesheets,
            icon: config.build.head.icon.as_deref().map(asset_href),
            font_class: font.map(|f| f.class_name.clone()),
            version: None,
        }
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }
}

fn site_href(path: &str) -> String {
    format!("/{path}")
}

/// Compose the full document tree.
pub fn document(config: &SiteConfig, ctx: &RenderContext) -> Element {
    let meta = PageMetadata::from_config(config);
    shell::shell(
        &config.site.language,
        head::head(&meta, ctx),
        ctx.font_class.as_deref(),
        home::home_view(&config.content),
    )
}

/// Render the body content alone, without doctype or shell.
pub fn render_body(config: &SiteConfig) -> Result<Vec<u8>> {
    markup::fragment_to_html(&home::home_view(&config.content))
}

/// Render the complete `index.html` document (unminified).
pub fn render_document(config: &SiteConfig, ctx: &RenderContext) -> Result<Vec<u8>> {
    markup::to_html(&document(config, ctx))
}
