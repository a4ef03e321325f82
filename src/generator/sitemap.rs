//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing the page for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    build::write_file,
    config::SiteConfig,
    log,
    utils::{minify, url::apply_trailing_slash},
};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Public API
// ============================================================================

/// Build sitemap if enabled in config.
///
/// Returns the written path, or `None` when disabled or when the page has no
/// canonical URL to list.
pub fn build_sitemap(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.build.sitemap.enable {
        return Ok(None);
    }
    let Some(sitemap) = Sitemap::from_config(config, Utc::now().date_naive()) else {
        log!("warn"; "sitemap skipped: [site.url] is not set");
        return Ok(None);
    };
    sitemap.write(config).map(Some)
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
struct Sitemap {
    /// List of URL entries
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    /// Full URL location
    loc: String,
    /// Last modification date
    lastmod: NaiveDate,
}

impl Sitemap {
    /// The single route `/` at the canonical URL.
    fn from_config(config: &SiteConfig, lastmod: NaiveDate) -> Option<Self> {
        let url = config.site.url.as_deref()?;
        let loc = apply_trailing_slash(url, config.build.trailing_slash);
        Some(Self {
            urls: vec![UrlEntry { loc, lastmod }],
        })
    }

    /// Generate sitemap XML string.
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry.lastmod.format("%Y-%m-%d")
            ));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to output file.
    fn write(self, config: &SiteConfig) -> Result<PathBuf> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let xml = self.into_xml();
        let xml = minify::xml(xml.as_bytes(), config.build.minify);

        write_file(&sitemap_path, &xml)?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(sitemap_path)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================
