//! `robots.txt` generation from the robots directives.
//!
//! ```text
//! User-agent: *
//! Allow: /
//!
//! User-agent: Googlebot
//! Allow: /
//!
//! Sitemap: https://example.com/sitemap.xml
//! ```

use crate::{
    build::write_file,
    config::SiteConfig,
    log,
    utils::assets::asset_href,
};
use anyhow::Result;
use std::path::PathBuf;

/// Write `robots.txt` if enabled in config.
pub fn build_robots(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.build.robots.enable {
        return Ok(None);
    }

    let path = config.build.output.join(&config.build.robots.path);
    write_file(&path, robots_txt(config).as_bytes())?;

    log!("robots"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(Some(path))
}

fn robots_txt(config: &SiteConfig) -> String {
    let robots = &config.site.metadata.robots;
    let mut out = group("*", robots.index);

    if let Some(bot) = &robots.google_bot {
        out.push('\n');
        out.push_str(&group("Googlebot", bot.index));
    }

    if let Some(sitemap) = sitemap_url(config) {
        out.push_str(&format!("\nSitemap: {sitemap}\n"));
    }
    out
}

fn group(agent: &str, index: bool) -> String {
    let rule = if index { "Allow" } else { "Disallow" };
    format!("User-agent: {agent}\n{rule}: /\n")
}

fn sitemap_url(config: &SiteConfig) -> Option<String> {
    if !config.build.sitemap.enable {
        return None;
    }
    let base = config.site.url.as_deref()?.trim_end_matches('/');
    Some(format!("{base}{}", asset_href(&config.build.sitemap.path)))
}
