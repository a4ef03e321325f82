//! Static asset collection and copying.
//!
//! Assets are copied from `[build].assets` to the output root, keeping their
//! relative paths. Top-level directories named in
//! `[build].optimize_package_imports` are treated as packages: only the files
//! the rendered page actually references are copied.

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};
use walkdir::WalkDir;

/// Recursively collect all files under `dir`, sorted for stable output.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Site-absolute href for an asset-relative path: `styles/a.css` → `/styles/a.css`.
pub fn asset_href(rel: &Path) -> String {
    let joined = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Append a cache-busting query when a version is given.
pub fn versioned(href: &str, version: Option<&str>) -> String {
    match version {
        Some(v) => format!("{href}?v={v}"),
        None => href.to_owned(),
    }
}

/// Whether an asset-relative path lives inside an optimized package.
fn is_in_package(rel: &Path, packages: &[String]) -> bool {
    rel.components()
        .next()
        .and_then(|c| c.as_os_str().to_str())
        .is_some_and(|first| packages.iter().any(|p| p == first))
}

/// Decide whether an asset should be copied for the given page markup.
fn should_copy(rel: &Path, packages: &[String], html: &str) -> bool {
    !is_in_package(rel, packages) || html.contains(&asset_href(rel))
}

/// Copy assets to the output directory.
///
/// Returns the asset-relative paths that were copied, in sorted order.
pub fn copy_assets(config: &SiteConfig, html: &str) -> Result<Vec<PathBuf>> {
    let assets = &config.build.assets;
    if !assets.is_dir() {
        return Ok(Vec::new());
    }

    let packages = &config.build.optimize_package_imports;
    let selected: Vec<PathBuf> = collect_all_files(assets)
        .into_iter()
        .filter_map(|path| path.strip_prefix(assets).ok().map(Path::to_path_buf))
        .filter(|rel| should_copy(rel, packages, html))
        .collect();

    selected.par_iter().try_for_each(|rel| {
        let dest = config.build.output.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(assets.join(rel), &dest)
            .with_context(|| format!("Failed to copy asset {}", rel.display()))?;
        anyhow::Ok(())
    })?;

    log!("assets"; "copied {} files", selected.len());
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_asset_href() {
        assert_eq!(asset_href(Path::new("styles/globals.css")), "/styles/globals.css");
        assert_eq!(asset_href(Path::new("./favicon.ico")), "/favicon.ico");
    }

    #[test]
    fn test_versioned() {
        assert_eq!(versioned("/a.css", None), "/a.css");
        assert_eq!(versioned("/a.css", Some("abc")), "/a.css?v=abc");
    }

    #[test]
    fn test_should_copy_packages() {
        let packages = vec!["lucide-react".to_string()];
        let html = r#"<img src="/lucide-react/github.svg"/>"#;

        assert!(should_copy(Path::new("styles/globals.css"), &packages, html));
        assert!(should_copy(Path::new("lucide-react/github.svg"), &packages, html));
        assert!(!should_copy(Path::new("lucide-react/mail.svg"), &packages, html));
    }

    #[test]
    fn test_copy_assets() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(assets.join("styles")).unwrap();
        fs::create_dir_all(assets.join("lucide-react")).unwrap();
        fs::write(assets.join("styles/globals.css"), "body{}").unwrap();
        fs::write(assets.join("lucide-react/mail.svg"), "<svg/>").unwrap();
        fs::write(assets.join("lucide-react/github.svg"), "<svg/>").unwrap();

        let mut config = SiteConfig::default();
        config.build.assets = assets;
        config.build.output = dir.path().join("public");

        let copied = copy_assets(&config, r#"<img src="/lucide-react/github.svg"/>"#).unwrap();

        assert_eq!(
            copied,
            [
                PathBuf::from("lucide-react/github.svg"),
                PathBuf::from("styles/globals.css"),
            ]
        );
        assert!(dir.path().join("public/styles/globals.css").is_file());
        assert!(!dir.path().join("public/lucide-react/mail.svg").exists());
    }

    #[test]
    fn test_copy_assets_missing_dir() {
        let dir = tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.assets = dir.path().join("nope");

        assert!(copy_assets(&config, "").unwrap().is_empty());
    }
}
