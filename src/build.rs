//! Build orchestration.
//!
//! # Pipeline
//!
//! ```text
//! build_site()
//!     │
//!     ├── run_checks() ─► enforce()      lint / type diagnostics
//!     ├── prepare_output()               clean + create output dir
//!     ├── FontManifest                   _folio/fonts.css
//!     ├── render_document() ─► minify   index.html
//!     ├── copy_assets()                  assets/ (rayon)
//!     ├── run_tailwind()                 _folio/app.css (optional)
//!     ├── sitemap / robots / BUILD_ID
//!     └── write_manifest()               build-manifest.json (standalone)
//! ```

use crate::{
    check::{self, Diagnostic},
    config::SiteConfig,
    generator::{
        manifest::{BuildManifest, write_manifest},
        robots::build_robots,
        sitemap::build_sitemap,
    },
    log,
    render::{self, RenderContext},
    utils::{
        assets::{asset_href, copy_assets},
        css,
        font::{FONT_STYLESHEET, FontManifest},
        hash,
        minify,
    },
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Name of the file holding the build id, relative to the output dir.
pub const BUILD_ID_FILE: &str = "BUILD_ID";

/// Summary of a finished build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub build_id: String,
    /// Findings that were reported but did not fail the build.
    pub diagnostics: Vec<Diagnostic>,
    /// Written files, relative to the output directory.
    pub files: Vec<String>,
}

/// Build the page and its companion files into `[build].output`.
///
/// If `config.build.clean` is true, clears the entire output directory first.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport> {
    let output = &config.build.output;

    let diagnostics = check::run_checks(config);
    check::enforce(config, &diagnostics)?;
    if !diagnostics.is_empty() {
        log!("check"; "{} finding(s) ignored", diagnostics.len());
    }

    prepare_output(output, config.build.clean)?;
    let mut files = Vec::new();

    let font = FontManifest::from_config(&config.build.font);
    if let Some(font) = &font {
        let path = output.join(FONT_STYLESHEET);
        write_file(&path, font.stylesheet.as_bytes())?;
        log!("font"; "{} -> {}", font.variable, font.class_name);
        files.push(FONT_STYLESHEET.to_owned());
    }

    let build_id = resolve_build_id(config)?;
    let version = config.build.is_content_build_id().then(|| build_id.clone());
    let ctx = RenderContext::new(config, font.as_ref()).with_version(version);

    let html = render::render_document(config, &ctx)?;
    let html = minify::html(&html, config.build.minify);
    write_file(&output.join("index.html"), &html)?;
    files.push("index.html".to_owned());

    let copied = copy_assets(config, &String::from_utf8_lossy(&html))?;
    files.extend(copied.iter().map(|rel| relative_name(rel)));

    if config.build.tailwind.enable {
        let path = css::run_tailwind(config)?;
        log!("tailwind"; "{}", css::TAILWIND_STYLESHEET);
        files.push(output_relative(output, &path));
    }

    if let Some(path) = build_sitemap(config)? {
        files.push(output_relative(output, &path));
    }
    if let Some(path) = build_robots(config)? {
        files.push(output_relative(output, &path));
    }
    write_file(&output.join(BUILD_ID_FILE), build_id.as_bytes())?;
    files.push(BUILD_ID_FILE.to_owned());

    let manifest = BuildManifest::new(config, &build_id, files.clone());
    if let Some(path) = write_manifest(config, &manifest)? {
        files.push(output_relative(output, &path));
    }

    log!("build"; "done ({} files, id {build_id})", files.len());

    Ok(BuildReport {
        build_id,
        diagnostics,
        files,
    })
}

/// The configured literal id, or a fingerprint of the rendered body.
pub fn resolve_build_id(config: &SiteConfig) -> Result<String> {
    if config.build.is_content_build_id() {
        let body = render::render_body(config)?;
        Ok(hash::fingerprint(&body))
    } else {
        Ok(config.build.build_id.clone())
    }
}

/// Create the output directory, removing previous content when `clean`.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Write `content`, creating missing parent directories.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// `a/b.css` with forward slashes, no leading slash.
fn relative_name(rel: &Path) -> String {
    asset_href(rel).trim_start_matches('/').to_owned()
}

fn output_relative(output: &Path, path: &Path) -> String {
    relative_name(path.strip_prefix(output).unwrap_or(path))
}
