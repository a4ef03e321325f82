//! `build-manifest.json` for standalone output.
//!
//! Lists everything a self-contained server needs to serve the build
//! without re-reading `folio.toml`.

use crate::{
    config::{OutputMode, SiteConfig},
    log,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::PathBuf};

/// File name, relative to the output directory.
pub const MANIFEST_FILE: &str = "build-manifest.json";

#[derive(Debug, Serialize)]
pub struct BuildManifest<'a> {
    pub build_id: &'a str,
    pub output_mode: OutputMode,
    pub trailing_slash: bool,
    pub routes: Vec<Route>,
    /// Output-relative files, sorted.
    pub files: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub file: &'static str,
}

impl<'a> BuildManifest<'a> {
    pub fn new(config: &SiteConfig, build_id: &'a str, mut files: Vec<String>) -> Self {
        files.sort();
        files.dedup();
        Self {
            build_id,
            output_mode: config.build.output_mode,
            trailing_slash: config.build.trailing_slash,
            routes: vec![Route {
                path: "/",
                file: "index.html",
            }],
            files,
        }
    }
}

/// Write the manifest when the output mode is `standalone`.
pub fn write_manifest(config: &SiteConfig, manifest: &BuildManifest<'_>) -> Result<Option<PathBuf>> {
    if config.build.output_mode != OutputMode::Standalone {
        return Ok(None);
    }

    let path = config.build.output.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

    log!("build"; "{MANIFEST_FILE}");
    Ok(Some(path))
}
