//! `[build]` section configuration.
//!
//! Contains build settings including paths, minification, checks, output
//! packaging, fonts, tailwind and companion files.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build id value that derives the id from the rendered page content.
pub const CONTENT_BUILD_ID: &str = "content";

// ============================================================================
// Enums
// ============================================================================

/// How the output directory is packaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Static files plus `build-manifest.json` for self-contained serving (default).
    #[default]
    Standalone,
    /// Static files only.
    Export,
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in folio.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"
/// minify = true
/// output_mode = "standalone"
/// trailing_slash = false
/// build_id = "build"
///
/// [build.checks]
/// ignore_lint = true
/// ignore_type_errors = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets directory, copied to the output root.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify HTML output (removes whitespace).
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear output directory before each build.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    #[serde(default)]
    pub output_mode: OutputMode,

    /// Keep (`true`) or strip (`false`) trailing slashes on routes and URLs.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub trailing_slash: bool,

    /// Literal build id, or `"content"` for a content-hash id.
    /// A literal id disables cache-busting query strings.
    #[serde(default = "defaults::build::build_id")]
    #[educe(Default = defaults::build::build_id())]
    pub build_id: String,

    /// Top-level asset directories copied only when referenced by the page.
    #[serde(default = "defaults::build::optimize_package_imports")]
    #[educe(Default = defaults::build::optimize_package_imports())]
    pub optimize_package_imports: Vec<String>,

    #[serde(default)]
    pub checks: ChecksConfig,

    #[serde(default)]
    pub font: FontConfig,

    #[serde(default)]
    pub head: HeadConfig,

    #[serde(default)]
    pub tailwind: TailwindConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub robots: RobotsFileConfig,
}

impl BuildConfig {
    /// Whether the build id is derived from page content.
    pub fn is_content_build_id(&self) -> bool {
        self.build_id == CONTENT_BUILD_ID
    }
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.checks]` section - lint and type-check enforcement.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    /// Report content lint findings as warnings instead of failing.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub ignore_lint: bool,

    /// Report metadata type errors as warnings instead of failing.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub ignore_type_errors: bool,
}

/// `[build.font]` section - font variable injection.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    #[serde(default = "defaults::build::font::family")]
    #[educe(Default = defaults::build::font::family())]
    pub family: String,

    /// Character subsets, e.g. `latin`, `latin-ext`.
    #[serde(default = "defaults::build::font::subsets")]
    #[educe(Default = defaults::build::font::subsets())]
    pub subsets: Vec<String>,

    /// CSS custom property carrying the font stack.
    #[serde(default = "defaults::build::font::variable")]
    #[educe(Default = defaults::build::font::variable())]
    pub variable: String,

    #[serde(default = "defaults::build::font::fallback")]
    #[educe(Default = defaults::build::font::fallback())]
    pub fallback: Vec<String>,

    /// Self-hosted font files (relative to assets directory).
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

/// `[build.head]` section for extra head links.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HeadConfig {
    /// Favicon path (relative to assets directory)
    #[serde(default)]
    pub icon: Option<PathBuf>,

    /// CSS stylesheet paths (relative to assets directory)
    #[serde(default = "defaults::build::head::styles")]
    #[educe(Default = defaults::build::head::styles())]
    pub styles: Vec<PathBuf>,
}

/// `[build.tailwind]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TailwindConfig {
    /// Enable Tailwind CSS processing
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub enable: bool,

    /// Input CSS file path
    #[serde(default = "defaults::build::tailwind::input")]
    #[educe(Default = defaults::build::tailwind::input())]
    pub input: Option<PathBuf>,

    /// Tailwind command and arguments
    #[serde(default = "defaults::build::tailwind::command")]
    #[educe(Default = defaults::build::tailwind::command())]
    pub command: Vec<String>,
}

/// `[build.sitemap]` section
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to the output directory.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.robots]` section - `robots.txt` generation.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RobotsFileConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output path, relative to the output directory.
    #[serde(default = "defaults::build::robots::path")]
    #[educe(Default = defaults::build::robots::path())]
    pub path: PathBuf,
}

// ============================================================================
// Tests
// ============================================================================
