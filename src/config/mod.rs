//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                              |
//! |--------------|------------------------------------------------------|
//! | `[site]`     | Language, canonical URL, title, SEO/social metadata  |
//! | `[content]`  | Hero, stats, skills and call-to-action copy          |
//! | `[build]`    | Paths, checks, output mode, fonts, companions        |
//! | `[serve]`    | Development server (port, interface, watch)          |
//!
//! # Example
//!
//! ```toml
//! [site]
//! language = "es"
//! url = "https://ana.dev"
//!
//! [site.metadata.twitter]
//! creator = "@ana"
//!
//! [content.hero]
//! name = "Ana García"
//!
//! [build]
//! output_mode = "standalone"
//! trailing_slash = false
//! ```

mod build;
mod content;
pub mod defaults;
mod error;
mod handle;
mod serve;
mod site;

pub use build::{BuildConfig, FontConfig, OutputMode};
pub use content::{ContentConfig, CtaContent, HeroContent, Stat};
pub use error::ConfigError;
pub use handle::{cfg, init_config, rebind_port, reload_config};
pub use site::{Author, CrawlerRobots, ImagePreview, TitleConfig, TwitterCard};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    utils::font,
};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use serve::ServeConfig;
use site::SiteSection;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Page-wide metadata
    #[serde(default)]
    pub site: SiteSection,

    /// Home view copy
    #[serde(default)]
    pub content: ContentConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load the config named by the CLI (or defaults when absent) and
    /// apply CLI overrides.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.is_file() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };
        self.update_path_with_root(cli, &root);

        match &cli.command {
            Commands::Build { build_args } => self.update_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
                watch,
            } => {
                self.update_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                Self::update_option(&mut self.serve.watch, watch.as_ref());
                if build_args.base_url.is_none() {
                    self.site.url = Some(self.serve_url());
                }
            }
            Commands::Init { .. } => {}
        }
    }

    fn update_build_args(&mut self, args: &BuildArgs) {
        self.build.clean |= args.clean;
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.tailwind.enable, args.tailwind.as_ref());
        if let Some(url) = &args.base_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Address of the preview server.
    fn serve_url(&self) -> String {
        format!("http://{}:{}", self.serve.interface, self.serve.port)
    }

    /// Move the preview server to `port`, the one it actually bound.
    ///
    /// A canonical URL derived from the serve address moves with it; an
    /// explicit `--base-url` or `[site].url` is left alone.
    pub fn rebind(&mut self, port: u16) {
        let derived = self.site.url.as_deref() == Some(self.serve_url().as_str());
        self.serve.port = port;
        if derived {
            self.site.url = Some(self.serve_url());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        Self::update_option(&mut self.build.assets, cli.assets.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));

        if let Some(input) = self.build.tailwind.input.as_ref() {
            self.build.tailwind.input = Some(Self::normalize_path(&root.join(input)));
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate settings that would make the build meaningless.
    ///
    /// These are always fatal; softer content/metadata findings are
    /// reported by `check::run_checks`.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.site.url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            bail!(ConfigError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        if self.build.build_id.is_empty()
            || self
                .build
                .build_id
                .chars()
                .any(|c| c.is_whitespace() || c == '/' || c == '\\')
        {
            bail!(ConfigError::Validation(
                "[build.build_id] must be a non-empty token without spaces or slashes".into()
            ));
        }

        let font = &self.build.font;
        if font.enable {
            if !font.variable.starts_with("--") {
                bail!(ConfigError::Validation(
                    "[build.font.variable] must start with `--`".into()
                ));
            }
            if let Some(unknown) = font
                .subsets
                .iter()
                .find(|subset| font::unicode_range(subset).is_none())
            {
                bail!(ConfigError::Validation(format!(
                    "[build.font.subsets] unknown subset `{unknown}`"
                )));
            }
        }

        if self.build.tailwind.enable {
            Self::check_command_installed("[build.tailwind.command]", &self.build.tailwind.command)?;

            match &self.build.tailwind.input {
                None => bail!(
                    "[build.tailwind.enable] = true requires [build.tailwind.input] to be set"
                ),
                Some(path) if !path.is_file() => {
                    bail!(ConfigError::Validation(
                        "[build.tailwind.input] not found or not a file".into()
                    ))
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Check if a command is installed and available
    fn check_command_installed(field: &str, command: &[String]) -> Result<()> {
        let Some(cmd) = command.first() else {
            bail!(ConfigError::Validation(format!(
                "{field} must have at least one element"
            )));
        };

        which::which(cmd)
            .with_context(|| format!("`{cmd}` not found. Please install it first."))?;

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn leak_cli(args: &[&str]) -> &'static Cli {
        Box::leak(Box::new(Cli::parse_from(args)))
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [site]
            language = "en"

            [content.hero]
            name = "Ana"
        "#,
        )
        .unwrap();

        assert_eq!(config.site.language, "en");
        assert_eq!(config.content.hero.name, "Ana");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nlanguage = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let result = SiteConfig::from_str(
            r#"
            [eslint]
            ignore_during_builds = true
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new("./"));
        assert_eq!(config.site.language, "es");
        assert!(config.build.minify);
        assert_eq!(config.serve.port, 5277);
    }

    #[test]
    fn test_default_config_roundtrips_through_toml() {
        let text = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        let parsed = SiteConfig::from_str(&text).unwrap();

        assert_eq!(parsed.site.title.default, SiteConfig::default().site.title.default);
        assert_eq!(parsed.content.skills.len(), 6);
        assert_eq!(parsed.build.output, PathBuf::from("public"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_update_with_cli_build_args() {
        let cli = leak_cli(&[
            "folio",
            "--root",
            "/tmp/folio-site",
            "build",
            "--clean",
            "--minify=false",
            "--base-url",
            "https://ana.dev",
        ]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        assert!(config.build.clean);
        assert!(!config.build.minify);
        assert_eq!(config.site.url.as_deref(), Some("https://ana.dev"));
        assert_eq!(config.build.output, PathBuf::from("/tmp/folio-site/public"));
        assert_eq!(config.config_path, PathBuf::from("/tmp/folio-site/folio.toml"));
    }

    #[test]
    fn test_update_with_cli_serve_rewrites_url() {
        let cli = leak_cli(&["folio", "--root", "/tmp/folio-serve", "serve", "-p", "8080"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.site.url.as_deref(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn test_rebind_moves_derived_url() {
        let cli = leak_cli(&["folio", "--root", "/tmp/folio-serve", "serve", "-p", "8080"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        config.rebind(8081);
        assert_eq!(config.serve.port, 8081);
        assert_eq!(config.site.url.as_deref(), Some("http://127.0.0.1:8081"));
    }

    #[test]
    fn test_rebind_keeps_explicit_url() {
        let cli = leak_cli(&[
            "folio", "--root", "/tmp/folio-serve", "serve", "--base-url", "https://ana.dev",
        ]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        config.rebind(5278);
        assert_eq!(config.serve.port, 5278);
        assert_eq!(config.site.url.as_deref(), Some("https://ana.dev"));
    }

    #[test]
    fn test_update_with_cli_init_name() {
        let cli = leak_cli(&["folio", "--root", "/tmp/folio-init", "init", "mysite"]);
        let mut config = SiteConfig::default();
        config.update_with_cli(cli);

        assert_eq!(config.get_root(), Path::new("/tmp/folio-init/mysite"));
    }

    #[test]
    fn test_validate_defaults() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_relative_url() {
        let mut config = SiteConfig::default();
        config.site.url = Some("tu-portfolio.vercel.app".into());

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[site.url]"));
    }

    #[test]
    fn test_validate_build_id() {
        let mut config = SiteConfig::default();
        config.build.build_id = "my build".into();
        assert!(config.validate().is_err());

        config.build.build_id = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_font() {
        let mut config = SiteConfig::default();
        config.build.font.subsets = vec!["klingon".into()];
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.build.font.variable = "font-inter".into();
        assert!(config.validate().is_err());

        // disabled fonts are not validated
        config.build.font.enable = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_tailwind_requires_input() {
        let mut config = SiteConfig::default();
        config.build.tailwind.enable = true;
        // Use a command that certainly exists so only the input is at fault.
        config.build.tailwind.command = vec!["sh".into()];

        assert!(config.validate().is_err());
    }
}
