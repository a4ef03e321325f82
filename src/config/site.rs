//! `[site]` section configuration.
//!
//! Page-wide language, canonical URL, title and the SEO/social metadata
//! record emitted into `<head>`.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in folio.toml.
///
/// # Example
/// ```toml
/// [site]
/// language = "es"
/// url = "https://tu-portfolio.vercel.app"
///
/// [site.title]
/// default = "Mi Portfolio | Desarrollador Full Stack"
/// template = "%s | Mi Portfolio"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// BCP 47 language code written to `<html lang>`.
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,

    /// Canonical URL of the deployed page.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: Option<String>,

    #[serde(default)]
    pub title: TitleConfig,

    #[serde(default)]
    pub metadata: MetadataConfig,
}

impl SiteSection {
    /// Every free-text field set in `[site]`, keyed by its config path.
    ///
    /// Optional fields that fall back to another value are listed only when
    /// set, so one bad string is reported once, under the key that holds it.
    pub fn text_fields(&self) -> Vec<(String, &str)> {
        let meta = &self.metadata;
        let mut fields = vec![
            ("site.title.default".to_owned(), self.title.default.as_str()),
            ("site.metadata.description".to_owned(), meta.description.as_str()),
        ];
        fields.extend(
            meta.keywords
                .iter()
                .enumerate()
                .map(|(i, k)| (format!("site.metadata.keywords[{i}]"), k.as_str())),
        );
        fields.extend(
            meta.authors
                .iter()
                .enumerate()
                .map(|(i, a)| (format!("site.metadata.authors[{i}].name"), a.name.as_str())),
        );

        let optional = [
            ("creator", &meta.creator),
            ("open_graph.title", &meta.open_graph.title),
            ("open_graph.description", &meta.open_graph.description),
            ("twitter.title", &meta.twitter.title),
            ("twitter.description", &meta.twitter.description),
            ("twitter.creator", &meta.twitter.creator),
            ("verification.google", &meta.verification.google),
        ];
        fields.push((
            "site.metadata.open_graph.site_name".to_owned(),
            meta.open_graph.site_name.as_str(),
        ));
        fields.extend(optional.into_iter().filter_map(|(key, value)| {
            value
                .as_deref()
                .map(|v| (format!("site.metadata.{key}"), v))
        }));
        fields
    }
}

/// `[site.title]` - default title plus a template for child pages.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TitleConfig {
    #[serde(default = "defaults::site::title::default")]
    #[educe(Default = defaults::site::title::default())]
    pub default: String,

    /// `%s` is replaced by the child page title.
    #[serde(default = "defaults::site::title::template")]
    #[educe(Default = defaults::site::title::template())]
    pub template: String,
}

impl TitleConfig {
    /// Resolve the document title for a page.
    ///
    /// The home page (`None`) uses the default title; child pages are
    /// wrapped by the template.
    pub fn resolve(&self, page: Option<&str>) -> String {
        match page {
            Some(page) if self.template.contains("%s") => self.template.replacen("%s", page, 1),
            Some(page) => page.to_owned(),
            None => self.default.clone(),
        }
    }
}

/// `[site.metadata]` - description, keywords, authorship and social blocks.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct MetadataConfig {
    #[serde(default = "defaults::site::metadata::description")]
    #[educe(Default = defaults::site::metadata::description())]
    pub description: String,

    /// Ordered; emitted comma-joined.
    #[serde(default = "defaults::site::metadata::keywords")]
    #[educe(Default = defaults::site::metadata::keywords())]
    pub keywords: Vec<String>,

    #[serde(default = "defaults::site::metadata::authors")]
    #[educe(Default = defaults::site::metadata::authors())]
    pub authors: Vec<Author>,

    #[serde(default = "defaults::site::metadata::creator")]
    #[educe(Default = defaults::site::metadata::creator())]
    pub creator: Option<String>,

    #[serde(default)]
    pub open_graph: OpenGraphConfig,

    #[serde(default)]
    pub twitter: TwitterConfig,

    #[serde(default)]
    pub robots: RobotsConfig,

    #[serde(default)]
    pub verification: VerificationConfig,
}

/// Author name record. `url` adds a `<link rel="author">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// `[site.metadata.open_graph]`
///
/// `url`, `title` and `description` fall back to `site.url`,
/// `site.title.default` and `site.metadata.description`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OpenGraphConfig {
    #[serde(rename = "type", default = "defaults::site::metadata::open_graph::r#type")]
    #[educe(Default = defaults::site::metadata::open_graph::r#type())]
    pub kind: String,

    #[serde(default = "defaults::site::metadata::open_graph::locale")]
    #[educe(Default = defaults::site::metadata::open_graph::locale())]
    pub locale: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default = "defaults::site::metadata::open_graph::site_name")]
    #[educe(Default = defaults::site::metadata::open_graph::site_name())]
    pub site_name: String,
}

/// Twitter card layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCard {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::App => "app",
            Self::Player => "player",
        }
    }
}

/// `[site.metadata.twitter]`
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct TwitterConfig {
    #[serde(default)]
    pub card: TwitterCard,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Attribution handle, e.g. `@tu_usuario`.
    #[serde(default = "defaults::site::metadata::twitter::creator")]
    #[educe(Default = defaults::site::metadata::twitter::creator())]
    pub creator: Option<String>,
}

/// `max-image-preview` directive values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePreview {
    None,
    Standard,
    #[default]
    Large,
}

impl ImagePreview {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Large => "large",
        }
    }
}

/// `[site.metadata.robots]`
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub index: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub follow: bool,

    /// Googlebot-specific directives, emitted as `<meta name="googlebot">`.
    #[serde(default = "defaults::site::metadata::robots::google_bot")]
    #[educe(Default = defaults::site::metadata::robots::google_bot())]
    pub google_bot: Option<CrawlerRobots>,
}

impl RobotsConfig {
    /// `index, follow` style directive string.
    pub fn directives(&self) -> String {
        directive_pair(self.index, self.follow).join(", ")
    }
}

/// `[site.metadata.robots.google_bot]` - crawler-specific limits.
///
/// `-1` means "no limit" for the numeric previews.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CrawlerRobots {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub index: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub follow: bool,

    #[serde(default = "defaults::site::metadata::robots::max_video_preview")]
    #[educe(Default = defaults::site::metadata::robots::max_video_preview())]
    pub max_video_preview: Option<i64>,

    #[serde(default = "defaults::site::metadata::robots::max_image_preview")]
    #[educe(Default = defaults::site::metadata::robots::max_image_preview())]
    pub max_image_preview: Option<ImagePreview>,

    #[serde(default = "defaults::site::metadata::robots::max_snippet")]
    #[educe(Default = defaults::site::metadata::robots::max_snippet())]
    pub max_snippet: Option<i64>,
}

impl CrawlerRobots {
    /// `index, follow, max-video-preview:-1, ...` directive string.
    pub fn directives(&self) -> String {
        let mut parts: Vec<String> = directive_pair(self.index, self.follow)
            .into_iter()
            .map(Into::into)
            .collect();
        if let Some(v) = self.max_video_preview {
            parts.push(format!("max-video-preview:{v}"));
        }
        if let Some(v) = self.max_image_preview {
            parts.push(format!("max-image-preview:{}", v.as_str()));
        }
        if let Some(v) = self.max_snippet {
            parts.push(format!("max-snippet:{v}"));
        }
        parts.join(", ")
    }
}

fn directive_pair(index: bool, follow: bool) -> [&'static str; 2] {
    [
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" },
    ]
}

/// `[site.metadata.verification]` - search-engine ownership tokens.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct VerificationConfig {
    #[serde(default = "defaults::site::metadata::verification::google")]
    #[educe(Default = defaults::site::metadata::verification::google())]
    pub google: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_text_fields_use_source_keys() {
        let mut site = SiteSection::default();
        let fields = site.text_fields();

        assert_eq!(fields[0].0, "site.title.default");
        assert!(!fields.iter().any(|(key, _)| key == "site.metadata.open_graph.description"));
        assert_eq!(
            fields
                .iter()
                .filter(|(key, _)| key.starts_with("site.metadata.keywords["))
                .count(),
            site.metadata.keywords.len()
        );

        site.metadata.open_graph.description = Some("Portfolio".into());
        assert!(
            site.text_fields()
                .contains(&("site.metadata.open_graph.description".to_owned(), "Portfolio"))
        );
    }

    #[test]
    fn test_site_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.site.language, "es");
        assert_eq!(
            config.site.url.as_deref(),
            Some("https://tu-portfolio.vercel.app")
        );
        assert_eq!(
            config.site.title.default,
            "Mi Portfolio | Desarrollador Full Stack"
        );
        assert_eq!(config.site.metadata.keywords.len(), 8);
        assert_eq!(config.site.metadata.authors[0].name, "Tu Nombre");
        assert_eq!(config.site.metadata.twitter.card, TwitterCard::SummaryLargeImage);
    }

    #[test]
    fn test_title_resolve() {
        let title = TitleConfig::default();

        assert_eq!(title.resolve(None), "Mi Portfolio | Desarrollador Full Stack");
        assert_eq!(title.resolve(Some("Proyectos")), "Proyectos | Mi Portfolio");
    }

    #[test]
    fn test_title_resolve_without_placeholder() {
        let title = TitleConfig {
            default: "Home".into(),
            template: "Portfolio".into(),
        };

        assert_eq!(title.resolve(Some("About")), "About");
    }

    #[test]
    fn test_robots_directives_default() {
        let robots = RobotsConfig::default();

        assert_eq!(robots.directives(), "index, follow");
        assert_eq!(
            robots.google_bot.unwrap().directives(),
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        );
    }

    #[test]
    fn test_robots_noindex() {
        let config: SiteConfig = toml::from_str(
            r#"
            [site.metadata.robots]
            index = false
            follow = true

            [site.metadata.robots.google_bot]
            index = false
            follow = false
            max_image_preview = "standard"
        "#,
        )
        .unwrap();

        let robots = &config.site.metadata.robots;
        assert_eq!(robots.directives(), "noindex, follow");
        let bot = robots.google_bot.as_ref().unwrap();
        assert_eq!(
            bot.directives(),
            "noindex, nofollow, max-video-preview:-1, max-image-preview:standard, max-snippet:-1"
        );
    }

    #[test]
    fn test_open_graph_type_key() {
        let config: SiteConfig = toml::from_str(
            r#"
            [site.metadata.open_graph]
            type = "profile"
            locale = "en_US"
        "#,
        )
        .unwrap();

        assert_eq!(config.site.metadata.open_graph.kind, "profile");
        assert_eq!(config.site.metadata.open_graph.locale, "en_US");
        assert_eq!(config.site.metadata.open_graph.site_name, "Mi Portfolio");
    }

    #[test]
    fn test_authors_with_url() {
        let config: SiteConfig = toml::from_str(
            r#"
            [site.metadata]
            authors = [
                { name = "Ana" },
                { name = "Luis", url = "https://luis.dev" },
            ]
        "#,
        )
        .unwrap();

        let authors = &config.site.metadata.authors;
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[1].url.as_deref(), Some("https://luis.dev"));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [site.metadata.twitter]
            handle = "@x"
        "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_twitter_card_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [site.metadata.twitter]
            card = "gallery"
        "#,
        );

        assert!(result.is_err());
    }
}
