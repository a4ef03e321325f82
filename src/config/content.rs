//! `[content]` section configuration.
//!
//! Inert display data for the home view: hero copy, quick stats,
//! the skills list and the closing call-to-action.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[content]` section in folio.toml.
///
/// # Example
/// ```toml
/// [content]
/// skills_heading = "Tecnologías principales"
/// skills = ["React", "Next.js", "TypeScript"]
/// stats = [
///     { value = "50+", label = "Proyectos completados" },
/// ]
///
/// [content.hero]
/// name = "Ana García"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    #[serde(default)]
    pub hero: HeroContent,

    /// Label/value pairs shown in the quick-stats grid.
    #[serde(default = "defaults::content::stats")]
    #[educe(Default = defaults::content::stats())]
    pub stats: Vec<Stat>,

    #[serde(default = "defaults::content::skills_heading")]
    #[educe(Default = defaults::content::skills_heading())]
    pub skills_heading: String,

    /// Technology names; each name is both card text and card key.
    #[serde(default = "defaults::content::skills")]
    #[educe(Default = defaults::content::skills())]
    pub skills: Vec<String>,

    #[serde(default)]
    pub cta: CtaContent,
}

/// One quick-stat entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// `[content.hero]`
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HeroContent {
    #[serde(default = "defaults::content::hero::greeting")]
    #[educe(Default = defaults::content::hero::greeting())]
    pub greeting: String,

    #[serde(default = "defaults::content::hero::name")]
    #[educe(Default = defaults::content::hero::name())]
    pub name: String,

    #[serde(default = "defaults::content::hero::tagline")]
    #[educe(Default = defaults::content::hero::tagline())]
    pub tagline: String,

    /// Emphasized technologies closing the tagline.
    #[serde(default = "defaults::content::hero::highlights")]
    #[educe(Default = defaults::content::hero::highlights())]
    pub highlights: Vec<String>,

    /// Word joining the last two highlights.
    #[serde(default = "defaults::content::hero::conjunction")]
    #[educe(Default = defaults::content::hero::conjunction())]
    pub conjunction: String,

    #[serde(default = "defaults::content::hero::primary_action")]
    #[educe(Default = defaults::content::hero::primary_action())]
    pub primary_action: String,

    #[serde(default = "defaults::content::hero::secondary_action")]
    #[educe(Default = defaults::content::hero::secondary_action())]
    pub secondary_action: String,
}

/// `[content.cta]`
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CtaContent {
    #[serde(default = "defaults::content::cta::heading")]
    #[educe(Default = defaults::content::cta::heading())]
    pub heading: String,

    #[serde(default = "defaults::content::cta::body")]
    #[educe(Default = defaults::content::cta::body())]
    pub body: String,

    #[serde(default = "defaults::content::cta::action")]
    #[educe(Default = defaults::content::cta::action())]
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_content_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        let content = &config.content;

        assert_eq!(
            content.skills,
            ["React", "Next.js", "TypeScript", "Node.js", "PostgreSQL", "Tailwind"]
        );
        assert_eq!(content.stats.len(), 4);
        assert_eq!(
            content.stats[1],
            Stat {
                value: "3+".into(),
                label: "Años de experiencia".into()
            }
        );
        assert_eq!(content.hero.highlights, ["React", "Next.js", "TypeScript"]);
        assert_eq!(content.cta.action, "Contáctame");
    }

    #[test]
    fn test_content_override() {
        let config: SiteConfig = toml::from_str(
            r#"
            [content]
            skills = ["Rust", "Go"]
            stats = [{ value = "7", label = "Crates" }]

            [content.hero]
            name = "Ana"
        "#,
        )
        .unwrap();

        assert_eq!(config.content.skills, ["Rust", "Go"]);
        assert_eq!(config.content.stats[0].label, "Crates");
        assert_eq!(config.content.hero.name, "Ana");
        // untouched fields keep their defaults
        assert_eq!(config.content.hero.greeting, "¡Hola! Soy");
    }

    #[test]
    fn test_stat_requires_both_fields() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
            [content]
            stats = [{ value = "7" }]
        "#,
        );

        assert!(result.is_err());
    }
}
