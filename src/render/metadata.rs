//! Resolved page metadata.
//!
//! `[site.metadata]` leaves several fields optional. [`PageMetadata`] is the
//! fully resolved record the head renderer consumes: fallbacks applied, the
//! canonical URL normalized to the trailing-slash policy, robots directives
//! flattened to their `content` strings.

use crate::{
    config::{Author, SiteConfig, TwitterCard},
    utils::url::apply_trailing_slash,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub creator: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter: Twitter,
    /// `content` of `<meta name="robots">`.
    pub robots: String,
    /// `content` of `<meta name="googlebot">`, when configured.
    pub google_bot: Option<String>,
    pub google_verification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub kind: String,
    pub locale: String,
    pub url: Option<String>,
    pub title: String,
    pub description: String,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Twitter {
    pub card: TwitterCard,
    pub title: String,
    pub description: String,
    pub creator: Option<String>,
}

impl PageMetadata {
    pub fn from_config(config: &SiteConfig) -> Self {
        let site = &config.site;
        let meta = &site.metadata;
        let title = site.title.resolve(None);

        let og = &meta.open_graph;
        let og_url = og
            .url
            .as_ref()
            .or(site.url.as_ref())
            .map(|url| apply_trailing_slash(url, config.build.trailing_slash));

        let open_graph = OpenGraph {
            kind: og.kind.clone(),
            locale: og.locale.clone(),
            url: og_url,
            title: og.title.clone().unwrap_or_else(|| title.clone()),
            description: og
                .description
                .clone()
                .unwrap_or_else(|| meta.description.clone()),
            site_name: og.site_name.clone(),
        };

        let tw = &meta.twitter;
        let twitter = Twitter {
            card: tw.card,
            title: tw.title.clone().unwrap_or_else(|| title.clone()),
            description: tw
                .description
                .clone()
                .unwrap_or_else(|| meta.description.clone()),
            creator: tw.creator.clone(),
        };

        Self {
            title,
            description: meta.description.clone(),
            keywords: meta.keywords.clone(),
            authors: meta.authors.clone(),
            creator: meta.creator.clone(),
            open_graph,
            twitter,
            robots: meta.robots.directives(),
            google_bot: meta.robots.google_bot.as_ref().map(|bot| bot.directives()),
            google_verification: meta.verification.google.clone(),
        }
    }
}
