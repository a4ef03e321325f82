//! Build-time checks over content and metadata.
//!
//! Two categories, each enforced separately:
//!
//! | Kind   | Scope                  | Bypass                                   |
//! |--------|------------------------|------------------------------------------|
//! | `lint` | `[content]` copy       | `[build.checks] ignore_lint = true`      |
//! | `type` | `[site]` metadata      | `[build.checks] ignore_type_errors = true` |
//!
//! Bypassed findings are still reported, as warnings.

use crate::{
    config::{SiteConfig, TitleConfig},
    log,
};
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Number of entries the fixed stats grid holds.
const STAT_COUNT: usize = 4;
/// Number of cards the skills grid holds.
const SKILL_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Lint,
    Type,
}

impl CheckKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lint => "lint",
            Self::Type => "type",
        }
    }
}

/// A single finding, tied to the config field it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: CheckKind,
    pub field: String,
    pub message: String,
}

impl Diagnostic {
    fn lint(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: CheckKind::Lint,
            field: field.into(),
            message: message.into(),
        }
    }

    fn type_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: CheckKind::Type,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}] {}", self.kind.as_str(), self.field, self.message)
    }
}

/// Checks that failed and were not bypassed.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{0} lint error(s); set `[build.checks] ignore_lint = true` to build anyway")]
    Lint(usize),

    #[error("{0} type error(s); set `[build.checks] ignore_type_errors = true` to build anyway")]
    Type(usize),
}

/// Run every rule and collect findings, lint first.
pub fn run_checks(config: &SiteConfig) -> Vec<Diagnostic> {
    let mut diagnostics = lint_content(config);
    diagnostics.extend(type_check_metadata(config));
    diagnostics
}

/// Report findings and fail on any category that is not bypassed.
pub fn enforce(config: &SiteConfig, diagnostics: &[Diagnostic]) -> Result<(), CheckError> {
    let checks = &config.build.checks;
    let count = |kind: CheckKind| diagnostics.iter().filter(|d| d.kind == kind).count();

    for diag in diagnostics {
        let ignored = match diag.kind {
            CheckKind::Lint => checks.ignore_lint,
            CheckKind::Type => checks.ignore_type_errors,
        };
        log!(if ignored { "warn" } else { "error" }; "{diag}");
    }

    let lint = count(CheckKind::Lint);
    if lint > 0 && !checks.ignore_lint {
        return Err(CheckError::Lint(lint));
    }
    let types = count(CheckKind::Type);
    if types > 0 && !checks.ignore_type_errors {
        return Err(CheckError::Type(types));
    }
    Ok(())
}

// ============================================================================
// Lint rules
// ============================================================================

fn lint_content(config: &SiteConfig) -> Vec<Diagnostic> {
    let content = &config.content;
    let mut out = Vec::new();

    if content.stats.len() != STAT_COUNT {
        out.push(Diagnostic::lint(
            "content.stats",
            format!("expected {STAT_COUNT} stats, found {}", content.stats.len()),
        ));
    }
    for (i, stat) in content.stats.iter().enumerate() {
        if stat.value.trim().is_empty() {
            out.push(Diagnostic::lint(format!("content.stats[{i}].value"), "empty value"));
        }
        if stat.label.trim().is_empty() {
            out.push(Diagnostic::lint(format!("content.stats[{i}].label"), "empty label"));
        }
    }

    if content.skills.len() != SKILL_COUNT {
        out.push(Diagnostic::lint(
            "content.skills",
            format!("expected {SKILL_COUNT} skills, found {}", content.skills.len()),
        ));
    }
    let mut seen = FxHashSet::default();
    for (i, skill) in content.skills.iter().enumerate() {
        if skill.trim().is_empty() {
            out.push(Diagnostic::lint(format!("content.skills[{i}]"), "empty skill name"));
        } else if !seen.insert(skill.as_str()) {
            out.push(Diagnostic::lint(
                format!("content.skills[{i}]"),
                format!("duplicate key `{skill}`"),
            ));
        }
    }

    let headings = [
        ("content.hero.name", &content.hero.name),
        ("content.skills_heading", &content.skills_heading),
        ("content.cta.heading", &content.cta.heading),
    ];
    for (field, heading) in headings {
        if heading.trim().is_empty() {
            out.push(Diagnostic::lint(field, "empty heading"));
        }
    }

    let mut seen = FxHashSet::default();
    for (i, keyword) in config.site.metadata.keywords.iter().enumerate() {
        if !seen.insert(keyword.to_lowercase()) {
            out.push(Diagnostic::lint(
                format!("site.metadata.keywords[{i}]"),
                format!("duplicate keyword `{keyword}`"),
            ));
        }
    }

    out
}

// ============================================================================
// Type rules
// ============================================================================

fn type_check_metadata(config: &SiteConfig) -> Vec<Diagnostic> {
    let meta = &config.site.metadata;
    let mut out = Vec::new();

    check_title(&config.site.title, &mut out);

    if let Some(bot) = &meta.robots.google_bot {
        let limits = [
            ("max_video_preview", bot.max_video_preview),
            ("max_snippet", bot.max_snippet),
        ];
        for (name, value) in limits {
            if let Some(v) = value
                && v < -1
            {
                out.push(Diagnostic::type_error(
                    format!("site.metadata.robots.google_bot.{name}"),
                    format!("must be -1 or greater, found {v}"),
                ));
            }
        }
    }

    if let Some(creator) = &meta.twitter.creator
        && !creator.starts_with('@')
    {
        out.push(Diagnostic::type_error(
            "site.metadata.twitter.creator",
            format!("handle `{creator}` must start with `@`"),
        ));
    }

    if let Some(token) = &meta.verification.google
        && token.trim().is_empty()
    {
        out.push(Diagnostic::type_error(
            "site.metadata.verification.google",
            "empty verification token",
        ));
    }

    if let Some(url) = &meta.open_graph.url
        && !is_absolute_url(url)
    {
        out.push(Diagnostic::type_error(
            "site.metadata.open_graph.url",
            format!("`{url}` is not an absolute URL"),
        ));
    }

    for (field, value) in config.site.text_fields() {
        if value.contains(['<', '>']) {
            out.push(Diagnostic::type_error(
                field,
                "markup is not allowed in metadata text",
            ));
        }
    }

    out
}

fn check_title(title: &TitleConfig, out: &mut Vec<Diagnostic>) {
    if !title.template.contains("%s") {
        out.push(Diagnostic::type_error(
            "site.title.template",
            "template must contain `%s`",
        ));
    }
}

fn is_absolute_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Stat;

    fn fields(diagnostics: &[Diagnostic], kind: CheckKind) -> Vec<&str> {
        diagnostics
            .iter()
            .filter(|d| d.kind == kind)
            .map(|d| d.field.as_str())
            .collect()
    }

    #[test]
    fn test_defaults_are_clean() {
        assert!(run_checks(&SiteConfig::default()).is_empty());
    }

    #[test]
    fn test_lint_rules() {
        let mut config = SiteConfig::default();
        config.content.skills[1] = "React".into();
        config.content.skills.push(String::new());
        config.content.stats.pop();
        config.content.stats[0] = Stat {
            value: "".into(),
            label: "Proyectos".into(),
        };
        config.content.cta.heading = " ".into();
        config.site.metadata.keywords.push("React".into());

        let diagnostics = run_checks(&config);
        assert_eq!(
            fields(&diagnostics, CheckKind::Lint),
            [
                "content.stats",
                "content.stats[0].value",
                "content.skills",
                "content.skills[1]",
                "content.skills[6]",
                "content.cta.heading",
                "site.metadata.keywords[8]",
            ]
        );
        assert!(fields(&diagnostics, CheckKind::Type).is_empty());
    }

    #[test]
    fn test_type_rules() {
        let mut config = SiteConfig::default();
        config.site.title.template = "Mi Portfolio".into();
        config.site.metadata.twitter.creator = Some("tu_usuario".into());
        config.site.metadata.verification.google = Some(String::new());
        config.site.metadata.open_graph.url = Some("/about".into());
        if let Some(bot) = config.site.metadata.robots.google_bot.as_mut() {
            bot.max_snippet = Some(-5);
        }

        let diagnostics = run_checks(&config);
        assert_eq!(
            fields(&diagnostics, CheckKind::Type),
            [
                "site.title.template",
                "site.metadata.robots.google_bot.max_snippet",
                "site.metadata.twitter.creator",
                "site.metadata.verification.google",
                "site.metadata.open_graph.url",
            ]
        );
    }

    #[test]
    fn test_markup_in_metadata() {
        let mut config = SiteConfig::default();
        config.site.metadata.description = "<script>alert(1)</script>".into();

        config.site.title.default = "Ana <dev>".into();

        // og/twitter descriptions fall back to the description and are not
        // reported again
        let diagnostics = run_checks(&config);
        assert_eq!(
            fields(&diagnostics, CheckKind::Type),
            ["site.title.default", "site.metadata.description"]
        );

        config.site.metadata.twitter.description = Some("<b>hola</b>".into());
        let diagnostics = run_checks(&config);
        assert!(
            fields(&diagnostics, CheckKind::Type).contains(&"site.metadata.twitter.description")
        );
    }

    #[test]
    fn test_enforce_ignored_succeeds() {
        let mut config = SiteConfig::default();
        config.content.skills.push("Rust".into());
        config.site.title.template = "no placeholder".into();

        let diagnostics = run_checks(&config);
        assert_eq!(diagnostics.len(), 2);
        assert!(enforce(&config, &diagnostics).is_ok());
    }

    #[test]
    fn test_enforce_lint_fails() {
        let mut config = SiteConfig::default();
        config.build.checks.ignore_lint = false;
        config.content.skills.push("Rust".into());

        let err = enforce(&config, &run_checks(&config)).unwrap_err();
        assert!(matches!(err, CheckError::Lint(1)));
        assert!(err.to_string().contains("ignore_lint"));
    }

    #[test]
    fn test_enforce_type_fails_independently() {
        let mut config = SiteConfig::default();
        config.build.checks.ignore_type_errors = false;
        config.content.skills.push("Rust".into());
        config.site.metadata.twitter.creator = Some("nobody".into());

        // lint is still ignored, so only the type category fails
        let err = enforce(&config, &run_checks(&config)).unwrap_err();
        assert!(matches!(err, CheckError::Type(1)));
    }

    #[test]
    fn test_absolute_url() {
        assert!(is_absolute_url("https://ana.dev"));
        assert!(!is_absolute_url("https://"));
        assert!(!is_absolute_url("ana.dev"));
    }
}
