//! Home view: hero, quick stats, skills preview and call-to-action.
//!
//! Sections render in a fixed order, each tagged with `data-section` so
//! visual tests can address them without relying on class names alone.

use super::{
    button::{Size, Variant, button},
    markup::{Element, Node},
};
use crate::config::{ContentConfig, CtaContent, HeroContent, Stat};

/// The four content sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Stats,
    Skills,
    Cta,
}

impl Section {
    pub const ORDER: [Section; 4] = [Self::Hero, Self::Stats, Self::Skills, Self::Cta];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Stats => "stats",
            Self::Skills => "skills",
            Self::Cta => "cta",
        }
    }
}

/// Render the home view into the shell's content slot.
pub fn home_view(content: &ContentConfig) -> Element {
    let sections = Section::ORDER.map(|section| match section {
        Section::Hero => hero(&content.hero),
        Section::Stats => stats(&content.stats),
        Section::Skills => skills(&content.skills_heading, &content.skills),
        Section::Cta => cta(&content.cta),
    });

    Element::new("div")
        .class("flex flex-col min-h-screen")
        .children(sections)
}

fn section(kind: Section, class: &str) -> Element {
    Element::new("section")
        .attr("data-section", kind.as_str())
        .class(class)
}

fn hero(hero: &HeroContent) -> Element {
    let heading = Element::new("h1")
        .class("text-4xl md:text-6xl font-bold mb-6 animate-fade-in")
        .text(format!("{} ", hero.greeting))
        .child(Element::new("span").class("text-primary").text(&hero.name));

    let subheading = Element::new("p")
        .class("text-xl md:text-2xl text-muted-foreground mb-8 animate-fade-in")
        .children(tagline(hero));

    let actions = Element::new("div")
        .class("flex flex-col sm:flex-row gap-4 justify-center animate-fade-in")
        .child(button(&hero.primary_action, Variant::Default, Size::Lg))
        .child(button(&hero.secondary_action, Variant::Outline, Size::Lg));

    section(
        Section::Hero,
        "flex-1 flex items-center justify-center px-4 py-16 bg-gradient-to-br from-background to-secondary",
    )
    .child(
        Element::new("div")
            .class("text-center max-w-4xl mx-auto")
            .child(heading)
            .child(subheading)
            .child(actions),
    )
}

/// Tagline followed by highlighted technologies: `A, B y C`.
fn tagline(hero: &HeroContent) -> Vec<Node> {
    let count = hero.highlights.len();
    if count == 0 {
        return vec![Node::text(&hero.tagline)];
    }

    let mut nodes = vec![Node::text(format!("{} ", hero.tagline))];
    for (i, highlight) in hero.highlights.iter().enumerate() {
        if i > 0 {
            let sep = if i + 1 == count {
                format!(" {} ", hero.conjunction)
            } else {
                ", ".to_owned()
            };
            nodes.push(Node::text(sep));
        }
        nodes.push(
            Element::new("span")
                .class("text-foreground font-semibold")
                .text(highlight)
                .into(),
        );
    }
    nodes
}

fn stats(stats: &[Stat]) -> Element {
    let items = stats.iter().map(|stat| {
        Element::new("div")
            .class("space-y-2")
            .child(
                Element::new("div")
                    .class("text-3xl font-bold text-primary")
                    .text(&stat.value),
            )
            .child(
                Element::new("div")
                    .class("text-sm text-muted-foreground")
                    .text(&stat.label),
            )
    });

    section(Section::Stats, "py-16 px-4 bg-card").child(
        Element::new("div").class("max-w-6xl mx-auto").child(
            Element::new("div")
                .class("grid grid-cols-2 md:grid-cols-4 gap-8 text-center")
                .children(items),
        ),
    )
}

fn skills(heading: &str, skills: &[String]) -> Element {
    let cards = skills.iter().map(|tech| {
        Element::new("div")
            .key(tech)
            .class("p-4 bg-card rounded-lg border border-border hover:shadow-md transition-shadow")
            .child(Element::new("div").class("text-lg font-semibold").text(tech))
    });

    section(Section::Skills, "py-16 px-4 bg-background").child(
        Element::new("div")
            .class("max-w-6xl mx-auto text-center")
            .child(Element::new("h2").class("text-3xl font-bold mb-8").text(heading))
            .child(
                Element::new("div")
                    .class("grid grid-cols-2 md:grid-cols-4 lg:grid-cols-6 gap-6")
                    .children(cards),
            ),
    )
}

fn cta(cta: &CtaContent) -> Element {
    section(Section::Cta, "py-16 px-4 bg-primary text-primary-foreground").child(
        Element::new("div")
            .class("max-w-4xl mx-auto text-center")
            .child(Element::new("h2").class("text-3xl font-bold mb-4").text(&cta.heading))
            .child(Element::new("p").class("text-xl mb-8 opacity-90").text(&cta.body))
            .child(button(&cta.action, Variant::Secondary, Size::Lg)),
    )
}
