//! Button with variant and size class sets.
//!
//! Class strings follow the shadcn/ui button so the page stays compatible
//! with the same Tailwind theme tokens (`bg-primary`, `border-input`, ...).

use super::markup::Element;

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Default,
    Outline,
    Secondary,
}

impl Variant {
    const fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            Self::Outline => {
                "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"
            }
            Self::Secondary => {
                "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Size {
    #[default]
    Default,
    Lg,
}

impl Size {
    const fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2",
            Self::Lg => "h-10 rounded-md px-8",
        }
    }
}

/// `<button type="button">` with the composed class list.
pub fn button(label: &str, variant: Variant, size: Size) -> Element {
    Element::new("button")
        .attr("type", "button")
        .class(format!("{BASE} {} {}", variant.classes(), size.classes()))
        .text(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        let btn = button("Descargar CV", Variant::Outline, Size::Lg);
        let class = btn.get_attr("class").unwrap();

        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("border-input"));
        assert!(class.ends_with("h-10 rounded-md px-8"));
        assert_eq!(btn.get_attr("type"), Some("button"));
        assert_eq!(btn.text_content(), "Descargar CV");
    }

    #[test]
    fn test_variants_differ() {
        let a = button("x", Variant::Default, Size::Lg);
        let b = button("x", Variant::Secondary, Size::Lg);
        assert_ne!(a.get_attr("class"), b.get_attr("class"));
    }
}
