//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.
//! The defaults reproduce the reference portfolio page, so an empty
//! `folio.toml` still renders a complete document.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn language() -> String {
        "es".into()
    }

    pub fn url() -> Option<String> {
        Some("https://tu-portfolio.vercel.app".into())
    }

    pub mod title {
        pub fn default() -> String {
            "Mi Portfolio | Desarrollador Full Stack".into()
        }

        pub fn template() -> String {
            "%s | Mi Portfolio".into()
        }
    }

    pub mod metadata {
        use super::super::super::Author;

        pub fn description() -> String {
            "Portfolio profesional de desarrollador Full Stack especializado en React, Next.js, TypeScript y tecnologías modernas.".into()
        }

        pub fn keywords() -> Vec<String> {
            [
                "desarrollador",
                "full stack",
                "react",
                "nextjs",
                "typescript",
                "portfolio",
                "javascript",
                "web development",
            ]
            .into_iter()
            .map(Into::into)
            .collect()
        }

        pub fn authors() -> Vec<Author> {
            vec![Author {
                name: "Tu Nombre".into(),
                url: None,
            }]
        }

        pub fn creator() -> Option<String> {
            Some("Tu Nombre".into())
        }

        pub mod open_graph {
            pub fn r#type() -> String {
                "website".into()
            }

            pub fn locale() -> String {
                "es_ES".into()
            }

            pub fn site_name() -> String {
                "Mi Portfolio".into()
            }
        }

        pub mod twitter {
            pub fn creator() -> Option<String> {
                Some("@tu_usuario".into())
            }
        }

        pub mod robots {
            use super::super::super::super::{CrawlerRobots, ImagePreview};

            pub fn google_bot() -> Option<CrawlerRobots> {
                Some(CrawlerRobots::default())
            }

            pub fn max_video_preview() -> Option<i64> {
                Some(-1)
            }

            pub fn max_image_preview() -> Option<ImagePreview> {
                Some(ImagePreview::Large)
            }

            pub fn max_snippet() -> Option<i64> {
                Some(-1)
            }
        }

        pub mod verification {
            pub fn google() -> Option<String> {
                Some("tu-google-verification-code".into())
            }
        }
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use super::super::Stat;

    pub fn stats() -> Vec<Stat> {
        [
            ("50+", "Proyectos completados"),
            ("3+", "Años de experiencia"),
            ("20+", "Tecnologías dominadas"),
            ("100%", "Proyectos entregados"),
        ]
        .into_iter()
        .map(|(value, label)| Stat {
            value: value.into(),
            label: label.into(),
        })
        .collect()
    }

    pub fn skills_heading() -> String {
        "Tecnologías principales".into()
    }

    pub fn skills() -> Vec<String> {
        ["React", "Next.js", "TypeScript", "Node.js", "PostgreSQL", "Tailwind"]
            .into_iter()
            .map(Into::into)
            .collect()
    }

    pub mod hero {
        pub fn greeting() -> String {
            "¡Hola! Soy".into()
        }

        pub fn name() -> String {
            "Tu Nombre".into()
        }

        pub fn tagline() -> String {
            "Desarrollador Full Stack especializado en".into()
        }

        pub fn highlights() -> Vec<String> {
            ["React", "Next.js", "TypeScript"]
                .into_iter()
                .map(Into::into)
                .collect()
        }

        pub fn conjunction() -> String {
            "y".into()
        }

        pub fn primary_action() -> String {
            "Ver mis proyectos".into()
        }

        pub fn secondary_action() -> String {
            "Descargar CV".into()
        }
    }

    pub mod cta {
        pub fn heading() -> String {
            "¿Listo para trabajar juntos?".into()
        }

        pub fn body() -> String {
            "Estoy disponible para nuevos proyectos y colaboraciones".into()
        }

        pub fn action() -> String {
            "Contáctame".into()
        }
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub fn build_id() -> String {
        "build".into()
    }

    pub fn optimize_package_imports() -> Vec<String> {
        vec!["lucide-react".into()]
    }

    pub mod font {
        pub fn family() -> String {
            "Inter".into()
        }

        pub fn subsets() -> Vec<String> {
            vec!["latin".into()]
        }

        pub fn variable() -> String {
            "--font-inter".into()
        }

        pub fn fallback() -> Vec<String> {
            vec!["system-ui".into(), "sans-serif".into()]
        }
    }

    pub mod head {
        use std::path::PathBuf;

        pub fn styles() -> Vec<PathBuf> {
            vec!["styles/globals.css".into()]
        }
    }

    pub mod tailwind {
        use std::path::PathBuf;

        pub fn input() -> Option<PathBuf> {
            None
        }

        pub fn command() -> Vec<String> {
            vec!["tailwindcss".into()]
        }
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod robots {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "robots.txt".into()
        }
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}
