//! Build-time font manifest.
//!
//! Turns `[build.font]` into a class name and a stylesheet that defines the
//! font's CSS custom property. The shell applies the class to `<body>`, so
//! the variable is available to every element without runtime injection.
//!
//! ```text
//! [build.font]                         _folio/fonts.css
//! family   = "Inter"          ──►      .__variable_inter {
//! variable = "--font-inter"              --font-inter: 'Inter', system-ui, sans-serif;
//!                                      }
//! ```

use crate::config::FontConfig;
use std::path::Path;

/// Output location of the generated stylesheet, relative to the output dir.
pub const FONT_STYLESHEET: &str = "_folio/fonts.css";

/// Unicode ranges per subset, as served by Google Fonts.
const SUBSET_RANGES: &[(&str, &str)] = &[
    (
        "latin",
        "U+0000-00FF, U+0131, U+0152-0153, U+02BB-02BC, U+02C6, U+02DA, U+02DC, U+0304, U+0308, U+0329, U+2000-206F, U+20AC, U+2122, U+2191, U+2193, U+2212, U+2215, U+FEFF, U+FFFD",
    ),
    (
        "latin-ext",
        "U+0100-02BA, U+02BD-02C5, U+02C7-02CC, U+02CE-02D7, U+02DD-02FF, U+0304, U+0308, U+0329, U+1D00-1DBF, U+1E00-1E9F, U+1EF2-1EFF, U+2020, U+20A0-20AB, U+20AD-20C0, U+2113, U+2C60-2C7F, U+A720-A7FF",
    ),
    ("cyrillic", "U+0301, U+0400-045F, U+0490-0491, U+04B0-04B1, U+2116"),
    ("greek", "U+0370-0377, U+037A-037F, U+0384-038A, U+038C, U+038E-03A1, U+03A3-03FF"),
    (
        "vietnamese",
        "U+0102-0103, U+0110-0111, U+0128-0129, U+0168-0169, U+01A0-01A1, U+01AF-01B0, U+0300-0301, U+0303-0304, U+0308-0309, U+0323, U+0329, U+1EA0-1EF9, U+20AB",
    ),
];

/// Look up the unicode range of a named subset.
pub fn unicode_range(subset: &str) -> Option<&'static str> {
    SUBSET_RANGES
        .iter()
        .find(|(name, _)| *name == subset)
        .map(|(_, range)| *range)
}

/// Static class/variable manifest consumed by the document shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontManifest {
    /// Class applied to `<body>`, e.g. `__variable_inter`.
    pub class_name: String,
    /// CSS custom property, e.g. `--font-inter`.
    pub variable: String,
    /// Stylesheet content written to [`FONT_STYLESHEET`].
    pub stylesheet: String,
}

impl FontManifest {
    /// Derive the manifest; `None` when fonts are disabled.
    pub fn from_config(font: &FontConfig) -> Option<Self> {
        if !font.enable {
            return None;
        }

        let class_name = format!("__variable_{}", class_slug(&font.variable));
        let stack = std::iter::once(format!("'{}'", font.family))
            .chain(font.fallback.iter().cloned())
            .collect::<Vec<_>>()
            .join(", ");

        let mut stylesheet = String::new();
        for file in &font.files {
            for subset in &font.subsets {
                // Unknown subsets are rejected by config validation.
                let Some(range) = unicode_range(subset) else {
                    continue;
                };
                stylesheet.push_str(&font_face(&font.family, file, range));
            }
        }
        stylesheet.push_str(&format!(
            ".{class_name} {{\n  {}: {stack};\n}}\n",
            font.variable
        ));

        Some(Self {
            class_name,
            variable: font.variable.clone(),
            stylesheet,
        })
    }
}

fn font_face(family: &str, file: &Path, range: &str) -> String {
    let src = file.to_string_lossy().replace('\\', "/");
    let format = match file.extension().and_then(|e| e.to_str()) {
        Some("woff") => "woff",
        Some("ttf") => "truetype",
        Some("otf") => "opentype",
        _ => "woff2",
    };
    format!(
        "@font-face {{\n  font-family: '{family}';\n  font-style: normal;\n  font-display: swap;\n  src: url('/{src}') format('{format}');\n  unicode-range: {range};\n}}\n"
    )
}

/// `--font-inter` → `inter`
fn class_slug(variable: &str) -> String {
    let name = variable.trim_start_matches('-');
    let name = name.strip_prefix("font-").unwrap_or(name);
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}
