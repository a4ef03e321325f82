//! Output minification for `index.html` and `sitemap.xml`.
//!
//! Both functions return the input untouched when `enabled` is false.

use std::borrow::Cow;

/// Minify a rendered document with `minify_html`.
///
/// Closing tags and the opening `<html>`/`<head>` tags are kept, so the
/// `lang` attribute and head metadata stay explicit in the output.
pub fn html(bytes: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(bytes);
    }
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.minify_css = true;
    cfg.minify_js = true;
    Cow::Owned(minify_html::minify(bytes, &cfg))
}

/// Join trimmed non-empty lines. Generated XML never carries significant
/// whitespace between elements.
pub fn xml(bytes: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if !enabled {
        return Cow::Borrowed(bytes);
    }
    let joined: String = String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Cow::Owned(joined.into_bytes())
}
