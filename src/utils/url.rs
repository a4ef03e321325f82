//! Trailing-slash normalization for URLs and request paths.

/// Apply the trailing-slash policy to an absolute URL.
///
/// A bare origin (`https://example.com`) only gains a slash when
/// `trailing_slash` is set; it never loses one it does not have.
pub fn apply_trailing_slash(url: &str, trailing_slash: bool) -> String {
    let trimmed = url.trim_end_matches('/');
    if trailing_slash {
        format!("{trimmed}/")
    } else {
        trimmed.to_owned()
    }
}

/// Path a request should be redirected to, if any.
///
/// Root (`/`) and paths whose last segment has an extension are never
/// redirected. The target always starts with exactly one slash: a
/// `Location` of `//host` or `/\host` would leave the site.
pub fn redirect_target(path: &str, trailing_slash: bool) -> Option<String> {
    if path == "/" || path.is_empty() {
        return None;
    }

    let last = path.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    if last.contains('.') {
        return None;
    }

    let target = match (trailing_slash, path.ends_with('/')) {
        (false, true) => path.trim_end_matches('/').to_owned(),
        (true, false) => format!("{path}/"),
        _ => return None,
    };
    let local = target.trim_start_matches(['/', '\\']);
    if local.is_empty() {
        return None;
    }
    Some(format!("/{local}"))
}
