//! Development server with live rebuild.
//!
//! A lightweight HTTP server for local preview, built on `tiny_http`:
//!
//! - Static file serving from the build output directory
//! - `index.html` resolution for `/`
//! - Trailing-slash redirects following `[build].trailing_slash`
//! - `X-Build-Id` header on every response
//! - File watching and auto-rebuild (via `watch` module)
//! - Graceful shutdown on Ctrl+C
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │   Main Thread   │     │  Watcher Thread  │
//! │  (HTTP Server)  │     │  (File Monitor)  │
//! └────────┬────────┘     └────────┬─────────┘
//!          │                       │
//!          ▼                       ▼
//!    Handle requests         Detect changes
//!    Serve files             Trigger rebuild
//! └─────────────────────────────────────────────┘
//!                    │
//!                    ▼
//!            config.build.output
//!              (public/ dir)
//! ```

use crate::{
    build::{BUILD_ID_FILE, build_site},
    config::{SiteConfig, cfg, rebind_port},
    log,
    utils::url::redirect_target,
    watch::watch_for_changes_blocking,
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    io::Cursor,
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the development server with optional file watching.
///
/// This function:
/// 1. Binds to the configured interface and port (with auto-retry on port conflict)
/// 2. Builds the site against the bound address
/// 3. Sets up Ctrl+C handler for graceful shutdown
/// 4. Spawns file watcher thread (if enabled)
/// 5. Enters the main request handling loop
///
/// The server blocks until Ctrl+C is received.
pub fn serve_site() -> Result<()> {
    let c = cfg();
    let interface: IpAddr = c
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface `{}`", c.serve.interface))?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    // Build against the bound port so the canonical URL points here
    if addr.port() != c.serve.port {
        rebind_port(addr.port());
    }
    build_site(&cfg())?;

    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    if c.serve.watch {
        std::thread::spawn(|| {
            if let Err(err) = watch_for_changes_blocking() {
                log!("watch"; "{err}");
            }
        });
    }

    for request in server.incoming_requests() {
        // Re-load config on each request to pick up hot-reloaded changes
        if let Err(e) = handle_request(request, &cfg()) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_err = None;
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_err = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_err.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// How a request path resolves against the output directory.
#[derive(Debug, PartialEq, Eq)]
enum Resolved {
    File(PathBuf),
    Redirect(String),
    NotFound,
}

/// Resolve a raw request URL.
///
/// Resolution order:
/// 1. Trailing-slash mismatch → redirect (when `[serve].redirects`)
/// 2. Exact file match → file
/// 3. Directory with index.html → that file
/// 4. Nothing found → 404
fn resolve(raw_url: &str, config: &SiteConfig) -> Resolved {
    // Decode URL-encoded characters (e.g., %20 → space)
    let url_path = urlencoding::decode(raw_url)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    // Strip query string (e.g., ?v=abc) before resolving path
    let (path, query) = match url_path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url_path.as_str(), None),
    };

    if config.serve.redirects
        && let Some(target) = redirect_target(path, config.build.trailing_slash)
    {
        let location = match query {
            Some(query) => format!("{target}?{query}"),
            None => target,
        };
        return Resolved::Redirect(location);
    }

    let request_path = path.trim_matches('/');
    if request_path.split('/').any(|seg| seg == "..") {
        return Resolved::NotFound;
    }

    let local_path = config.build.output.join(request_path);
    if local_path.is_file() {
        return Resolved::File(local_path);
    }
    let index_path = local_path.join("index.html");
    if local_path.is_dir() && index_path.is_file() {
        return Resolved::File(index_path);
    }
    Resolved::NotFound
}

/// Handle a single HTTP request.
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    let build_id = build_id_header(config)?;

    match resolve(request.url(), config) {
        Resolved::File(path) => serve_file(request, &path, build_id),
        Resolved::Redirect(location) => serve_redirect(request, &location, build_id),
        Resolved::NotFound => serve_not_found(request, build_id),
    }
}

// ============================================================================
// Response Helpers
// ============================================================================

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name, value).map_err(|()| anyhow!("invalid header {name}: {value}"))
}

/// `X-Build-Id` carries the configured build id, or the id written by the
/// last build when it is content-derived.
fn build_id_header(config: &SiteConfig) -> Result<Header> {
    let configured = &config.build.build_id;
    let id = if config.build.is_content_build_id() {
        fs::read_to_string(config.build.output.join(BUILD_ID_FILE))
            .unwrap_or_else(|_| configured.clone())
    } else {
        configured.clone()
    };
    header("X-Build-Id", id.trim())
}

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path, build_id: Header) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let response = Response::from_data(content)
        .with_header(header("Content-Type", guess_content_type(path))?)
        .with_header(build_id);

    request.respond(response)?;
    Ok(())
}

/// Permanent redirect that preserves the method.
fn serve_redirect(request: Request, location: &str, build_id: Header) -> Result<()> {
    let response = Response::empty(StatusCode(308))
        .with_header(header("Location", location)?)
        .with_header(build_id);
    request.respond(response)?;
    Ok(())
}

/// Serve 404 Not Found response.
fn serve_not_found(request: Request, build_id: Header) -> Result<()> {
    let response = Response::new(
        StatusCode(404),
        vec![header("Content-Type", "text/plain")?, build_id],
        Cursor::new("404 Not Found"),
        Some(13),
        None,
    );
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Content Type Detection
// ============================================================================

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",

        // BUILD_ID and other extensionless files
        None => "text/plain; charset=utf-8",

        // Default binary
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_with_output(output: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = output.to_path_buf();
        config
    }

    #[test]
    fn test_resolve_root_and_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::create_dir_all(dir.path().join("_folio")).unwrap();
        fs::write(dir.path().join("_folio/fonts.css"), "").unwrap();
        let config = config_with_output(dir.path());

        assert_eq!(resolve("/", &config), Resolved::File(dir.path().join("index.html")));
        assert_eq!(
            resolve("/_folio/fonts.css?v=abc", &config),
            Resolved::File(dir.path().join("_folio/fonts.css"))
        );
        assert_eq!(resolve("/missing.css", &config), Resolved::NotFound);
    }

    #[test]
    fn test_resolve_redirects() {
        let dir = tempdir().unwrap();
        let mut config = config_with_output(dir.path());

        assert_eq!(resolve("/about/", &config), Resolved::Redirect("/about".into()));
        assert_eq!(
            resolve("/about/?ref=x", &config),
            Resolved::Redirect("/about?ref=x".into())
        );

        config.build.trailing_slash = true;
        assert_eq!(resolve("/about", &config), Resolved::Redirect("/about/".into()));
        assert_eq!(resolve("/about/", &config), Resolved::NotFound);
    }

    #[test]
    fn test_resolve_redirect_never_leaves_site() {
        let dir = tempdir().unwrap();
        let config = config_with_output(dir.path());

        assert_eq!(resolve("//evil/", &config), Resolved::Redirect("/evil".into()));
        assert_eq!(
            resolve("/%2F%2Fevil/", &config),
            Resolved::Redirect("/evil".into())
        );
    }

    #[test]
    fn test_resolve_without_redirects() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        let mut config = config_with_output(dir.path());
        config.serve.redirects = false;

        assert_eq!(resolve("/about/", &config), Resolved::NotFound);
        assert_eq!(
            resolve("/?ref=x", &config),
            Resolved::File(dir.path().join("index.html"))
        );
    }

    #[test]
    fn test_resolve_decodes_and_rejects_parent() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("mi cv.pdf"), "").unwrap();
        let config = config_with_output(dir.path());

        assert_eq!(
            resolve("/mi%20cv.pdf", &config),
            Resolved::File(dir.path().join("mi cv.pdf"))
        );
        assert_eq!(resolve("/../etc/passwd", &config), Resolved::NotFound);
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(guess_content_type(Path::new("a.woff2")), "font/woff2");
        assert_eq!(guess_content_type(Path::new("BUILD_ID")), "text/plain; charset=utf-8");
        assert_eq!(guess_content_type(Path::new("a.bin")), "application/octet-stream");
    }

    #[test]
    fn test_build_id_header() {
        let dir = tempdir().unwrap();
        let mut config = config_with_output(dir.path());

        let header = build_id_header(&config).unwrap();
        assert!(header.field.equiv("X-Build-Id"));
        assert_eq!(header.value.as_str(), "build");

        config.build.build_id = "content".into();
        fs::write(dir.path().join(BUILD_ID_FILE), "0123abcd\n").unwrap();
        assert_eq!(build_id_header(&config).unwrap().value.as_str(), "0123abcd");
    }
}
