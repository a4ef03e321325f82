//! Terminal logging with colored module prefixes.
//!
//! `log!("build"; "wrote {} files", n)` prints `[build] wrote 3 files`.
//! Lines under `error` and `warn` go to stderr, everything else to stdout.
//! Messages are cut to the terminal width so rebuild output during `serve`
//! stays one line per event.

use colored::{Color, Colorize};
use crossterm::terminal::{self, Clear, ClearType};
use std::{
    io::{self, Write},
    sync::OnceLock,
};

const FALLBACK_WIDTH: usize = 120;

static WIDTH: OnceLock<usize> = OnceLock::new();

fn terminal_width() -> usize {
    *WIDTH.get_or_init(|| terminal::size().map_or(FALLBACK_WIDTH, |(w, _)| w as usize))
}

/// Log a message under a module prefix.
///
/// ```ignore
/// log!("sitemap"; "{}", path.display());
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Out,
    Err,
}

fn style(module: &str) -> (Color, Stream) {
    match module.to_ascii_lowercase().as_str() {
        "serve" => (Color::BrightBlue, Stream::Out),
        "watch" => (Color::BrightGreen, Stream::Out),
        "error" => (Color::BrightRed, Stream::Err),
        "warn" => (Color::BrightMagenta, Stream::Err),
        _ => (Color::BrightYellow, Stream::Out),
    }
}

pub fn log(module: &str, message: &str) {
    let (color, stream) = style(module);
    let prefix = format!("[{module}]").color(color).bold();
    // "[" + module + "] "
    let budget = terminal_width().saturating_sub(module.len() + 3);
    let line = format!("{prefix} {}\n", truncate_str(message, budget));

    match stream {
        Stream::Out => write_line(io::stdout().lock(), &line),
        Stream::Err => write_line(io::stderr().lock(), &line),
    }
}

fn write_line(mut out: impl Write, line: &str) {
    crossterm::execute!(out, Clear(ClearType::UntilNewLine)).ok();
    out.write_all(line.as_bytes()).ok();
    out.flush().ok();
}

/// Longest prefix of `s` within `max_len` bytes that ends on a char boundary.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let end = (0..=max_len)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    &s[..end]
}
