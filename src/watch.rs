//! File system watcher for live rebuild.
//!
//! Monitors the config file, the assets directory and the tailwind input,
//! and triggers a full rebuild on change. The page is a single document, so
//! there is no incremental path: every relevant change rebuilds everything.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌───────────────────────────┐
//! │ notify   │───▶│ Debouncer│───▶│     handle_changes()      │
//! │ events   │    │ (300ms)  │    │                           │
//! └──────────┘    └──────────┘    │  config? ─► reload_config │
//!                                 │  build_site(&cfg())       │
//!                                 └───────────────────────────┘
//! ```

use crate::{
    build::build_site,
    config::{SiteConfig, cfg, reload_config},
    log,
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

// =============================================================================
// Constants
// =============================================================================

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

// =============================================================================
// Path Utilities
// =============================================================================

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// Format absolute path as relative to root, with trailing slash for directories.
fn format_rel(path: &Path, root: &Path, is_dir: bool) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let suffix = if is_dir { "/" } else { "" };
    format!("{}{}", rel.display(), suffix)
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, event: Event) {
        for path in event.paths {
            if !is_temp_file(&path) {
                self.pending.insert(path);
            }
        }
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        let mut paths: Vec<_> = self.pending.drain().collect();
        paths.sort();
        paths
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Event Handler
// =============================================================================

/// Rebuild after a batch of changes. Returns true if the rebuild succeeded
/// (for cooldown tracking).
fn handle_changes(paths: &[PathBuf]) -> bool {
    let Some(first) = paths.first() else {
        return false;
    };

    let current = cfg();
    let config_changed = paths.iter().any(|p| p == &current.config_path);

    if config_changed {
        match reload_config() {
            Ok(true) => log!("watch"; "config reloaded"),
            Ok(false) => {}
            Err(e) => {
                log!("watch"; "config reload failed, keeping previous config");
                log!("error"; "{e:#}");
                return false;
            }
        }
    }

    let config = cfg();
    let trigger = format_rel(first, config.get_root(), false);
    log!("watch"; "{trigger} changed, rebuilding...");

    match build_site(&config) {
        Ok(report) => {
            log!("watch"; "rebuilt {} files", report.files.len());
            true
        }
        Err(e) => {
            log!("watch"; "build failed ({trigger})");
            log!("error"; "{e:#}");
            false
        }
    }
}

// =============================================================================
// Watcher Setup
// =============================================================================

/// Paths to watch, with whether each is a directory.
fn watch_targets(config: &SiteConfig) -> Vec<(PathBuf, bool)> {
    let mut targets = vec![
        (config.config_path.clone(), false),
        (config.build.assets.clone(), true),
    ];
    if config.build.tailwind.enable
        && let Some(input) = &config.build.tailwind.input
        && !input.starts_with(&config.build.assets)
    {
        targets.push((input.clone(), false));
    }
    targets.retain(|(path, _)| path.exists());
    targets
}

fn setup_watchers(watcher: &mut impl Watcher, config: &SiteConfig) -> Result<()> {
    let root = config.get_root();
    let targets = watch_targets(config);

    for (path, is_dir) in &targets {
        let mode = if *is_dir {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(path, mode)
            .with_context(|| format!("Failed to watch {}", path.display()))?;
    }

    let summary: Vec<_> = targets
        .iter()
        .map(|(path, is_dir)| format_rel(path, root, *is_dir))
        .collect();
    log!("watch"; "{}", summary.join(", "));
    Ok(())
}

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

// =============================================================================
// Public API
// =============================================================================

/// Start blocking file watcher with debouncing and live rebuild.
pub fn watch_for_changes_blocking() -> Result<()> {
    let config = cfg();
    if !config.serve.watch {
        return Ok(());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    setup_watchers(&mut watcher, &config)?;

    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) && !debouncer.in_cooldown() => {
                debouncer.add(event);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) if debouncer.ready() => {
                if handle_changes(&debouncer.take()) {
                    debouncer.mark_rebuild();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};
    use std::fs;
    use tempfile::tempdir;

    fn event(kind: EventKind, paths: &[&str]) -> Event {
        let mut event = Event::new(kind);
        for path in paths {
            event = event.add_path(PathBuf::from(path));
        }
        event
    }

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(Path::new("folio.toml~")));
        assert!(is_temp_file(Path::new(".folio.toml.swp")));
        assert!(is_temp_file(Path::new("assets/a.bak")));
        assert!(!is_temp_file(Path::new("assets/styles/globals.css")));
    }

    #[test]
    fn test_debouncer_dedups_and_filters() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.ready());

        debouncer.add(event(
            EventKind::Modify(ModifyKind::Any),
            &["/s/folio.toml", "/s/folio.toml", "/s/.folio.toml.swp"],
        ));
        debouncer.add(event(EventKind::Create(CreateKind::File), &["/s/assets/a.css"]));

        assert_eq!(debouncer.timeout(), Duration::from_millis(DEBOUNCE_MS));
        assert_eq!(
            debouncer.take(),
            [PathBuf::from("/s/assets/a.css"), PathBuf::from("/s/folio.toml")]
        );
        assert_eq!(debouncer.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_debouncer_waits_for_quiet_period() {
        let mut debouncer = Debouncer::new();
        debouncer.add(event(EventKind::Modify(ModifyKind::Any), &["/s/folio.toml"]));
        assert!(!debouncer.ready());

        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS + 10));
        assert!(debouncer.ready());
    }

    #[test]
    fn test_cooldown() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.in_cooldown());
        debouncer.mark_rebuild();
        assert!(debouncer.in_cooldown());
    }

    #[test]
    fn test_relevant_events() {
        assert!(is_relevant(&event(EventKind::Modify(ModifyKind::Any), &[])));
        assert!(!is_relevant(&event(EventKind::Access(notify::event::AccessKind::Any), &[])));
    }

    #[test]
    fn test_watch_targets() {
        let dir = tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.config_path = dir.path().join("folio.toml");
        config.build.assets = dir.path().join("assets");
        fs::write(&config.config_path, "").unwrap();

        // missing assets dir is skipped
        assert_eq!(watch_targets(&config), [(config.config_path.clone(), false)]);

        fs::create_dir_all(&config.build.assets).unwrap();
        let input = dir.path().join("tailwind.css");
        fs::write(&input, "").unwrap();
        config.build.tailwind.enable = true;
        config.build.tailwind.input = Some(input.clone());

        assert_eq!(
            watch_targets(&config),
            [
                (config.config_path.clone(), false),
                (config.build.assets.clone(), true),
                (input, false),
            ]
        );
    }

    #[test]
    fn test_format_rel() {
        let root = Path::new("/site");
        assert_eq!(format_rel(Path::new("/site/assets"), root, true), "assets/");
        assert_eq!(format_rel(Path::new("/site/folio.toml"), root, false), "folio.toml");
    }
}
