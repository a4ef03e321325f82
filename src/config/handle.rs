//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! This enables hot-reloading of `folio.toml` during `serve`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CONFIG (ArcSwap)                         │
//! │                                                             │
//! │  ┌─────────────┐     ┌─────────────┐     ┌─────────────┐    │
//! │  │   Request   │     │   Request   │     │   Writer    │    │
//! │  │  (serve)    │     │  (serve)    │     │  (watch)    │    │
//! │  └──────┬──────┘     └──────┬──────┘     └──────┬──────┘    │
//! │         ▼                   ▼                   ▼           │
//! │       cfg()              cfg()           reload_config()    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use super::SiteConfig;
use crate::utils::hash;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use std::{
    fs,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU16, AtomicU64, Ordering},
    },
};

/// Global config storage with atomic replacement support.
///
/// Initialized with default config, then replaced with loaded config in main.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Hash of the config file content last loaded.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

/// Port the preview server bound, 0 until `rebind_port` runs.
static BOUND_PORT: AtomicU16 = AtomicU16::new(0);

/// Get current config as `Arc<SiteConfig>`.
///
/// Lock-free; the returned `Arc` keeps that config snapshot alive even if
/// a reload happens meanwhile.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Initialize global config (called once at startup).
pub fn init_config(config: SiteConfig) {
    if let Ok(content) = fs::read(&config.config_path) {
        CONFIG_HASH.store(hash::compute(&content), Ordering::Relaxed);
    }
    CONFIG.store(Arc::new(config));
}

/// Record the port the preview server bound and apply it to the current
/// config. Later reloads keep it.
pub fn rebind_port(port: u16) {
    BOUND_PORT.store(port, Ordering::Relaxed);
    let mut config = SiteConfig::clone(&cfg());
    config.rebind(port);
    CONFIG.store(Arc::new(config));
}

/// Replace config atomically when `folio.toml` changes.
///
/// Returns `true` if config was updated, `false` if the file content
/// matches the last load.
pub fn reload_config() -> Result<bool> {
    let current = cfg();
    let cli = current
        .cli
        .context("config was not initialized from the command line")?;

    let content = fs::read(&current.config_path)
        .with_context(|| format!("Failed to read {}", current.config_path.display()))?;
    let new_hash = hash::compute(&content);
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let mut config = SiteConfig::load(cli)?;
    config.validate()?;
    match BOUND_PORT.load(Ordering::Relaxed) {
        0 => {}
        port => config.rebind(port),
    }

    CONFIG.store(Arc::new(config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);
    Ok(true)
}
