//! folio - A static generator for a single-page portfolio.

mod build;
mod check;
mod cli;
mod config;
mod generator;
mod init;
mod render;
mod serve;
mod utils;
mod watch;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};
use init::new_site;
use serve::serve_site;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    init_config(load_config(cli)?);

    match &cli.command {
        Commands::Init { name } => new_site(&cfg(), name.is_some()),
        Commands::Build { .. } => build_site(&cfg()).map(|_| ()),
        Commands::Serve { .. } => serve_site(),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli)?;

    // Validate config state based on command
    let config_exists = config.config_path.exists();
    match (cli.is_init(), config_exists) {
        (true, true) => {
            bail!("Config file already exists. Remove it manually or init in a different path.")
        }
        (false, false) => bail!("Config file not found."),
        _ => {}
    }

    if !cli.is_init() {
        config.validate()?;
    }

    Ok(config)
}
