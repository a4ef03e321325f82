//! Project initialization.
//!
//! Creates a new portfolio project with the default configuration, which
//! renders the reference page as-is.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Default project directory structure, relative to the assets dir
const ASSET_DIRS: &[&str] = &["styles", "fonts", "lucide-react"];

/// Starter global stylesheet, linked from `[build.head].styles`.
const GLOBALS_CSS: &str = r#":root {
  --background: 0 0% 100%;
  --foreground: 222.2 84% 4.9%;
  --card: 0 0% 100%;
  --primary: 222.2 47.4% 11.2%;
  --primary-foreground: 210 40% 98%;
  --secondary: 210 40% 96.1%;
  --muted-foreground: 215.4 16.3% 46.9%;
  --border: 214.3 31.8% 91.4%;
}

body {
  font-family: var(--font-inter), system-ui, sans-serif;
}
"#;

/// Create a new project with default structure.
pub fn new_site(config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = config.get_root();

    // If no name was provided (init in current dir), the directory must be
    // completely empty
    if !has_name && !is_dir_empty(root)? {
        bail!(
            "Current directory is not empty. Use `folio init <NAME>` to create in a subdirectory."
        );
    }

    init_site_structure(&config.build.assets)?;
    init_default_config(&config.config_path)?;
    init_ignored_files(root, &[config.build.output.as_path()])?;

    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Write default configuration file
fn init_default_config(config_path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

/// Create the assets directory structure and starter stylesheet
fn init_site_structure(assets: &Path) -> Result<()> {
    for dir in ASSET_DIRS {
        let path = assets.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `folio init <NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    fs::write(assets.join("styles/globals.css"), GLOBALS_CSS)?;
    Ok(())
}

/// Initialize .gitignore and .ignore files with the given paths, written
/// relative to `root`.
fn init_ignored_files(root: &Path, paths: &[&Path]) -> Result<()> {
    let content = paths
        .iter()
        .map(|p| p.strip_prefix(root).unwrap_or(p))
        .filter_map(|p| p.to_str())
        .map(|p| format!("/{p}/\n"))
        .collect::<String>();

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_at(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.set_root(root);
        config.config_path = root.join("folio.toml");
        config.build.assets = root.join("assets");
        config.build.output = root.join("public");
        config
    }

    #[test]
    fn test_new_site_layout() {
        let dir = tempdir().unwrap();
        let config = config_at(dir.path());

        new_site(&config, false).unwrap();

        assert!(dir.path().join("folio.toml").is_file());
        assert!(dir.path().join("assets/styles/globals.css").is_file());
        assert!(dir.path().join("assets/lucide-react").is_dir());
        assert_eq!(
            fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
            "/public/\n"
        );

        // the written config parses back to the defaults
        let written = SiteConfig::from_path(&dir.path().join("folio.toml")).unwrap();
        assert_eq!(written.content.skills, SiteConfig::default().content.skills);
    }

    #[test]
    fn test_new_site_rejects_non_empty_dir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "hola").unwrap();

        let err = new_site(&config_at(dir.path()), false).unwrap_err();
        assert!(err.to_string().contains("not empty"));
    }

    #[test]
    fn test_new_site_named_subdir() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "hola").unwrap();
        let root = dir.path().join("mysite");

        new_site(&config_at(&root), true).unwrap();
        assert!(root.join("folio.toml").is_file());
    }
}
