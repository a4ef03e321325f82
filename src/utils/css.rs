//! Tailwind CSS build integration.

use crate::config::SiteConfig;
use crate::utils::exec::{FilterRule, exec};
use anyhow::{Result, anyhow};
use std::{ffi::OsString, fs, path::PathBuf};

/// Output location of the compiled Tailwind stylesheet, relative to the output dir.
pub const TAILWIND_STYLESHEET: &str = "_folio/app.css";

/// Tailwind filter: skip version banner in output.
static TAILWIND_FILTER: FilterRule = FilterRule::new(&["≈ tailwindcss"]);

/// Run the configured Tailwind command for `[build.tailwind].input`.
///
/// Returns the path of the generated stylesheet.
pub fn run_tailwind(config: &SiteConfig) -> Result<PathBuf> {
    let tailwind = &config.build.tailwind;
    let input = tailwind
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("Tailwind input path not configured"))?;

    let output = config.build.output.join(TAILWIND_STYLESHEET);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let args: Vec<OsString> = vec![
        "-i".into(),
        input.into(),
        "-o".into(),
        output.clone().into(),
        (if config.build.minify { "--minify" } else { "" }).into(),
    ];
    exec(Some(config.get_root()), &tailwind.command, &args, &TAILWIND_FILTER)?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_tailwind_without_input() {
        let config = SiteConfig::default();
        assert!(run_tailwind(&config).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_tailwind_invokes_command() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.css");
        fs::write(&input, "@import \"tailwindcss\";").unwrap();

        let mut config = SiteConfig::default();
        config.set_root(dir.path());
        config.build.output = dir.path().join("public");
        config.build.tailwind.input = Some(input);
        // Stand-in "compiler": copy the input (`$2`) to the output (`$4`).
        config.build.tailwind.command =
            vec!["sh".into(), "-c".into(), "cp \"$2\" \"$4\"".into(), "tailwind".into()];

        let output = run_tailwind(&config).unwrap();
        assert_eq!(output, dir.path().join("public").join(TAILWIND_STYLESHEET));
        assert_eq!(fs::read_to_string(output).unwrap(), "@import \"tailwindcss\";");
    }
}
