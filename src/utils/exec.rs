//! External command execution.
//!
//! Runs a configured command (e.g. `tailwindcss`) from the project root,
//! captures its output and forwards the interesting lines to the log.

use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Output},
};

/// Output lines starting with any of these prefixes are not logged.
pub struct FilterRule {
    pub skip_prefixes: &'static [&'static str],
}

impl FilterRule {
    pub const fn new(skip_prefixes: &'static [&'static str]) -> Self {
        Self { skip_prefixes }
    }

    fn should_skip(&self, line: &str) -> bool {
        line.trim().is_empty() || self.skip_prefixes.iter().any(|p| line.starts_with(p))
    }

    /// Log the lines of `output` that pass the filter.
    pub fn log(&self, name: &str, output: &str) {
        for line in output.lines().filter(|line| !self.should_skip(line)) {
            log!(name; "{}", line.trim_end());
        }
    }
}

/// Execute `cmd` (program plus leading args) followed by `args`.
///
/// Empty arguments are dropped so callers can pass optional flags as `""`.
///
/// # Errors
/// Returns error if the command cannot be spawned or exits non-zero.
pub fn exec(
    root: Option<&Path>,
    cmd: &[String],
    args: &[OsString],
    filter: &FilterRule,
) -> Result<Output> {
    let Some((program, leading)) = cmd.split_first() else {
        bail!("Empty command");
    };

    let mut command = Command::new(program);
    command
        .args(leading)
        .args(args.iter().filter(|a| !a.is_empty()));
    if let Some(dir) = root {
        command.current_dir(dir);
    }

    let output = command
        .output()
        .with_context(|| format!("Failed to execute `{program}`"))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        bail!(
            "Command `{program}` failed with {}\n{}{}",
            output.status,
            stdout,
            stderr
        );
    }

    filter.log(program, &stdout);
    filter.log(program, &stderr);
    Ok(output)
}
