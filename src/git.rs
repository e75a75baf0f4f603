//! Git queries used by the commit gate.
//!
//! The gate only ever needs one fact from git: the name of the branch
//! being committed to. Failure here is not fatal for callers: a project
//! without git simply has no gate.

use anyhow::Context;
use std::path::Path;
use std::process::Command;

use crate::error::{GatehouseError, Result};

/// Get the name of the currently checked-out branch.
///
/// Runs `git rev-parse --abbrev-ref HEAD` in `project_dir`.
///
/// # Errors
///
/// Returns an error when git is not installed, the directory is not a
/// repository, or the branch name comes back empty (detached HEAD is
/// reported as the literal `HEAD` and passes through unchanged).
pub fn current_branch(project_dir: &Path) -> Result<String> {
    which::which("git").map_err(|_| GatehouseError::MissingTool {
        tool: "git".to_string(),
    })?;

    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(project_dir)
        .output()
        .context("Failed to execute git rev-parse")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GatehouseError::git("rev-parse", stderr.trim()));
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() {
        return Err(GatehouseError::git("rev-parse", "empty branch name"));
    }

    Ok(branch)
}
