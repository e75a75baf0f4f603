//! Git hook installation for the commit-message gate.
//!
//! The installed `commit-msg` script runs `gatehouse check` and, on the
//! needs-confirmation status, asks on the controlling terminal whether
//! to continue. The decision to commit stays with the user; gatehouse
//! itself never cancels a commit.

use std::fs;
use std::path::Path;

use gatehouse::error::{GatehouseError, Result};

const COMMIT_MSG_HOOK: &str = include_str!("templates/git-hooks/commit-msg");

/// Install the `commit-msg` hook into `.git/hooks`.
///
/// Returns `true` when the hook was written, `false` when one already
/// exists and `force` was not given.
///
/// # Errors
///
/// Returns an error when the project has no `.git/hooks` directory or
/// the hook file cannot be written.
pub fn install_commit_msg_hook(project_dir: &Path, force: bool) -> Result<bool> {
    let hooks_dir = project_dir.join(".git/hooks");

    if !hooks_dir.exists() {
        return Err(GatehouseError::hook(
            ".git/hooks not found (not a git repo?)",
        ));
    }

    let path = hooks_dir.join("commit-msg");
    if path.exists() && !force {
        return Ok(false);
    }

    fs::write(&path, COMMIT_MSG_HOOK)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms)?;
    }

    Ok(true)
}
