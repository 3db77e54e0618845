//! Branch introspection for cloned repositories

use super::common::combined_output;
use crate::error::{Result, SourceError};
use std::path::Path;
use std::process::Command;

const CONTEXT: &str = "failed to get the branch from the repo";

/// Get the current branch of the repository at `repo_path`
///
/// Runs `git rev-parse --abbrev-ref HEAD` and returns the first line of its
/// output. A detached HEAD is reported as `"HEAD"`.
pub fn current_branch(repo_path: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .current_dir(repo_path)
        .output()
        .map_err(|err| SourceError::generic(CONTEXT, err.to_string()))?;

    if !output.status.success() {
        return Err(SourceError::generic(
            CONTEXT,
            combined_output(&output).trim().to_string(),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let branch = stdout.lines().next().unwrap_or_default().trim_end();
    Ok(branch.to_string())
}
