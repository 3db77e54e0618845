//! File system utility functions

use crate::constants;
use anyhow::Result;
use std::io;
use std::path::Path;

/// Report whether a path exists
///
/// Returns `Ok(false)` only when the path is absent. Any other I/O failure
/// (permission denied, broken mount, ...) is returned as an error so callers
/// can tell "absent" apart from "could not tell".
pub fn path_exists(path: impl AsRef<Path>) -> io::Result<bool> {
    match std::fs::metadata(path.as_ref()) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &str) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Create a directory and its parents, readable only by owner and group
pub fn ensure_private_directory(path: &Path) -> io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(constants::git::TARGET_DIR_MODE);
    }

    builder.create(path)
}
