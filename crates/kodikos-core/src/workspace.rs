//! Working-directory preparation
//!
//! The embedded interpreter resolves relative paths against the process
//! current directory, so preparation mutates process-wide state. That is only
//! sound because a runner process serves exactly one program.

use crate::errors::RunnerError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Create `path` (and any missing parents) and make it the current directory.
///
/// Succeeds when the directory already exists. Returns the directory the
/// process ended up in.
pub async fn prepare_workspace(path: &Path) -> Result<PathBuf, RunnerError> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| RunnerError::workspace(path, e))?;

    std::env::set_current_dir(path).map_err(|e| RunnerError::workspace(path, e))?;

    let current = std::env::current_dir().map_err(|e| RunnerError::workspace(path, e))?;
    log::debug!("Working directory ready at {}", current.display());

    Ok(current)
}
