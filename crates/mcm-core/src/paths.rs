//! Resolution of the manager's on-disk locations.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while resolving or preparing manager directories.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("cannot determine the home directory")]
    NoHomeDir,

    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

/// Root directory for all manager state: `~/minecraft-manager`.
pub fn data_root() -> Result<PathBuf, PathError> {
    dirs::home_dir()
        .map(|home| home.join("minecraft-manager"))
        .ok_or(PathError::NoHomeDir)
}

/// Default directory holding profile documents.
pub fn profiles_dir() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join("profiles"))
}

/// Create `path` (and any missing parents) if it does not exist yet.
///
/// An existing non-directory entry at `path` is an error rather than
/// something to silently overwrite.
pub fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }
    fs::create_dir_all(path).map_err(|err| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
