//! Tar/gzip backup writer for server directories.

use chrono::Local;
use flate2::Compression;
use flate2::write::GzEncoder;
use mcm_core::names::sanitize_name;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("cannot back up: directory {0} does not exist")]
    SourceMissing(PathBuf),

    #[error("cannot create backup directory {path}: {reason}")]
    BackupDirUnavailable { path: PathBuf, reason: String },

    #[error("failed to write archive: {0}")]
    Io(#[from] std::io::Error),
}

/// What to archive and where the archive goes.
#[derive(Debug, Clone)]
pub struct BackupRequest {
    /// Profile name; sanitized into the archive filename.
    pub profile_name: String,
    /// The server's root directory.
    pub server_dir: PathBuf,
    /// Directory the archive is written into; created when missing.
    pub backup_dir: PathBuf,
    /// Archive only the `world/` subdirectory instead of everything.
    pub world_only: bool,
}

impl BackupRequest {
    /// The directory that will actually be walked and archived.
    pub fn source_dir(&self) -> PathBuf {
        if self.world_only {
            self.server_dir.join("world")
        } else {
            self.server_dir.clone()
        }
    }
}

/// Every regular file under `root`, recursively, sorted for a stable
/// archive order.
pub fn collect_files(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.is_file() {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// `"<sanitized-name> <YYYY-MM-DD> [world|server]"`, no extension.
fn backup_file_name(profile_name: &str, world_only: bool) -> String {
    let date = Local::now().format("%Y-%m-%d");
    let scope = if world_only { "[world]" } else { "[server]" };
    format!("{} {date} {scope}", sanitize_name(profile_name))
}

/// First `<base>.tar.gz` under `dir` that does not exist yet, counting
/// up with `-1`, `-2`, ... suffixes on collision.
fn unique_archive_path(dir: &Path, base: &str) -> PathBuf {
    let mut path = dir.join(format!("{base}.tar.gz"));
    let mut index = 1;
    while path.exists() {
        path = dir.join(format!("{base}-{index}.tar.gz"));
        index += 1;
    }
    path
}

/// Write the archive described by `request`, calling `on_file` for every
/// file appended. Returns the path of the finished archive.
pub fn create_backup(
    request: &BackupRequest,
    mut on_file: impl FnMut(&Path),
) -> Result<PathBuf, BackupError> {
    let source = request.source_dir();
    if !source.is_dir() {
        return Err(BackupError::SourceMissing(source));
    }
    if !request.backup_dir.is_dir() {
        fs::create_dir_all(&request.backup_dir).map_err(|err| BackupError::BackupDirUnavailable {
            path: request.backup_dir.clone(),
            reason: err.to_string(),
        })?;
    }

    let output = unique_archive_path(
        &request.backup_dir,
        &backup_file_name(&request.profile_name, request.world_only),
    );

    let encoder = GzEncoder::new(File::create(&output)?, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    // Entries live under the source directory's own name, so extracting
    // recreates e.g. `world/...` rather than spilling files loose.
    let root_name = source.file_name().map(Path::new).unwrap_or(&source);
    for file in collect_files(&source)? {
        let Ok(relative) = file.strip_prefix(&source) else {
            continue;
        };
        builder.append_path_with_name(&file, root_name.join(relative))?;
        on_file(&file);
    }

    builder.into_inner()?.finish()?;
    debug!(archive = %output.display(), "backup written");
    Ok(output)
}
