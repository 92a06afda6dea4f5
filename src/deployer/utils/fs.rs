//! File system utilities for deployment.
//!
//! Provides file copying, idempotent directory creation, and atomic artifact
//! writes with path-aware error reporting.

use crate::deployer::{
    Error,
    error::{ErrorExt, Result},
};
use bytes::Bytes;
use std::{
    io::Write,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path.
///
/// Succeeds if the directory already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating output directory", path)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let metadata = fs::metadata(from).await.fs_context("reading", from)?;
    if !metadata.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying to", to)
}

/// Writes `data` to `path` so that readers see either nothing or the complete file.
///
/// The bytes go to a temporary file next to `path`, are synced to disk, and the
/// temporary file is then renamed over `path`. On any failure the temporary file
/// is removed and `path` is left untouched.
pub async fn write_atomic(path: &Path, data: Bytes) -> Result<()> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_atomic_blocking(&path, &data))
        .await
        .map_err(|source| Error::Task {
            context: "writing artifact",
            source,
        })?
}

fn write_atomic_blocking(path: &Path, data: &[u8]) -> Result<()> {
    let dir = parent_dir(path);
    let mut tmp = tempfile::Builder::new()
        .prefix(".artifact-")
        .tempfile_in(&dir)
        .fs_context("creating temporary file in", &dir)?;

    tmp.write_all(data)
        .fs_context("writing artifact", tmp.path())?;
    tmp.as_file()
        .sync_all()
        .fs_context("syncing artifact", tmp.path())?;

    tmp.persist(path).map_err(|e| Error::Fs {
        context: "persisting artifact",
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
