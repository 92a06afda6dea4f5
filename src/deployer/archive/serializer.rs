//! Tar serialization of the staging directory.

use crate::deployer::{
    Error,
    error::{ErrorExt, Result},
};
use bytes::Bytes;
use std::{fs::File, path::Path};
use walkdir::WalkDir;

/// Serializes `dir` into an in-memory tar archive on a blocking thread.
///
/// See [`serialize_directory_blocking`] for the layout.
pub async fn serialize_directory(dir: &Path) -> Result<Bytes> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || serialize_directory_blocking(&dir))
        .await
        .map_err(|source| Error::Task {
            context: "serializing staging directory",
            source,
        })?
}

/// Serializes `dir` into an in-memory tar archive.
///
/// Every directory and regular file below `dir` becomes one entry named by its
/// path relative to `dir`, carrying the mode, size and mtime from the filesystem.
/// Entries are visited in file-name order so one tree always yields the same
/// entry sequence. Symlinks and other special files are skipped.
///
/// # Errors
///
/// Fails if the directory cannot be walked or a file cannot be opened or read,
/// including files removed while the walk is in progress.
pub fn serialize_directory_blocking(dir: &Path) -> Result<Bytes> {
    let mut builder = tar::Builder::new(Vec::new());
    builder.follow_symlinks(false);

    let mut files = 0usize;
    for entry in WalkDir::new(dir)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(dir)?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            builder
                .append_dir(rel_path, entry.path())
                .fs_context("archiving directory", entry.path())?;
        } else if file_type.is_file() {
            let mut file = File::open(entry.path()).fs_context("opening file", entry.path())?;
            builder
                .append_file(rel_path, &mut file)
                .fs_context("archiving file", entry.path())?;
            files += 1;
        } else {
            log::warn!("Skipping non-regular file: {}", entry.path().display());
        }
    }

    let data = builder
        .into_inner()
        .fs_context("finishing tar archive for", dir)?;

    log::debug!(
        "Serialized {} files from {} into {} bytes",
        files,
        dir.display(),
        data.len()
    );

    Ok(Bytes::from(data))
}
