//! Zip container for the staging directory.

use crate::deployer::{
    Error,
    error::{ErrorExt, Result},
};
use bytes::Bytes;
use std::{
    fs::File,
    io::{self, Cursor},
    path::Path,
};
use walkdir::WalkDir;
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Packs `dir` into an in-memory deflate zip on a blocking thread.
pub async fn zip_directory(dir: &Path, level: u32) -> Result<Bytes> {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || zip_directory_blocking(&dir, level))
        .await
        .map_err(|source| Error::Task {
            context: "zipping staging directory",
            source,
        })?
}

/// Packs `dir` into an in-memory zip archive.
///
/// Same walk as the tar serializer; entry names always use `/` separators.
pub fn zip_directory_blocking(dir: &Path, level: u32) -> Result<Bytes> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let base = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(i64::from(level)));

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let name = entry_name(entry.path().strip_prefix(dir)?);
        let metadata = entry.metadata()?;

        #[cfg(unix)]
        let options = {
            use std::os::unix::fs::PermissionsExt;
            base.unix_permissions(metadata.permissions().mode())
        };
        #[cfg(not(unix))]
        let options = {
            let _ = &metadata;
            base
        };

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else if entry.file_type().is_file() {
            writer.start_file(name, options)?;
            let mut file = File::open(entry.path()).fs_context("opening file", entry.path())?;
            io::copy(&mut file, &mut writer).fs_context("zipping file", entry.path())?;
        } else {
            log::warn!("Skipping non-regular file: {}", entry.path().display());
        }
    }

    let cursor = writer.finish()?;
    Ok(Bytes::from(cursor.into_inner()))
}

fn entry_name(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
