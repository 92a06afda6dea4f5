//! Precondition checks run before anything is written.

use crate::deployer::{Error, error::Result, utils::fs};
use std::{io, path::Path};

/// Checks that the staging directory can be read and has at least one entry.
pub async fn validate_staging(dir: &Path) -> Result<()> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|source| Error::StagingUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

    let first = entries
        .next_entry()
        .await
        .map_err(|source| Error::StagingUnreadable {
            path: dir.to_path_buf(),
            source,
        })?;

    if first.is_none() {
        return Err(Error::StagingEmpty {
            path: dir.to_path_buf(),
        });
    }
    Ok(())
}

/// Creates the output directory if it does not exist yet.
pub async fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).await
}

/// Checks that the launcher exists and is a regular file.
///
/// Symlinks are not followed and count as non-regular, matching the archive walk.
pub async fn validate_launcher(path: &Path) -> Result<()> {
    match tokio::fs::symlink_metadata(path).await {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(Error::LauncherNotRegular {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::LauncherMissing {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(Error::Fs {
            context: "checking launcher",
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_staging_is_unreadable() {
        let tmp = tempfile::tempdir().unwrap();
        let err = validate_staging(&tmp.path().join("staging")).await.unwrap_err();
        assert!(matches!(err, Error::StagingUnreadable { .. }));
    }

    #[tokio::test]
    async fn empty_staging_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let err = validate_staging(tmp.path()).await.unwrap_err();
        assert!(matches!(err, Error::StagingEmpty { .. }));
    }

    #[tokio::test]
    async fn populated_staging_passes() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a"), b"a").unwrap();
        validate_staging(tmp.path()).await.unwrap();
    }

    #[tokio::test]
    async fn launcher_must_be_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let launcher = tmp.path().join("MercuryPlayerLauncher.exe");

        let err = validate_launcher(&launcher).await.unwrap_err();
        assert!(matches!(err, Error::LauncherMissing { .. }));

        std::fs::create_dir(&launcher).unwrap();
        let err = validate_launcher(&launcher).await.unwrap_err();
        assert!(matches!(err, Error::LauncherNotRegular { .. }));

        std::fs::remove_dir(&launcher).unwrap();
        std::fs::write(&launcher, b"MZ").unwrap();
        validate_launcher(&launcher).await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_launcher_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("real.exe");
        std::fs::write(&target, b"MZ").unwrap();
        let launcher = tmp.path().join("MercuryPlayerLauncher.exe");
        std::os::unix::fs::symlink(&target, &launcher).unwrap();

        let err = validate_launcher(&launcher).await.unwrap_err();
        assert!(matches!(err, Error::LauncherNotRegular { .. }));
        assert!(err.to_string().contains("not a regular file"));
    }
}
