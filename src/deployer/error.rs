//! Error types for deployment operations.
//!
//! Every failure is fatal: errors propagate to the caller unchanged and the run
//! stops. The helper trait attaches the failing path or step to I/O errors so the
//! final message says what went wrong and where.

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error as DeriveError;

/// Result alias for deployer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while packaging a staging directory.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Staging directory could not be read.
    #[error("error reading staging directory {}: {source}", path.display())]
    StagingUnreadable {
        /// Configured staging directory
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Staging directory exists but holds nothing to package.
    #[error("staging directory {} is empty", path.display())]
    StagingEmpty {
        /// Configured staging directory
        path: PathBuf,
    },

    /// Launcher executable is not where it is expected.
    #[error("launcher not found at {}", path.display())]
    LauncherMissing {
        /// Expected launcher path
        path: PathBuf,
    },

    /// Launcher exists but is a symlink, directory or other non-regular file.
    #[error("launcher at {} is not a regular file", path.display())]
    LauncherNotRegular {
        /// Launcher path
        path: PathBuf,
    },

    /// Filesystem operation failed on a specific path.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// Step that was running
        context: &'static str,
        /// Path being operated on
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// I/O error without path information.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// A compression worker failed; no artifact is written.
    #[error("failed to compress chunk {chunk}: {reason}")]
    Compression {
        /// Index of the failing chunk
        chunk: usize,
        /// Failure reported by the encoder or the task runtime
        reason: String,
    },

    /// Writing a compressed chunk to the output stream failed.
    #[error("error writing chunk {index}: {source}")]
    ChunkWrite {
        /// Index of the chunk being written
        index: usize,
        /// Underlying error
        source: io::Error,
    },

    /// Zip container error.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A blocking task could not be joined.
    #[error("{context} task failed: {source}")]
    Task {
        /// Step that was running in the task
        context: &'static str,
        /// Join error from the runtime
        source: tokio::task::JoinError,
    },

    /// Path prefix could not be stripped while walking a directory.
    #[error("{0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Any other failure.
    #[error("{0}")]
    GenericError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        match err.into_io_error() {
            Some(source) => Self::Fs {
                context: "walking",
                path,
                source,
            },
            None => Self::GenericError(format!(
                "filesystem loop detected while walking {}",
                path.display()
            )),
        }
    }
}

/// Attaches a step description and path to I/O results.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Returns early with an [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::deployer::Error::GenericError(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::deployer::Error::GenericError($err.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::deployer::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
