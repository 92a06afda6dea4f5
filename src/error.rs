//! Top-level error types for the deployer binary.
//!
//! This module defines the errors surfaced to the user, with recovery
//! suggestions printed under the message.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, DeployerError>;

/// Main error type for a deployer run
#[derive(Error, Debug)]
pub enum DeployerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parsing errors
    #[error("Config error in {}: {source}", path.display())]
    Config {
        /// Config file that failed to parse
        path: PathBuf,
        /// Parser error
        source: toml::de::Error,
    },

    /// Deployment errors
    #[error("{0}")]
    Deploy(#[from] crate::deployer::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Config file given explicitly but not readable
    #[error("Cannot read config file {}: {source}", path.display())]
    ConfigUnreadable {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

impl DeployerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::deployer::Error as Deploy;

        match self {
            Self::Deploy(Deploy::StagingUnreadable { .. }) => vec![
                "Please create the staging directory if it doesn't exist and place your files in it, or run this tool from a different directory.".to_string(),
            ],
            Self::Deploy(Deploy::StagingEmpty { .. }) => vec![
                "Please place your files in the staging directory, or run this tool from a different directory.".to_string(),
            ],
            Self::Deploy(Deploy::LauncherMissing { .. } | Deploy::LauncherNotRegular { .. }) => vec![
                "Please place the launcher in the staging directory or run this tool from a different directory.".to_string(),
            ],
            Self::Cli(_) | Self::Config { .. } => {
                vec!["Run with --help to see the accepted options and config keys.".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_launcher_suggests_placing_it() {
        let err = DeployerError::from(crate::deployer::Error::LauncherMissing {
            path: PathBuf::from("staging/MercuryPlayerLauncher.exe"),
        });
        assert!(err.to_string().contains("launcher not found"));
        assert!(err.recovery_suggestions()[0].contains("place the launcher"));
    }
}
