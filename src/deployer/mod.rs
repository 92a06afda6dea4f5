//! Staging directory packaging.
//!
//! The [`Deployer`] validates a staging directory, copies its launcher to the
//! output directory and writes the rest of the tree as one compressed artifact.
//!
//! # Example
//!
//! ```no_run
//! use setup_deployer::deployer::{CompressionMode, Deployer, NamingPolicy, SettingsBuilder};
//!
//! # async fn example() -> setup_deployer::deployer::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .product_name("Mercury")
//!     .staging_dir("./staging")
//!     .output_dir("./setup")
//!     .mode(CompressionMode::ChunkedBrotli)
//!     .naming(NamingPolicy::ContentAddressed)
//!     .build()?;
//!
//! let artifact = Deployer::new(settings).deploy().await?;
//! println!("Created: {}", artifact.path.display());
//! # Ok(())
//! # }
//! ```

pub mod archive;
mod builder;
pub mod error;
pub mod naming;
pub mod progress;
pub mod settings;
pub mod utils;

pub use builder::Deployer;
pub use error::{Error, Result};
pub use naming::ArtifactNamer;
pub use progress::{NoProgress, ProgressSink};
pub use settings::{CompressionMode, MAX_WORKERS, NamingPolicy, Settings, SettingsBuilder};

use std::path::PathBuf;

/// Result of a successful deployment.
#[derive(Clone, Debug)]
pub struct DeployedArtifact {
    /// Path of the written artifact.
    pub path: PathBuf,
    /// Path of the launcher copy.
    pub launcher: PathBuf,
    /// Format the artifact was written in.
    pub mode: CompressionMode,
    /// Artifact size in bytes.
    pub size: u64,
    /// Hex SHA-256 of the artifact file.
    pub checksum: String,
    /// Size of the container before compression.
    pub serialized_len: usize,
    /// Number of independently compressed streams in the artifact.
    pub chunk_count: usize,
}
