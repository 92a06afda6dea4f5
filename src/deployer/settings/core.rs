//! Core Settings struct and implementations.

use super::{CompressionMode, NamingPolicy};
use std::path::{Path, PathBuf};

/// Product name used when none is configured.
pub const DEFAULT_PRODUCT_NAME: &str = "Mercury";

/// Staging directory used when none is configured.
pub const DEFAULT_STAGING_DIR: &str = "./staging";

/// Output directory used when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "./setup";

/// Number of chunk workers used when none is configured.
pub const DEFAULT_WORKERS: usize = 12;

/// Largest accepted number of chunk workers.
pub const MAX_WORKERS: usize = 1024;

/// Main settings for a deployment run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder) and read-only afterwards.
///
/// # Examples
///
/// ```no_run
/// use setup_deployer::deployer::{CompressionMode, SettingsBuilder};
///
/// # fn example() -> setup_deployer::deployer::Result<()> {
/// let settings = SettingsBuilder::new()
///     .product_name("Mercury")
///     .staging_dir("./staging")
///     .output_dir("./setup")
///     .mode(CompressionMode::ChunkedBrotli)
///     .build()?;
/// assert_eq!(settings.launcher_name(), "MercuryPlayerLauncher.exe");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    product_name: String,
    staging_dir: PathBuf,
    output_dir: PathBuf,
    mode: CompressionMode,
    naming: NamingPolicy,
    /// Chunk count for chunked modes. Always at least 1.
    workers: usize,
    /// Encoder level, already validated against `mode.max_level()`.
    level: u32,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the staging (input) directory.
    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the compression mode.
    pub fn mode(&self) -> CompressionMode {
        self.mode
    }

    /// Returns the naming policy.
    pub fn naming(&self) -> NamingPolicy {
        self.naming
    }

    /// Returns the number of chunk workers.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the encoder level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// File name of the launcher, e.g. `MercuryPlayerLauncher.exe`.
    pub fn launcher_name(&self) -> String {
        format!("{}PlayerLauncher.exe", self.product_name)
    }

    /// Expected location of the launcher inside the staging directory.
    pub fn launcher_path(&self) -> PathBuf {
        self.staging_dir.join(self.launcher_name())
    }

    /// Destination of the launcher copy.
    pub fn launcher_output_path(&self) -> PathBuf {
        self.output_dir.join(self.launcher_name())
    }

    pub(super) fn new(
        product_name: String,
        staging_dir: PathBuf,
        output_dir: PathBuf,
        mode: CompressionMode,
        naming: NamingPolicy,
        workers: usize,
        level: u32,
    ) -> Self {
        Self {
            product_name,
            staging_dir,
            output_dir,
            mode,
            naming,
            workers,
            level,
        }
    }
}
