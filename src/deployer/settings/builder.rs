//! Builder for constructing Settings.

use super::{
    CompressionMode, NamingPolicy, Settings,
    core::{
        DEFAULT_OUTPUT_DIR, DEFAULT_PRODUCT_NAME, DEFAULT_STAGING_DIR, DEFAULT_WORKERS, MAX_WORKERS,
    },
};
use crate::bail;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every field has a default matching the classic deployer layout
/// (`Mercury`, `./staging`, `./setup`, gzip, fixed naming, 12 workers).
///
/// # Examples
///
/// ```no_run
/// use setup_deployer::deployer::{NamingPolicy, SettingsBuilder};
///
/// # fn example() -> setup_deployer::deployer::Result<()> {
/// let settings = SettingsBuilder::new()
///     .naming(NamingPolicy::ContentAddressed)
///     .workers(4)
///     .build()?;
/// assert_eq!(settings.workers(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Default, Debug, Clone)]
pub struct SettingsBuilder {
    product_name: Option<String>,
    staging_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    mode: Option<CompressionMode>,
    naming: Option<NamingPolicy>,
    workers: Option<usize>,
    level: Option<u32>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the product name. Determines the launcher and fixed artifact names.
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the staging directory.
    pub fn staging_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.staging_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the compression mode.
    ///
    /// Default: [`CompressionMode::Gzip`]
    pub fn mode(mut self, mode: CompressionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the naming policy.
    ///
    /// Default: [`NamingPolicy::Fixed`]
    pub fn naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Sets the chunk worker count used by chunked modes.
    ///
    /// Default: 12, at most [`MAX_WORKERS`]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the encoder level (gzip/zip 0-9, brotli 0-11).
    ///
    /// Default: the mode's default level
    pub fn level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the product name is empty, the worker count is zero or
    /// above [`MAX_WORKERS`], or the level exceeds what the selected mode accepts.
    pub fn build(self) -> crate::deployer::Result<Settings> {
        let product_name = self
            .product_name
            .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string());
        if product_name.trim().is_empty() {
            bail!("product name cannot be empty");
        }

        let workers = self.workers.unwrap_or(DEFAULT_WORKERS);
        if workers == 0 {
            bail!("worker count must be at least 1");
        }
        if workers > MAX_WORKERS {
            bail!("worker count {} exceeds the maximum of {}", workers, MAX_WORKERS);
        }

        let mode = self.mode.unwrap_or_default();
        let level = self.level.unwrap_or_else(|| mode.default_level());
        if level > mode.max_level() {
            bail!(
                "compression level {} is out of range for {} (max {})",
                level,
                mode,
                mode.max_level()
            );
        }

        Ok(Settings::new(
            product_name,
            self.staging_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STAGING_DIR)),
            self.output_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            mode,
            self.naming.unwrap_or_default(),
            workers,
            level,
        ))
    }
}
