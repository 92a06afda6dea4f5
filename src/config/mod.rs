//! Optional `deployer.toml` configuration file.
//!
//! Values from the file override built-in defaults and are in turn overridden
//! by command line flags and environment variables.
//!
//! ```toml
//! product_name = "Mercury"
//! staging_dir = "./staging"
//! output_dir = "./setup"
//! mode = "chunked-brotli"
//! naming = "content-addressed"
//! workers = 12
//! level = 6
//! ```

use crate::deployer::{CompressionMode, NamingPolicy, SettingsBuilder};
use crate::error::{CliError, DeployerError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "deployer.toml";

/// Settings read from a config file. Every key is optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployerConfig {
    /// Product name
    pub product_name: Option<String>,
    /// Staging directory
    pub staging_dir: Option<PathBuf>,
    /// Output directory
    pub output_dir: Option<PathBuf>,
    /// Compression mode
    pub mode: Option<CompressionMode>,
    /// Naming policy
    pub naming: Option<NamingPolicy>,
    /// Chunk workers
    pub workers: Option<usize>,
    /// Encoder level
    pub level: Option<u32>,
}

impl DeployerConfig {
    /// Copies every key present in the file onto `builder`.
    pub fn apply(&self, mut builder: SettingsBuilder) -> SettingsBuilder {
        if let Some(name) = &self.product_name {
            builder = builder.product_name(name.clone());
        }
        if let Some(dir) = &self.staging_dir {
            builder = builder.staging_dir(dir);
        }
        if let Some(dir) = &self.output_dir {
            builder = builder.output_dir(dir);
        }
        if let Some(mode) = self.mode {
            builder = builder.mode(mode);
        }
        if let Some(naming) = self.naming {
            builder = builder.naming(naming);
        }
        if let Some(workers) = self.workers {
            builder = builder.workers(workers);
        }
        if let Some(level) = self.level {
            builder = builder.level(level);
        }
        builder
    }
}

/// Parses a config file.
pub fn load_config(path: &Path) -> Result<DeployerConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        DeployerError::Cli(CliError::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })
    })?;

    toml::from_str(&contents).map_err(|source| DeployerError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the explicit config file, or `deployer.toml` from `cwd` if present.
///
/// An explicit path that cannot be read is an error; a missing default file is not.
pub fn discover_config(explicit: Option<&Path>, cwd: &Path) -> Result<DeployerConfig> {
    if let Some(path) = explicit {
        log::debug!("Loading config from {}", path.display());
        return load_config(path);
    }

    let default_path = cwd.join(CONFIG_FILE_NAME);
    if default_path.is_file() {
        log::debug!("Loading config from {}", default_path.display());
        load_config(&default_path)
    } else {
        Ok(DeployerConfig::default())
    }
}
