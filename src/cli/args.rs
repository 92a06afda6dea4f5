//! Command line argument parsing and validation.
//!
//! Every flag is optional: a bare invocation packages `./staging` into `./setup`
//! exactly like the classic deployer.

use crate::config::DeployerConfig;
use crate::deployer::{CompressionMode, MAX_WORKERS, NamingPolicy};
use clap::Parser;
use std::path::PathBuf;

/// Setup deployer: packages a staging directory into an installer archive
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "setup_deployer",
    version,
    about = "Packages a staging directory into a single installer archive",
    long_about = "Packages a staging directory (a built application plus its launcher) into one compressed archive.

Checks that the staging directory is non-empty and contains {product}PlayerLauncher.exe,
copies the launcher to the output directory, and writes the archive next to it.

Usage:
  setup_deployer
  setup_deployer --mode chunked-brotli --naming content-addressed
  setup_deployer --staging-dir build/staging --output-dir dist --workers 8

Settings are read from defaults, then deployer.toml (or --config), then flags and environment.
Exit code 0 = launcher copy and artifact guaranteed to exist in the output directory."
)]
pub struct Args {
    /// Config file (default: ./deployer.toml if present)
    #[arg(short = 'c', long, env = "DEPLOYER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Product name; the launcher must be named {product}PlayerLauncher.exe
    #[arg(short = 'p', long, env = "DEPLOYER_PRODUCT_NAME", value_name = "NAME")]
    pub product_name: Option<String>,

    /// Directory holding the application and launcher
    #[arg(short = 's', long, env = "DEPLOYER_STAGING_DIR", value_name = "DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Directory receiving the launcher copy and the artifact
    #[arg(short = 'o', long, env = "DEPLOYER_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Archive format
    #[arg(short = 'm', long, value_enum, env = "DEPLOYER_MODE")]
    pub mode: Option<CompressionMode>,

    /// Artifact naming policy
    #[arg(short = 'n', long, value_enum, env = "DEPLOYER_NAMING")]
    pub naming: Option<NamingPolicy>,

    /// Number of parallel chunks for chunked-brotli
    #[arg(short = 'j', long, env = "DEPLOYER_WORKERS", value_name = "N")]
    pub workers: Option<usize>,

    /// Compression level (gzip/zip 0-9, brotli 0-11)
    #[arg(short = 'l', long, env = "DEPLOYER_LEVEL", value_name = "LEVEL")]
    pub level: Option<u32>,

    /// Suppress progress output
    #[arg(short = 'q', long, env = "DEPLOYER_QUIET")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments and environment, without exiting on error
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self
            .product_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err("Product name cannot be empty".to_string());
        }

        if self
            .workers
            .is_some_and(|workers| !(1..=MAX_WORKERS).contains(&workers))
        {
            return Err(format!(
                "Worker count must be at least 1 and at most {}",
                MAX_WORKERS
            ));
        }

        Ok(())
    }
}

impl From<&Args> for DeployerConfig {
    /// Flags and environment variables as a config layer.
    fn from(args: &Args) -> Self {
        Self {
            product_name: args.product_name.clone(),
            staging_dir: args.staging_dir.clone(),
            output_dir: args.output_dir.clone(),
            mode: args.mode,
            naming: args.naming,
            workers: args.workers,
            level: args.level,
        }
    }
}
