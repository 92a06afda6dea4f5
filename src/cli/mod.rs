//! Command line interface for the setup deployer.
//!
//! Resolves settings from defaults, the config file and flags, runs one
//! deployment and prints the result.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::{
    config,
    deployer::{Deployer, SettingsBuilder},
    error::{CliError, DeployerError, Result},
};
use clap::error::ErrorKind;
use std::sync::Arc;

/// Product banner printed at startup.
const BANNER: &str = "SETUP DEPLOYER";

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => return handle_parse_error(e),
    };
    let output = OutputManager::new(args.quiet);
    execute(&args, output).await
}

/// Help and version requests succeed; every other parse failure is an invalid argument.
fn handle_parse_error(err: clap::Error) -> Result<i32> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(0)
        }
        _ => {
            let rendered = err.to_string();
            let reason = rendered
                .trim()
                .trim_start_matches("error: ")
                .to_string();
            Err(DeployerError::Cli(CliError::InvalidArguments { reason }))
        }
    }
}

/// Runs one deployment for already-parsed arguments.
pub async fn execute(args: &Args, output: OutputManager) -> Result<i32> {
    args.validate()
        .map_err(|reason| DeployerError::Cli(CliError::InvalidArguments { reason }))?;

    let cwd = std::env::current_dir()?;
    let file_config = config::discover_config(args.config.as_deref(), &cwd)?;
    let flag_config = config::DeployerConfig::from(args);
    let settings = flag_config
        .apply(file_config.apply(SettingsBuilder::new()))
        .build()?;

    log::debug!("Resolved settings: {:?}", settings);
    output.section(&format!("{} ({})", BANNER, settings.product_name()))?;

    let deployer = Deployer::new(settings).with_progress(Arc::new(output));
    let artifact = deployer.deploy().await?;

    output.progress(&format!("Created {}", artifact.path.display()))?;
    output.indent(&format!(
        "{} bytes ({} serialized, {} chunk{})",
        artifact.size,
        artifact.serialized_len,
        artifact.chunk_count,
        if artifact.chunk_count == 1 { "" } else { "s" }
    ))?;
    output.indent(&format!("SHA256: {}", artifact.checksum))?;

    Ok(0)
}
