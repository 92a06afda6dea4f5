//! Setup Deployer - packages a staging directory into an installer archive.
//!
//! This binary validates the staging layout, copies the launcher and writes one
//! compressed archive, exiting with 1 on any failure.

use setup_deployer::{cli, cli::OutputManager};
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            log::debug!("Deployment failed: {:?}", e);
            if OutputManager::new(false)
                .error(&e.to_string(), &e.recovery_suggestions())
                .is_err()
            {
                eprintln!("Error: {}", e);
            }
            1
        }
    };

    process::exit(exit_code);
}
