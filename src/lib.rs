//! Installer packaging library
//!
//! This library packages a staging directory (a built application plus a
//! launcher executable) into a single distributable archive:
//! - tar, zip, tar.gz and tar.br containers
//! - `.shart`: tar split into chunks compressed in parallel as independent
//!   Brotli streams and concatenated
//! - fixed or content-addressed artifact names
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod config;
pub mod deployer;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, DeployerError, Result};
