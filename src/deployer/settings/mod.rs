//! Configuration structures for deployment runs.
//!
//! Settings replace the fixed product name and paths of the classic deployer
//! with an explicit struct handed to the [`Deployer`](crate::deployer::Deployer).

mod builder;
mod core;
mod mode;

pub use builder::SettingsBuilder;
pub use self::core::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PRODUCT_NAME, DEFAULT_STAGING_DIR, DEFAULT_WORKERS, MAX_WORKERS, Settings,
};
pub use mode::{CompressionMode, NamingPolicy};
