//! Main deployment orchestration.
//!
//! This module provides the [`Deployer`] that validates the staging layout,
//! copies the launcher, packs the staging tree and writes the artifact.

use super::{
    checksum::calculate_sha256,
    validation::{prepare_output_dir, validate_launcher, validate_staging},
};
use crate::deployer::{
    CompressionMode, DeployedArtifact, Result, Settings,
    archive::{self, ChunkCodec},
    naming::ArtifactNamer,
    progress::{NoProgress, ProgressSink},
    utils::fs,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::{sync::Arc, time::Instant};

/// Packed staging tree, ready to be named and written.
struct PackedArchive {
    data: Bytes,
    serialized_len: usize,
    chunk_count: usize,
}

/// Main deployment orchestrator.
///
/// Runs the steps of one deployment in a fixed order and stops at the first
/// failure:
///
/// 1. Check that the staging directory exists and is not empty
/// 2. Create the output directory
/// 3. Check for the launcher and copy it to the output directory
/// 4. Serialize and compress the staging directory
/// 5. Name the artifact and write it atomically
///
/// A launcher copied in step 3 stays in place if a later step fails; the run is
/// only successful once the artifact has been written.
///
/// # Examples
///
/// ```no_run
/// use setup_deployer::deployer::{CompressionMode, Deployer, SettingsBuilder};
///
/// # async fn example() -> setup_deployer::deployer::Result<()> {
/// let settings = SettingsBuilder::new()
///     .mode(CompressionMode::ChunkedBrotli)
///     .build()?;
///
/// let artifact = Deployer::new(settings).deploy().await?;
/// println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
/// println!("SHA256: {}", artifact.checksum);
/// # Ok(())
/// # }
/// ```
pub struct Deployer {
    settings: Settings,
    progress: Arc<dyn ProgressSink>,
}

impl std::fmt::Debug for Deployer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deployer")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl Deployer {
    /// Creates a deployer that reports progress nowhere.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            progress: Arc::new(NoProgress),
        }
    }

    /// Sends progress lines to `progress`.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Runs the deployment, naming the artifact with the current time.
    pub async fn deploy(&self) -> Result<DeployedArtifact> {
        self.deploy_at(Utc::now()).await
    }

    /// Runs the deployment with an explicit clock value for content-addressed names.
    pub async fn deploy_at(&self, now: DateTime<Utc>) -> Result<DeployedArtifact> {
        let settings = &self.settings;

        validate_staging(settings.staging_dir()).await?;
        self.report("Staging directory contains files.");

        prepare_output_dir(settings.output_dir()).await?;
        self.report("Output directory is ready.");

        let launcher = settings.launcher_path();
        validate_launcher(&launcher).await?;
        let launcher_copy = settings.launcher_output_path();
        fs::copy_file(&launcher, &launcher_copy).await?;
        self.report("Launcher copied to output directory.");

        let started = Instant::now();
        let packed = self.pack().await?;
        self.report(&format!(
            "Staging directory compressed to {} in {:?}",
            settings.mode().extension(),
            started.elapsed()
        ));

        let started = Instant::now();
        let name = ArtifactNamer::new(settings.naming(), settings.product_name(), settings.mode())
            .name(&packed.data, now);
        let path = settings.output_dir().join(&name);
        let size = packed.data.len() as u64;
        fs::write_atomic(&path, packed.data).await?;
        let checksum = calculate_sha256(&path).await?;
        self.report(&format!(
            "Staging files written to output directory in {:?}",
            started.elapsed()
        ));

        log::info!("Wrote {} ({} bytes, sha256 {})", path.display(), size, checksum);

        Ok(DeployedArtifact {
            path,
            launcher: launcher_copy,
            mode: settings.mode(),
            size,
            checksum,
            serialized_len: packed.serialized_len,
            chunk_count: packed.chunk_count,
        })
    }

    /// Serializes and compresses the staging directory in the configured mode.
    async fn pack(&self) -> Result<PackedArchive> {
        let settings = &self.settings;
        let mode = settings.mode();
        let level = settings.level();

        let codec = match mode {
            CompressionMode::Zip => {
                let data = archive::zip_directory(settings.staging_dir(), level).await?;
                return Ok(PackedArchive {
                    serialized_len: data.len(),
                    chunk_count: 1,
                    data,
                });
            }
            CompressionMode::Tar => None,
            CompressionMode::Gzip => Some(ChunkCodec::Gzip { level }),
            CompressionMode::Brotli | CompressionMode::ChunkedBrotli => {
                Some(ChunkCodec::brotli(level))
            }
        };

        let serialized = archive::serialize_directory(settings.staging_dir()).await?;
        let serialized_len = serialized.len();
        log::info!("Serialized staging directory: {} bytes", serialized_len);

        let Some(codec) = codec else {
            return Ok(PackedArchive {
                data: serialized,
                serialized_len,
                chunk_count: 1,
            });
        };

        // Single-stream modes are the one-chunk case of the same pipeline.
        let workers = if mode.is_chunked() {
            settings.workers()
        } else {
            1
        };
        let ranges = archive::split(serialized_len, workers);
        let chunks = archive::compress_chunks(serialized, &ranges, Arc::new(codec)).await?;

        let mut output = Vec::with_capacity(chunks.iter().map(|c| c.data.len()).sum());
        archive::concatenate(&chunks, &mut output)?;
        log::info!(
            "Compressed {} bytes into {} bytes across {} chunks",
            serialized_len,
            output.len(),
            chunks.len()
        );

        Ok(PackedArchive {
            data: Bytes::from(output),
            serialized_len,
            chunk_count: chunks.len(),
        })
    }

    fn report(&self, message: &str) {
        log::info!("{}", message);
        self.progress.step(message);
    }
}
