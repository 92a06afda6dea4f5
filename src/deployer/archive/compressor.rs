//! Parallel per-chunk compression.
//!
//! Each [`ChunkRange`] is compressed on its own blocking task into its own buffer
//! with an independent encoder, so every output chunk is a complete, finalized
//! stream. The archive is shared read-only through [`Bytes`]; no task touches
//! another task's buffer, and results are only read after every task has been
//! joined.

use super::splitter::ChunkRange;
use crate::deployer::{Error, error::Result};
use bytes::Bytes;
use flate2::{Compression, write::GzEncoder};
use std::{
    io::{self, Write},
    sync::Arc,
};

/// Brotli window size (log2). 22 gives a 4 MiB window.
pub const BROTLI_LGWIN: u32 = 22;

/// Encodes one chunk into a self-contained compressed stream.
pub trait ChunkEncoder: Send + Sync {
    /// Compresses `input` and finalizes the stream (header, data and trailer).
    fn encode(&self, input: &[u8]) -> io::Result<Vec<u8>>;
}

/// Built-in chunk encoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkCodec {
    /// One Brotli stream per chunk. Standard decoders stop after the first
    /// stream; readers of concatenated output must decode stream by stream.
    Brotli {
        /// Quality 0-11
        quality: u32,
        /// Window size (log2)
        lgwin: u32,
    },
    /// One gzip member per chunk. Concatenated members form a valid gzip file.
    Gzip {
        /// Level 0-9
        level: u32,
    },
}

impl ChunkCodec {
    /// Brotli with the default window.
    pub fn brotli(quality: u32) -> Self {
        Self::Brotli {
            quality,
            lgwin: BROTLI_LGWIN,
        }
    }
}

impl ChunkEncoder for ChunkCodec {
    fn encode(&self, input: &[u8]) -> io::Result<Vec<u8>> {
        match *self {
            Self::Brotli { quality, lgwin } => {
                let params = brotli::enc::BrotliEncoderParams {
                    quality: quality as i32,
                    lgwin: lgwin as i32,
                    ..Default::default()
                };
                let mut reader = input;
                let mut output = Vec::with_capacity(input.len() / 2 + 16);
                brotli::BrotliCompress(&mut reader, &mut output, &params)?;
                Ok(output)
            }
            Self::Gzip { level } => {
                let mut encoder = GzEncoder::new(
                    Vec::with_capacity(input.len() / 2 + 32),
                    Compression::new(level),
                );
                encoder.write_all(input)?;
                encoder.finish()
            }
        }
    }
}

/// Output of one compression worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressedChunk {
    /// Index of the source [`ChunkRange`].
    pub index: usize,
    /// Finalized compressed stream.
    pub data: Vec<u8>,
}

/// Compresses every range of `archive` concurrently.
///
/// Spawns one blocking task per range and waits for all of them before looking
/// at any result. Chunks are returned in range order.
///
/// # Errors
///
/// Returns [`Error::Compression`] for the lowest-indexed chunk whose encoder
/// failed or whose task panicked. No partial result is returned.
pub async fn compress_chunks<E>(
    archive: Bytes,
    ranges: &[ChunkRange],
    encoder: Arc<E>,
) -> Result<Vec<CompressedChunk>>
where
    E: ChunkEncoder + 'static,
{
    let handles: Vec<_> = ranges
        .iter()
        .copied()
        .map(|range| {
            let slice = archive.slice(range.start..range.end);
            let encoder = Arc::clone(&encoder);
            let handle = tokio::task::spawn_blocking(move || {
                log::debug!(
                    "Compressing chunk {}: {}-{}",
                    range.index,
                    range.start,
                    range.end
                );
                encoder
                    .encode(&slice)
                    .map(|data| CompressedChunk {
                        index: range.index,
                        data,
                    })
                    .map_err(|e| Error::Compression {
                        chunk: range.index,
                        reason: e.to_string(),
                    })
            });
            (range.index, handle)
        })
        .collect();

    // Barrier: every worker finishes before any buffer is handed out.
    let mut outcomes = Vec::with_capacity(handles.len());
    for (index, handle) in handles {
        outcomes.push((index, handle.await));
    }

    let mut chunks = Vec::with_capacity(outcomes.len());
    for (index, outcome) in outcomes {
        let chunk = outcome.map_err(|e| Error::Compression {
            chunk: index,
            reason: format!("worker did not complete: {e}"),
        })??;
        chunks.push(chunk);
    }

    Ok(chunks)
}
