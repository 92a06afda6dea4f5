//! Ordered concatenation of compressed chunks.

use super::compressor::CompressedChunk;
use crate::{
    bail,
    deployer::{Error, error::Result},
};
use std::io::Write;

/// Writes `chunks` to `writer` back to back in ascending index order.
///
/// `chunks` must already be sorted with indices `0..n`; anything else is
/// rejected before a byte is written for the offending chunk.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// [`Error::ChunkWrite`] names the chunk whose write failed.
pub fn concatenate<W: Write>(chunks: &[CompressedChunk], writer: &mut W) -> Result<u64> {
    let mut written = 0u64;
    for (expected, chunk) in chunks.iter().enumerate() {
        if chunk.index != expected {
            bail!(
                "chunk {} is out of order (expected chunk {})",
                chunk.index,
                expected
            );
        }
        writer
            .write_all(&chunk.data)
            .map_err(|source| Error::ChunkWrite {
                index: chunk.index,
                source,
            })?;
        written += chunk.data.len() as u64;
    }
    writer.flush()?;
    Ok(written)
}
