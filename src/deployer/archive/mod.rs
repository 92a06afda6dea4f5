//! Archive production: serialization, chunking, compression and concatenation.
//!
//! Data flows leaf to root:
//!
//! 1. [`serializer`] turns the staging tree into one tar byte sequence
//! 2. [`splitter`] cuts it into a fixed number of contiguous ranges
//! 3. [`compressor`] compresses every range on its own worker
//! 4. [`concat`] writes the compressed ranges back to back in order
//!
//! [`zip_archive`] is an alternative container that skips the tar steps.

pub mod compressor;
pub mod concat;
pub mod serializer;
pub mod splitter;
pub mod zip_archive;

pub use compressor::{BROTLI_LGWIN, ChunkCodec, ChunkEncoder, CompressedChunk, compress_chunks};
pub use concat::concatenate;
pub use serializer::{serialize_directory, serialize_directory_blocking};
pub use splitter::{ChunkRange, split};
pub use zip_archive::{zip_directory, zip_directory_blocking};
