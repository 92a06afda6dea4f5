//! Fixed-count chunking of a serialized archive.

/// Half-open byte range `[start, end)` assigned to one compression worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkRange {
    /// Position of the chunk in the output stream.
    pub index: usize,
    /// First byte of the range.
    pub start: usize,
    /// One past the last byte of the range.
    pub end: usize,
}

impl ChunkRange {
    /// Number of bytes covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for trailing ranges that fall past the end of the input.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Splits `len` bytes into exactly `workers` contiguous ranges.
///
/// The nominal chunk size is `len / workers + 1`, so the ranges always cover the
/// input even though `workers * chunk_size > len`. Both ends are clamped to
/// `len`; trailing chunks may therefore be empty, and for `len == 0` every chunk
/// is empty. Returns no ranges when `workers` is zero.
pub fn split(len: usize, workers: usize) -> Vec<ChunkRange> {
    if workers == 0 {
        return Vec::new();
    }

    let chunk_size = len / workers + 1;
    (0..workers)
        .map(|index| {
            let start = index.saturating_mul(chunk_size).min(len);
            let end = start.saturating_add(chunk_size).min(len);
            ChunkRange { index, start, end }
        })
        .collect()
}
