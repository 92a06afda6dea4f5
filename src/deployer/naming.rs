//! Artifact naming.
//!
//! Two policies are supported. Fixed naming always produces
//! `{product}Setup{ext}`. Content-addressed naming produces
//! `{timestamp}-{hash}{ext}`: both parts are base32hex (lowercase, unpadded), the
//! timestamp is the big-endian Unix time with leading zero bytes removed and the
//! hash is the first [`HASH_LEN`] bytes of the SHA-256 of the artifact. Names of
//! the same length sort by creation time.

use super::settings::{CompressionMode, NamingPolicy};
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Alphabet for encoded name parts. The hex variant keeps byte order.
const BASE32: base32::Alphabet = base32::Alphabet::Rfc4648HexLower { padding: false };

/// Number of digest bytes kept in content-addressed names.
pub const HASH_LEN: usize = 4;

/// Derives artifact file names for one product and compression mode.
#[derive(Clone, Debug)]
pub struct ArtifactNamer {
    policy: NamingPolicy,
    product_name: String,
    extension: &'static str,
}

impl ArtifactNamer {
    /// Creates a namer.
    pub fn new(policy: NamingPolicy, product_name: impl Into<String>, mode: CompressionMode) -> Self {
        Self {
            policy,
            product_name: product_name.into(),
            extension: mode.extension(),
        }
    }

    /// Returns the file name for `artifact`, using `now` for content-addressed names.
    pub fn name(&self, artifact: &[u8], now: DateTime<Utc>) -> String {
        match self.policy {
            NamingPolicy::Fixed => format!("{}Setup{}", self.product_name, self.extension),
            NamingPolicy::ContentAddressed => format!(
                "{}-{}{}",
                encode_timestamp(now.timestamp()),
                encode_hash(artifact),
                self.extension
            ),
        }
    }
}

/// Encodes a Unix timestamp in seconds.
///
/// Negative timestamps are treated as zero; zero keeps one byte so the
/// encoding is never empty.
pub fn encode_timestamp(secs: i64) -> String {
    let bytes = u64::try_from(secs).unwrap_or(0).to_be_bytes();
    let first = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len() - 1);
    base32::encode(BASE32, &bytes[first..])
}

/// Encodes the truncated SHA-256 digest of `data`.
pub fn encode_hash(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    base32::encode(BASE32, &digest[..HASH_LEN])
}
