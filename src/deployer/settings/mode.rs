//! Compression mode and artifact naming policy.

use std::fmt;

/// Container and compression format of the produced artifact.
///
/// # Configuration
///
/// ```toml
/// mode = "chunked-brotli"
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CompressionMode {
    /// Uncompressed tar (`.tar`)
    Tar,
    /// Deflate-compressed zip (`.zip`)
    Zip,
    /// Tar wrapped in a single gzip stream (`.tar.gz`)
    #[default]
    Gzip,
    /// Tar wrapped in a single Brotli stream (`.tar.br`)
    Brotli,
    /// Tar split into chunks, each compressed as its own Brotli stream
    /// and concatenated (`.shart`)
    ChunkedBrotli,
}

impl CompressionMode {
    /// File extension of artifacts produced in this mode, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tar => ".tar",
            Self::Zip => ".zip",
            Self::Gzip => ".tar.gz",
            Self::Brotli => ".tar.br",
            Self::ChunkedBrotli => ".shart",
        }
    }

    /// Default compression level. Gzip level 6 and Brotli quality 6 alike.
    pub fn default_level(self) -> u32 {
        6
    }

    /// Highest level accepted by this mode.
    pub fn max_level(self) -> u32 {
        match self {
            Self::Tar | Self::Zip | Self::Gzip => 9,
            Self::Brotli | Self::ChunkedBrotli => 11,
        }
    }

    /// True for modes that fan out over the chunk workers.
    pub fn is_chunked(self) -> bool {
        matches!(self, Self::ChunkedBrotli)
    }
}

impl fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tar => "tar",
            Self::Zip => "zip",
            Self::Gzip => "gzip",
            Self::Brotli => "brotli",
            Self::ChunkedBrotli => "chunked-brotli",
        };
        f.write_str(name)
    }
}

/// How the artifact file is named.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NamingPolicy {
    /// `{product}Setup{ext}`
    #[default]
    Fixed,
    /// `{timestamp}-{hash}{ext}`, derived from the clock and the artifact bytes
    ContentAddressed,
}

impl fmt::Display for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("fixed"),
            Self::ContentAddressed => f.write_str("content-addressed"),
        }
    }
}
