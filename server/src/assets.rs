//! Embedded static files and their gzip cache.

use std::collections::HashMap;
use std::io::Write;

use axum::body::Bytes;
use flate2::{write::GzEncoder, Compression};
use parking_lot::RwLock;

/// Cache lifetime advertised for static files, one week.
pub const CACHE_CONTROL: &str = "private, max-age=604800";

/// A file compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// Cache key, unique per asset.
    pub name: &'static str,
    /// `Content-Type` header value.
    pub content_type: &'static str,
    /// File contents.
    pub body: &'static str,
    /// Whether the file is served gzip-encoded to clients that accept it.
    pub compress: bool,
}

/// `/static/styles.css`
pub const STYLESHEET: Asset = Asset {
    name: "styles.css",
    content_type: "text/css; charset=utf-8",
    body: include_str!("../static/styles.css"),
    compress: true,
};

/// `/favicon.ico`, served as SVG.
pub const FAVICON: Asset = Asset {
    name: "favicon.svg",
    content_type: "image/svg+xml",
    body: include_str!("../static/favicon.svg"),
    compress: true,
};

/// `/robots.txt`
pub const ROBOTS: Asset = Asset {
    name: "robots.txt",
    content_type: "text/plain; charset=utf-8",
    body: include_str!("../static/robots.txt"),
    compress: false,
};

/// Gzip-compressed asset bodies, produced on first use.
#[derive(Debug, Default)]
pub struct AssetCache {
    gzipped: RwLock<HashMap<&'static str, Bytes>>,
}

impl AssetCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compressed body of `asset`.
    ///
    /// Compression runs at most once per asset: the write lock is taken
    /// only on a miss and the entry is re-checked under it.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails.
    pub fn gzip(&self, asset: &Asset) -> std::io::Result<Bytes> {
        if let Some(bytes) = self.gzipped.read().get(asset.name) {
            return Ok(bytes.clone());
        }

        let mut cache = self.gzipped.write();
        if let Some(bytes) = cache.get(asset.name) {
            return Ok(bytes.clone());
        }

        let bytes = Bytes::from(deflate(asset.body.as_bytes())?);
        tracing::debug!(
            asset = asset.name,
            original = asset.body.len(),
            compressed = bytes.len(),
            "compressed static asset"
        );
        cache.insert(asset.name, bytes.clone());
        Ok(bytes)
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gzipped.read().len()
    }

    /// Whether nothing has been compressed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gzipped.read().is_empty()
    }
}

/// Compress to a gzip stream.
fn deflate(input: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input)?;
    encoder.finish()
}
