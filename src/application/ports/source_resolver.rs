use async_trait::async_trait;

use crate::domain::MediaSource;

/// Canonical decoded audio: 16 kHz, mono, f32 samples. `size_bytes` and
/// `duration_seconds` describe the source media as fetched; the chunk
/// planner needs only those two numbers.
pub struct ResolvedMedia {
    pub samples: Vec<f32>,
    pub size_bytes: u64,
    pub duration_seconds: f64,
    pub metadata: serde_json::Value,
}

#[async_trait]
pub trait SourceResolver: Send + Sync {
    async fn resolve(&self, source: &MediaSource) -> Result<ResolvedMedia, SourceResolutionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceResolutionError {
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("unsupported source: {0}")]
    UnsupportedSource(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
}
