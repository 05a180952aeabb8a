/// Cuts one planned window out of the canonical sample buffer and encodes
/// it in a format the transcription client accepts. Extraction failures
/// are typed apart from transcription-client failures.
pub trait SegmentExtractor: Send + Sync {
    fn extract(
        &self,
        samples: &[f32],
        start_seconds: f64,
        duration_seconds: f64,
    ) -> Result<Vec<u8>, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("segment window out of range: {0}")]
    OutOfRange(String),
    #[error("segment encoding failed: {0}")]
    EncodingFailed(String),
}
