use async_trait::async_trait;

/// Black-box remote speech-to-text call. Possibly slow, possibly failing;
/// the worker imposes no timeout of its own, so callers wanting a deadline
/// wrap the implementation.
#[async_trait]
pub trait TranscriptionClient: Send + Sync {
    async fn transcribe(
        &self,
        segment: &[u8],
        language: Option<&str>,
        context_prompt: Option<&str>,
    ) -> Result<String, TranscriptionClientError>;
}

/// Error kinds are reported but not differentially handled: every kind is
/// fatal to the current job, and the worker never retries.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionClientError {
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("invalid audio: {0}")]
    InvalidAudio(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("transcription failed: {0}")]
    Unknown(String),
}
