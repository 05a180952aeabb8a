use std::fmt;
use std::time::Instant;

use serde::Serialize;

use super::JobId;

/// Pipeline phases as they appear on the wire. Names are stable
/// identifiers consumed by UIs; do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPhase {
    DownloadStart,
    DownloadProgress,
    DownloadComplete,
    Metadata,
    ChunkingStart,
    ChunkReady,
    TranscribeStart,
    TranscribeChunkComplete,
    TranscribeComplete,
    TranscriptionStopped,
    Error,
}

impl ProgressPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressPhase::DownloadStart => "download_start",
            ProgressPhase::DownloadProgress => "download_progress",
            ProgressPhase::DownloadComplete => "download_complete",
            ProgressPhase::Metadata => "metadata",
            ProgressPhase::ChunkingStart => "chunking_start",
            ProgressPhase::ChunkReady => "chunk_ready",
            ProgressPhase::TranscribeStart => "transcribe_start",
            ProgressPhase::TranscribeChunkComplete => "transcribe_chunk_complete",
            ProgressPhase::TranscribeComplete => "transcribe_complete",
            ProgressPhase::TranscriptionStopped => "transcription_stopped",
            ProgressPhase::Error => "error",
        }
    }
}

impl fmt::Display for ProgressPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable record of one phase transition. Events for a given job are
/// emitted in phase order and never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent {
    // Camel-case on the wire; consumers key on "jobId".
    #[serde(rename = "jobId")]
    pub job_id: JobId,
    pub phase: ProgressPhase,
    pub data: serde_json::Value,
    #[serde(skip_serializing)]
    pub emitted_at: Instant,
}

impl ProgressEvent {
    pub fn new(job_id: JobId, phase: ProgressPhase, data: serde_json::Value) -> Self {
        Self {
            job_id,
            phase,
            data,
            emitted_at: Instant::now(),
        }
    }
}
