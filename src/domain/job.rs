use chrono::{DateTime, Utc};

use super::{JobId, JobStatus, MediaSource, TranscriptionOutcome};

/// One request to transcribe one source. Mutated only by the worker that
/// owns the job; callers observe it through the job repository.
#[derive(Debug, Clone)]
pub struct TranscriptionJob {
    pub id: JobId,
    pub source: MediaSource,
    pub language: Option<String>,
    pub context_prompt: Option<String>,
    pub status: JobStatus,
    pub error_message: Option<String>,
    pub outcome: Option<TranscriptionOutcome>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TranscriptionJob {
    pub fn new(
        id: JobId,
        source: MediaSource,
        language: Option<String>,
        context_prompt: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            source,
            language,
            context_prompt,
            status: JobStatus::Pending,
            error_message: None,
            outcome: None,
            created_at: now,
            updated_at: now,
        }
    }
}
