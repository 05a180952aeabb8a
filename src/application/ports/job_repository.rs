use async_trait::async_trait;

use crate::domain::{JobId, JobStatus, TranscriptionJob, TranscriptionOutcome};

use super::RepositoryError;

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &TranscriptionJob) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: &JobId) -> Result<Option<TranscriptionJob>, RepositoryError>;

    async fn update_status(
        &self,
        id: &JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError>;

    async fn set_outcome(
        &self,
        id: &JobId,
        outcome: TranscriptionOutcome,
    ) -> Result<(), RepositoryError>;
}
