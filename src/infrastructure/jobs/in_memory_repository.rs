use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::application::ports::{JobRepository, RepositoryError};
use crate::domain::{JobId, JobStatus, TranscriptionJob, TranscriptionOutcome};

pub const DEFAULT_RETENTION: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Ephemeral job state: jobs do not survive a process restart. Finished
/// jobs stay queryable for the retention window and are then swept, so
/// the map does not grow for the lifetime of the process. Live jobs are
/// never evicted.
pub struct InMemoryJobRepository {
    jobs: Arc<RwLock<HashMap<JobId, TranscriptionJob>>>,
    retention: chrono::Duration,
}

impl InMemoryJobRepository {
    pub fn new(retention: Duration) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            retention: chrono::Duration::from_std(retention)
                .unwrap_or(chrono::Duration::MAX),
        }
    }

    /// Spawns the background sweep over terminal jobs, measured from
    /// their last update. The handle is returned so callers can abort it
    /// on shutdown; dropping it leaves the sweep running.
    pub fn start_sweeper(&self, interval: Duration) -> JoinHandle<()> {
        let jobs = Arc::clone(&self.jobs);
        let retention = self.retention;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;

                let Some(cutoff) = Utc::now().checked_sub_signed(retention) else {
                    continue;
                };

                let mut map = jobs.write().await;
                let before = map.len();
                map.retain(|_, job| !job.status.is_terminal() || job.updated_at > cutoff);
                let evicted = before - map.len();
                drop(map);

                if evicted > 0 {
                    tracing::debug!(evicted, "Swept finished jobs past retention");
                }
            }
        })
    }
}

impl Default for InMemoryJobRepository {
    fn default() -> Self {
        Self::new(DEFAULT_RETENTION)
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn create(&self, job: &TranscriptionJob) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(RepositoryError::Conflict(job.id.to_string()));
        }
        jobs.insert(job.id.clone(), job.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &JobId) -> Result<Option<TranscriptionJob>, RepositoryError> {
        Ok(self.jobs.read().await.get(id).cloned())
    }

    async fn update_status(
        &self,
        id: &JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        job.status = status;
        job.error_message = error_message.map(String::from);
        job.updated_at = Utc::now();
        Ok(())
    }

    async fn set_outcome(
        &self,
        id: &JobId,
        outcome: TranscriptionOutcome,
    ) -> Result<(), RepositoryError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        job.outcome = Some(outcome);
        job.updated_at = Utc::now();
        Ok(())
    }
}
