use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::application::ports::{CancellationStore, CancellationStoreError};
use crate::domain::JobId;

pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Single-instance cancellation store: a map of job id to request time.
/// The TTL sweep evicts requests that never matched a live job, e.g. a
/// stop racing a job that already finished.
pub struct InMemoryCancellationStore {
    entries: Arc<RwLock<HashMap<JobId, Instant>>>,
    ttl: Duration,
}

impl InMemoryCancellationStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Spawns the background sweep. The handle is returned so callers can
    /// abort it on shutdown; dropping it leaves the sweep running.
    pub fn start_sweeper(&self, interval: Duration) -> JoinHandle<()> {
        let entries = Arc::clone(&self.entries);
        let ttl = self.ttl;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;

                let Some(cutoff) = Instant::now().checked_sub(ttl) else {
                    continue;
                };

                let mut map = entries.write().await;
                let before = map.len();
                map.retain(|_, requested_at| *requested_at > cutoff);
                let evicted = before - map.len();
                drop(map);

                if evicted > 0 {
                    tracing::debug!(evicted, "Swept expired cancellation entries");
                }
            }
        })
    }
}

impl Default for InMemoryCancellationStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

#[async_trait]
impl CancellationStore for InMemoryCancellationStore {
    async fn request(&self, job_id: &JobId) -> Result<(), CancellationStoreError> {
        // Keep the original request time so the TTL cannot be extended by
        // repeating the request.
        self.entries
            .write()
            .await
            .entry(job_id.clone())
            .or_insert_with(Instant::now);
        Ok(())
    }

    async fn is_requested(&self, job_id: &JobId) -> Result<bool, CancellationStoreError> {
        Ok(self.entries.read().await.contains_key(job_id))
    }

    async fn clear(&self, job_id: &JobId) -> Result<(), CancellationStoreError> {
        self.entries.write().await.remove(job_id);
        Ok(())
    }
}
