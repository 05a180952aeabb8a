use async_trait::async_trait;

use crate::domain::JobId;

/// Keyed, idempotent "please stop" flag. The worker checks it between
/// suspension points; an external stop request sets it; the worker clears
/// it on every terminal path. Abstracted as a capability so a shared store
/// can back multi-instance deployments.
#[async_trait]
pub trait CancellationStore: Send + Sync {
    /// Idempotent: requesting an already-requested id is a no-op.
    async fn request(&self, job_id: &JobId) -> Result<(), CancellationStoreError>;

    async fn is_requested(&self, job_id: &JobId) -> Result<bool, CancellationStoreError>;

    /// Removes the entry in whatever state it is in.
    async fn clear(&self, job_id: &JobId) -> Result<(), CancellationStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CancellationStoreError {
    #[error("cancellation store unavailable: {0}")]
    Unavailable(String),
}
