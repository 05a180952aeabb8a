use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::mpsc;

use crate::domain::{JobId, ProgressEvent, ProgressPhase};

pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Per-job progress fan-out. Emission is fire-and-forget: with no live
/// subscriber events are dropped, and a full channel drops the newest
/// event rather than blocking the pipeline (at-most-once delivery).
/// One producer per job keeps events in phase order.
pub struct ProgressBus {
    capacity: usize,
    channels: Mutex<HashMap<JobId, mpsc::Sender<ProgressEvent>>>,
}

impl ProgressBus {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Attaches a subscriber for one job, replacing any previous one.
    pub fn subscribe(&self, job_id: &JobId) -> mpsc::Receiver<ProgressEvent> {
        let (tx, rx) = mpsc::channel(self.capacity);
        self.lock_channels().insert(job_id.clone(), tx);
        rx
    }

    /// Never blocks and never fails the caller.
    pub fn emit(&self, job_id: &JobId, phase: ProgressPhase, data: serde_json::Value) {
        let event = ProgressEvent::new(job_id.clone(), phase, data);

        let mut channels = self.lock_channels();
        let Some(tx) = channels.get(job_id) else {
            return;
        };

        match tx.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(event)) => {
                tracing::debug!(
                    job_id = %event.job_id,
                    phase = %event.phase,
                    "Progress subscriber lagging, event dropped"
                );
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                channels.remove(job_id);
            }
        }
    }

    /// Detaches the job's subscription; the subscriber drains whatever was
    /// buffered and then sees end-of-stream.
    pub fn close(&self, job_id: &JobId) {
        self.lock_channels().remove(job_id);
    }

    fn lock_channels(&self) -> std::sync::MutexGuard<'_, HashMap<JobId, mpsc::Sender<ProgressEvent>>> {
        match self.channels.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for ProgressBus {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}
