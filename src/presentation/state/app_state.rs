use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{CancellationStore, JobRepository};
use crate::application::services::{ProgressBus, TranscriptionMessage};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub job_repository: Arc<dyn JobRepository>,
    pub cancellation_store: Arc<dyn CancellationStore>,
    pub progress_bus: Arc<ProgressBus>,
    pub job_sender: mpsc::Sender<TranscriptionMessage>,
    pub settings: Settings,
}
