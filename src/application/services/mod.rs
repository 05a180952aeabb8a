pub mod chunk_planner;
mod progress_bus;
pub mod transcript_merger;
mod transcription_worker;

pub use chunk_planner::ChunkPlanError;
pub use progress_bus::{ProgressBus, DEFAULT_CHANNEL_CAPACITY};
pub use transcription_worker::{
    PipelineConfig, PipelineError, TranscriptionMessage, TranscriptionWorker,
};
