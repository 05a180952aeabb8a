mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CancellationSettings, ChunkingSettings, JobSettings, LoggingSettings, ServerSettings,
    Settings, TranscriptionSettings, WorkerSettings,
};
