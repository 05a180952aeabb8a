pub mod audio;
pub mod cancellation;
pub mod jobs;
pub mod observability;
pub mod resolver;
pub mod transcription;
