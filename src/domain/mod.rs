mod job;
mod job_id;
mod job_status;
mod media_source;
mod outcome;
mod progress;
mod segment_plan;
mod segment_result;

pub use job::TranscriptionJob;
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use media_source::{MediaSource, SourceKind};
pub use outcome::TranscriptionOutcome;
pub use progress::{ProgressEvent, ProgressPhase};
pub use segment_plan::AudioSegmentPlan;
pub use segment_result::SegmentResult;
