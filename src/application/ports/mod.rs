mod cancellation_store;
mod job_repository;
mod repository_error;
mod segment_extractor;
mod source_resolver;
mod transcription_client;

pub use cancellation_store::{CancellationStore, CancellationStoreError};
pub use job_repository::JobRepository;
pub use repository_error::RepositoryError;
pub use segment_extractor::{ExtractionError, SegmentExtractor};
pub use source_resolver::{ResolvedMedia, SourceResolutionError, SourceResolver};
pub use transcription_client::{TranscriptionClient, TranscriptionClientError};
