use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc;

use crate::application::ports::{
    CancellationStore, ExtractionError, JobRepository, RepositoryError, ResolvedMedia,
    SegmentExtractor, SourceResolutionError, SourceResolver, TranscriptionClient,
    TranscriptionClientError,
};
use crate::application::services::chunk_planner::{self, ChunkPlanError};
use crate::application::services::{transcript_merger, ProgressBus};
use crate::domain::{
    JobId, JobStatus, MediaSource, ProgressPhase, SegmentResult, TranscriptionOutcome,
};

pub struct TranscriptionMessage {
    pub job_id: JobId,
    pub source: MediaSource,
    pub language: Option<String>,
    pub context_prompt: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub max_segment_bytes: u64,
    pub overlap_seconds: f64,
    pub merge_overlap_word_window: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_segment_bytes: 25_000_000,
            overlap_seconds: 5.0,
            merge_overlap_word_window: transcript_merger::DEFAULT_OVERLAP_WORD_WINDOW,
        }
    }
}

/// Drives one job at a time through
/// `downloading → chunking → transcribing → merging`, with `stopped` and
/// `failed` reachable from any non-terminal state.
///
/// Segments are processed strictly sequentially so only one decoded buffer
/// is resident and the stop check lands at segment boundaries.
/// Cancellation is cooperative: a segment already mid-extraction or
/// mid-transcription runs to completion before the next check. A stop
/// yields a partial transcript from the segments completed so far; any
/// extraction or transcription error fails the whole job with no partial
/// merge.
pub struct TranscriptionWorker {
    receiver: mpsc::Receiver<TranscriptionMessage>,
    source_resolver: Arc<dyn SourceResolver>,
    segment_extractor: Arc<dyn SegmentExtractor>,
    transcription_client: Arc<dyn TranscriptionClient>,
    cancellations: Arc<dyn CancellationStore>,
    job_repository: Arc<dyn JobRepository>,
    progress: Arc<ProgressBus>,
    config: PipelineConfig,
}

impl TranscriptionWorker {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        receiver: mpsc::Receiver<TranscriptionMessage>,
        source_resolver: Arc<dyn SourceResolver>,
        segment_extractor: Arc<dyn SegmentExtractor>,
        transcription_client: Arc<dyn TranscriptionClient>,
        cancellations: Arc<dyn CancellationStore>,
        job_repository: Arc<dyn JobRepository>,
        progress: Arc<ProgressBus>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            receiver,
            source_resolver,
            segment_extractor,
            transcription_client,
            cancellations,
            job_repository,
            progress,
            config,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Transcription worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "transcription_job",
                job_id = %msg.job_id,
                url = %msg.source.url,
            );
            let _guard = span.enter();

            if let Err(e) = self.process_job(msg).await {
                tracing::error!(error = %e, "Transcription job failed");
            }
        }
        tracing::info!("Transcription worker stopped: channel closed");
    }

    async fn process_job(&self, msg: TranscriptionMessage) -> Result<(), PipelineError> {
        let job_id = msg.job_id.clone();

        let result = self.run_pipeline(&msg).await;

        let finish = match &result {
            Ok(outcome) => {
                let status = if outcome.stopped {
                    JobStatus::Stopped
                } else {
                    JobStatus::Completed
                };
                self.job_repository
                    .set_outcome(&job_id, outcome.clone())
                    .await
                    .map_err(PipelineError::Repository)
                    .and(self.update_status(&job_id, status, None).await)
            }
            Err(e) => {
                let message = e.to_string();
                self.progress
                    .emit(&job_id, ProgressPhase::Error, json!({ "message": message }));
                self.job_repository
                    .set_outcome(&job_id, TranscriptionOutcome::failed(message.clone()))
                    .await
                    .map_err(PipelineError::Repository)
                    .and(
                        self.update_status(&job_id, JobStatus::Failed, Some(&message))
                            .await,
                    )
            }
        };

        // Terminal cleanup runs on every path so flags and subscriptions
        // cannot outlive the job.
        if let Err(e) = self.cancellations.clear(&job_id).await {
            tracing::warn!(error = %e, "Failed to clear cancellation flag");
        }
        self.progress.close(&job_id);

        result.map(|_| ()).and(finish)
    }

    async fn run_pipeline(
        &self,
        msg: &TranscriptionMessage,
    ) -> Result<TranscriptionOutcome, PipelineError> {
        let job_id = &msg.job_id;

        self.update_status(job_id, JobStatus::Downloading, None)
            .await?;
        self.progress.emit(
            job_id,
            ProgressPhase::DownloadStart,
            json!({ "url": msg.source.url, "source": msg.source.kind.as_str() }),
        );

        let media = self
            .source_resolver
            .resolve(&msg.source)
            .await
            .map_err(PipelineError::SourceResolution)?;

        let ResolvedMedia {
            samples,
            size_bytes,
            duration_seconds,
            metadata,
        } = media;

        self.progress.emit(
            job_id,
            ProgressPhase::DownloadComplete,
            json!({ "size_bytes": size_bytes }),
        );
        self.progress.emit(
            job_id,
            ProgressPhase::Metadata,
            json!({
                "duration_seconds": duration_seconds,
                "size_bytes": size_bytes,
                "source": metadata,
            }),
        );

        // First suspension point after the download.
        if self.stop_requested(job_id).await {
            tracing::info!("Stop requested before chunking, no segments processed");
            self.progress.emit(
                job_id,
                ProgressPhase::TranscriptionStopped,
                json!({ "text": "", "chunks": 0, "stopped": true }),
            );
            return Ok(TranscriptionOutcome::stopped(
                String::new(),
                0,
                Some(metadata),
            ));
        }

        self.update_status(job_id, JobStatus::Chunking, None).await?;
        let plan = chunk_planner::plan(
            size_bytes,
            duration_seconds,
            self.config.max_segment_bytes,
            self.config.overlap_seconds,
        )
        .map_err(PipelineError::ChunkPlan)?;

        tracing::debug!(segments = plan.len(), "Chunk plan computed");
        self.progress.emit(
            job_id,
            ProgressPhase::ChunkingStart,
            json!({ "segments": plan.len() }),
        );

        self.update_status(job_id, JobStatus::Transcribing, None)
            .await?;
        self.progress.emit(
            job_id,
            ProgressPhase::TranscribeStart,
            json!({ "segments": plan.len() }),
        );

        let mut results: Vec<SegmentResult> = Vec::with_capacity(plan.len());
        let mut stopped = false;

        for window in &plan {
            if self.stop_requested(job_id).await {
                tracing::info!(
                    completed = results.len(),
                    total = plan.len(),
                    "Stop requested, merging completed segments"
                );
                stopped = true;
                break;
            }

            let segment = self
                .segment_extractor
                .extract(&samples, window.start_seconds, window.duration_seconds)
                .map_err(PipelineError::Extraction)?;

            self.progress.emit(
                job_id,
                ProgressPhase::ChunkReady,
                json!({
                    "index": window.index,
                    "start_seconds": window.start_seconds,
                    "duration_seconds": window.duration_seconds,
                }),
            );

            let text = self
                .transcription_client
                .transcribe(
                    &segment,
                    msg.language.as_deref(),
                    msg.context_prompt.as_deref(),
                )
                .await
                .map_err(PipelineError::Transcription)?;

            results.push(SegmentResult::new(window.index, text));

            let partial =
                transcript_merger::merge(&results, self.config.merge_overlap_word_window);
            self.progress.emit(
                job_id,
                ProgressPhase::TranscribeChunkComplete,
                json!({
                    "index": window.index,
                    "completed": results.len(),
                    "total": plan.len(),
                    "partial_text": partial,
                }),
            );
        }

        // The sample buffer is only needed for extraction.
        drop(samples);

        self.update_status(job_id, JobStatus::Merging, None).await?;
        let text = transcript_merger::merge(&results, self.config.merge_overlap_word_window);
        let chunks = results.len();

        let outcome = if stopped {
            TranscriptionOutcome::stopped(text, chunks, Some(metadata))
        } else {
            TranscriptionOutcome::completed(text, chunks, Some(metadata))
        };

        let terminal_phase = if stopped {
            ProgressPhase::TranscriptionStopped
        } else {
            ProgressPhase::TranscribeComplete
        };
        self.progress.emit(
            job_id,
            terminal_phase,
            json!({
                "text": outcome.text,
                "chunks": outcome.chunks,
                "stopped": outcome.stopped,
            }),
        );

        tracing::info!(
            chunks = outcome.chunks,
            stopped = outcome.stopped,
            chars = outcome.text.len(),
            "Transcription finished"
        );

        Ok(outcome)
    }

    /// Cooperative stop check. A store failure is logged and treated as
    /// "not requested" so an unavailable store cannot halt live jobs.
    async fn stop_requested(&self, job_id: &JobId) -> bool {
        match self.cancellations.is_requested(job_id).await {
            Ok(requested) => requested,
            Err(e) => {
                tracing::warn!(error = %e, "Cancellation lookup failed, continuing");
                false
            }
        }
    }

    async fn update_status(
        &self,
        job_id: &JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), PipelineError> {
        tracing::debug!(status = %status, "Job status transition");
        self.job_repository
            .update_status(job_id, status, error_message)
            .await
            .map_err(PipelineError::Repository)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("source resolution: {0}")]
    SourceResolution(SourceResolutionError),
    #[error("chunk planning: {0}")]
    ChunkPlan(ChunkPlanError),
    #[error("segment extraction: {0}")]
    Extraction(ExtractionError),
    #[error("transcription: {0}")]
    Transcription(TranscriptionClientError),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}
