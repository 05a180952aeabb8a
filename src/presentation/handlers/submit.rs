use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::RepositoryError;
use crate::application::services::TranscriptionMessage;
use crate::domain::{JobId, MediaSource, SourceKind, TranscriptionJob};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRequest {
    /// Optional caller-supplied token; generated when absent. Tokens of
    /// finished jobs must not be reused.
    pub job_id: Option<String>,
    pub url: String,
    pub source: SourceKind,
    pub language: Option<String>,
    pub context_prompt: Option<String>,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub job_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> impl IntoResponse {
    if request.url.trim().is_empty() {
        tracing::warn!("Submit request with empty url");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "url must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    let job_id = match request.job_id {
        Some(token) if !token.trim().is_empty() => JobId::from_token(token),
        _ => JobId::new(),
    };

    let source = MediaSource::new(request.url, request.source);
    let job = TranscriptionJob::new(
        job_id.clone(),
        source.clone(),
        request.language.clone(),
        request.context_prompt.clone(),
    );

    if let Err(e) = state.job_repository.create(&job).await {
        let (status, error) = match e {
            RepositoryError::Conflict(id) => (
                StatusCode::CONFLICT,
                format!("Job id already in use: {}", id),
            ),
            other => {
                tracing::error!(error = %other, "Failed to create job record");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to create job: {}", other),
                )
            }
        };
        return (status, Json(ErrorResponse { error })).into_response();
    }

    let msg = TranscriptionMessage {
        job_id: job_id.clone(),
        source,
        language: request.language,
        context_prompt: request.context_prompt,
    };

    if let Err(e) = state.job_sender.send(msg).await {
        tracing::error!(error = %e, "Failed to enqueue transcription job");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: "Transcription queue full or worker unavailable".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(job_id = %job_id, "Transcription job enqueued");

    (
        StatusCode::ACCEPTED,
        Json(SubmitResponse {
            job_id: job_id.to_string(),
            message: "Transcription started".to_string(),
        }),
    )
        .into_response()
}
