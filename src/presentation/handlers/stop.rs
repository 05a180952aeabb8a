use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::JobId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StopResponse {
    pub accepted: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Registration is write-only and idempotent: the response is
/// `accepted: true` even when the id does not (yet) match a live job; the
/// worker notices the flag at its next suspension point, and the TTL sweep
/// collects flags that never match.
#[tracing::instrument(skip(state))]
pub async fn stop_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let id = JobId::from_token(job_id);

    match state.cancellation_store.request(&id).await {
        Ok(()) => {
            tracing::info!(job_id = %id, "Stop requested");
            (StatusCode::OK, Json(StopResponse { accepted: true })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to register stop request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to register stop: {}", e),
                }),
            )
                .into_response()
        }
    }
}
