use std::convert::Infallible;

use axum::extract::{Path, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};

use crate::domain::JobId;
use crate::presentation::state::AppState;

/// Streams progress events for one job as server-sent events. One JSON
/// object per event; delivery is at-most-once, so a late subscriber only
/// sees events from the moment it attached.
#[tracing::instrument(skip(state))]
pub async fn job_events_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let id = JobId::from_token(job_id);
    let receiver = state.progress_bus.subscribe(&id);

    let stream = ReceiverStream::new(receiver).map(|event| {
        let sse_event = Event::default().event(event.phase.as_str());
        Ok(match serde_json::to_string(&event) {
            Ok(json) => sse_event.data(json),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize progress event");
                sse_event.data("{}")
            }
        })
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
