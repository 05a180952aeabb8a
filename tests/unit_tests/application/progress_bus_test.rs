use klaksvik::application::services::ProgressBus;
use klaksvik::domain::{JobId, ProgressPhase};
use serde_json::json;

#[tokio::test]
async fn given_no_subscriber_when_emitting_then_event_is_dropped_silently() {
    let bus = ProgressBus::new(4);
    let job_id = JobId::new();

    // Must not block or panic.
    bus.emit(&job_id, ProgressPhase::DownloadStart, json!({}));
}

#[tokio::test]
async fn given_subscriber_when_emitting_then_events_arrive_in_order() {
    let bus = ProgressBus::new(8);
    let job_id = JobId::new();
    let mut rx = bus.subscribe(&job_id);

    bus.emit(&job_id, ProgressPhase::DownloadStart, json!({"n": 1}));
    bus.emit(&job_id, ProgressPhase::DownloadComplete, json!({"n": 2}));
    bus.emit(&job_id, ProgressPhase::ChunkingStart, json!({"n": 3}));

    assert_eq!(rx.recv().await.unwrap().phase, ProgressPhase::DownloadStart);
    assert_eq!(
        rx.recv().await.unwrap().phase,
        ProgressPhase::DownloadComplete
    );
    assert_eq!(rx.recv().await.unwrap().phase, ProgressPhase::ChunkingStart);
}

#[tokio::test]
async fn given_full_channel_when_emitting_then_newest_event_is_dropped() {
    let bus = ProgressBus::new(2);
    let job_id = JobId::new();
    let mut rx = bus.subscribe(&job_id);

    bus.emit(&job_id, ProgressPhase::DownloadStart, json!({}));
    bus.emit(&job_id, ProgressPhase::DownloadComplete, json!({}));
    bus.emit(&job_id, ProgressPhase::ChunkingStart, json!({}));

    assert_eq!(rx.recv().await.unwrap().phase, ProgressPhase::DownloadStart);
    assert_eq!(
        rx.recv().await.unwrap().phase,
        ProgressPhase::DownloadComplete
    );
    assert!(rx.try_recv().is_err(), "third event should have been dropped");
}

#[tokio::test]
async fn given_closed_job_when_receiving_then_stream_ends_after_buffered_events() {
    let bus = ProgressBus::new(4);
    let job_id = JobId::new();
    let mut rx = bus.subscribe(&job_id);

    bus.emit(&job_id, ProgressPhase::DownloadStart, json!({}));
    bus.close(&job_id);

    assert_eq!(rx.recv().await.unwrap().phase, ProgressPhase::DownloadStart);
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn given_two_jobs_when_emitting_then_events_do_not_cross() {
    let bus = ProgressBus::new(4);
    let job_a = JobId::new();
    let job_b = JobId::new();
    let mut rx_a = bus.subscribe(&job_a);
    let mut rx_b = bus.subscribe(&job_b);

    bus.emit(&job_a, ProgressPhase::DownloadStart, json!({}));
    bus.emit(&job_b, ProgressPhase::Error, json!({}));

    let event_a = rx_a.recv().await.unwrap();
    let event_b = rx_b.recv().await.unwrap();
    assert_eq!(event_a.job_id, job_a);
    assert_eq!(event_a.phase, ProgressPhase::DownloadStart);
    assert_eq!(event_b.job_id, job_b);
    assert_eq!(event_b.phase, ProgressPhase::Error);
}
