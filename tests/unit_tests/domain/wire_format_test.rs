use klaksvik::domain::{JobId, ProgressEvent, ProgressPhase, SourceKind, TranscriptionOutcome};
use serde_json::{json, Value};

#[test]
fn given_progress_event_when_serializing_then_envelope_uses_camel_case_job_id() {
    let event = ProgressEvent::new(
        JobId::from_token("job-1"),
        ProgressPhase::TranscribeChunkComplete,
        json!({ "index": 2 }),
    );

    let value = serde_json::to_value(&event).unwrap();

    assert_eq!(value["jobId"], "job-1");
    assert!(value.get("job_id").is_none());
    assert_eq!(value["phase"], "transcribe_chunk_complete");
    assert_eq!(value["data"]["index"], 2);
    assert!(value.get("emitted_at").is_none());
}

#[test]
fn given_every_phase_when_serializing_then_name_matches_as_str() {
    let phases = [
        ProgressPhase::DownloadStart,
        ProgressPhase::DownloadProgress,
        ProgressPhase::DownloadComplete,
        ProgressPhase::Metadata,
        ProgressPhase::ChunkingStart,
        ProgressPhase::ChunkReady,
        ProgressPhase::TranscribeStart,
        ProgressPhase::TranscribeChunkComplete,
        ProgressPhase::TranscribeComplete,
        ProgressPhase::TranscriptionStopped,
        ProgressPhase::Error,
    ];

    for phase in phases {
        assert_eq!(serde_json::to_value(phase).unwrap(), phase.as_str());
    }
}

#[test]
fn given_completed_outcome_when_serializing_then_error_field_is_absent() {
    let outcome = TranscriptionOutcome::completed(
        "full transcript".to_string(),
        3,
        Some(json!({ "duration_seconds": 3600.0 })),
    );

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["text"], "full transcript");
    assert_eq!(value["chunks"], 3);
    assert_eq!(value["stopped"], false);
    assert!(value.get("error").is_none());
    assert_eq!(value["metadata"]["duration_seconds"], 3600.0);
}

#[test]
fn given_failed_outcome_when_serializing_then_error_is_present_and_metadata_absent() {
    let outcome = TranscriptionOutcome::failed("transcription: rate limited".to_string());

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["text"], "");
    assert_eq!(value["chunks"], 0);
    assert_eq!(value["stopped"], false);
    assert_eq!(value["error"], "transcription: rate limited");
    assert!(value.get("metadata").is_none());
}

#[test]
fn given_stopped_outcome_when_serializing_then_stopped_flag_is_set() {
    let outcome = TranscriptionOutcome::stopped("partial".to_string(), 2, None);

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["stopped"], true);
    assert_eq!(value["chunks"], 2);
    assert!(value.get("error").is_none());
}

#[test]
fn given_source_kind_strings_when_deserializing_then_snake_case_names_parse() {
    assert_eq!(
        serde_json::from_value::<SourceKind>(Value::String("platform_video".into())).unwrap(),
        SourceKind::PlatformVideo
    );
    assert_eq!(
        serde_json::from_value::<SourceKind>(Value::String("direct_media".into())).unwrap(),
        SourceKind::DirectMedia
    );
    assert!(serde_json::from_value::<SourceKind>(Value::String("youtube".into())).is_err());
}
