use serde::Serialize;

/// Final result of a job: a complete transcript, a partial transcript with
/// `stopped: true`, or an error message. Never an empty silent success.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionOutcome {
    pub text: String,
    pub chunks: usize,
    pub stopped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl TranscriptionOutcome {
    pub fn completed(text: String, chunks: usize, metadata: Option<serde_json::Value>) -> Self {
        Self {
            text,
            chunks,
            stopped: false,
            error: None,
            metadata,
        }
    }

    pub fn stopped(text: String, chunks: usize, metadata: Option<serde_json::Value>) -> Self {
        Self {
            text,
            chunks,
            stopped: true,
            error: None,
            metadata,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            text: String::new(),
            chunks: 0,
            stopped: false,
            error: Some(message),
            metadata: None,
        }
    }
}
