use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionClient, TranscriptionClientError};

/// OpenAI-compatible `/audio/transcriptions` client. Works against the
/// hosted API and against self-hosted servers exposing the same shape.
pub struct OpenAiWhisperClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperClient {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        }
    }

    fn classify(status: reqwest::StatusCode, body: String) -> TranscriptionClientError {
        match status.as_u16() {
            429 => TranscriptionClientError::RateLimited(body),
            400 | 415 | 422 => TranscriptionClientError::InvalidAudio(body),
            401 | 403 => TranscriptionClientError::Unauthorized(body),
            _ => TranscriptionClientError::Unknown(format!("status {}: {}", status, body)),
        }
    }
}

#[async_trait]
impl TranscriptionClient for OpenAiWhisperClient {
    async fn transcribe(
        &self,
        segment: &[u8],
        language: Option<&str>,
        context_prompt: Option<&str>,
    ) -> Result<String, TranscriptionClientError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(segment.to_vec())
            .file_name("segment.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionClientError::InvalidAudio(format!("mime: {}", e)))?;

        let mut form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);
        if let Some(language) = language {
            form = form.text("language", language.to_string());
        }
        if let Some(prompt) = context_prompt {
            form = form.text("prompt", prompt.to_string());
        }

        tracing::debug!(
            model = %self.model,
            bytes = segment.len(),
            "Sending segment to Whisper API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionClientError::Unknown(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(Self::classify(status, body));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionClientError::Unknown(format!("body: {}", e)))?;

        tracing::debug!(chars = transcript.len(), "Segment transcribed");

        Ok(transcript.trim().to_string())
    }
}
