use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{ResolvedMedia, SourceResolutionError, SourceResolver};
use crate::domain::{MediaSource, SourceKind};
use crate::infrastructure::audio::decode_to_canonical_pcm;

/// Resolves direct media URLs: fetch the bytes, decode to canonical PCM.
/// Platform videos need an external extractor (yt-dlp and friends) and are
/// rejected here; deployments with one plug in their own `SourceResolver`.
///
/// The body is buffered in a single read, so no `download_progress`
/// events are reported; subscribers see `download_start` followed by
/// `download_complete`. A streaming resolver that reports byte counts
/// would emit that phase itself.
pub struct HttpMediaResolver {
    client: reqwest::Client,
}

impl HttpMediaResolver {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpMediaResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceResolver for HttpMediaResolver {
    async fn resolve(&self, source: &MediaSource) -> Result<ResolvedMedia, SourceResolutionError> {
        if source.kind == SourceKind::PlatformVideo {
            return Err(SourceResolutionError::UnsupportedSource(
                "platform video resolution requires an external extractor".to_string(),
            ));
        }

        tracing::debug!(url = %source.url, "Downloading direct media");

        let response = self
            .client
            .get(&source.url)
            .send()
            .await
            .map_err(|e| SourceResolutionError::DownloadFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceResolutionError::DownloadFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SourceResolutionError::DownloadFailed(format!("body: {}", e)))?;
        let size_bytes = bytes.len() as u64;

        // Decoding is CPU-bound; keep it off the async executor.
        let decoded = tokio::task::spawn_blocking(move || decode_to_canonical_pcm(&bytes))
            .await
            .map_err(|e| SourceResolutionError::DecodingFailed(format!("decode task: {}", e)))??;

        let duration_seconds = decoded.duration_seconds();

        tracing::info!(
            size_bytes,
            duration_seconds,
            "Direct media resolved"
        );

        Ok(ResolvedMedia {
            samples: decoded.samples,
            size_bytes,
            duration_seconds,
            metadata: json!({
                "url": source.url,
                "content_type": content_type,
            }),
        })
    }
}
