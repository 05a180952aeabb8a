use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use klaksvik::application::services::{PipelineConfig, ProgressBus, TranscriptionWorker};
use klaksvik::infrastructure::audio::WavSegmentExtractor;
use klaksvik::infrastructure::cancellation::InMemoryCancellationStore;
use klaksvik::infrastructure::jobs::InMemoryJobRepository;
use klaksvik::infrastructure::observability::{init_tracing, TracingConfig};
use klaksvik::infrastructure::resolver::HttpMediaResolver;
use klaksvik::infrastructure::transcription::OpenAiWhisperClient;
use klaksvik::presentation::config::Environment;
use klaksvik::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut settings = Settings::default();

    if let Some(port) = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
    {
        settings.server.port = port;
    }
    if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
        settings.transcription.api_key = api_key;
    }
    if let Ok(base_url) = std::env::var("WHISPER_BASE_URL") {
        settings.transcription.base_url = base_url;
    }
    if let Ok(model) = std::env::var("WHISPER_MODEL") {
        settings.transcription.model = model;
    }

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json || environment == Environment::Prod,
        },
        settings.server.port,
    );

    let source_resolver = Arc::new(HttpMediaResolver::new());
    let segment_extractor = Arc::new(WavSegmentExtractor);
    let transcription_client = Arc::new(OpenAiWhisperClient::new(
        settings.transcription.api_key.clone(),
        Some(settings.transcription.base_url.clone()),
        Some(settings.transcription.model.clone()),
    ));

    let cancellation_store = Arc::new(InMemoryCancellationStore::new(Duration::from_secs(
        settings.cancellation.ttl_minutes * 60,
    )));
    cancellation_store.start_sweeper(Duration::from_secs(
        settings.cancellation.sweep_interval_seconds,
    ));

    let job_repository = Arc::new(InMemoryJobRepository::new(Duration::from_secs(
        settings.jobs.retention_minutes * 60,
    )));
    job_repository.start_sweeper(Duration::from_secs(settings.jobs.sweep_interval_seconds));
    let progress_bus = Arc::new(ProgressBus::new(settings.worker.progress_buffer));

    let (job_sender, job_receiver) = mpsc::channel(settings.worker.queue_capacity);

    let worker = TranscriptionWorker::new(
        job_receiver,
        source_resolver,
        segment_extractor,
        transcription_client,
        cancellation_store.clone(),
        job_repository.clone(),
        progress_bus.clone(),
        PipelineConfig {
            max_segment_bytes: settings.chunking.max_segment_bytes,
            overlap_seconds: settings.chunking.overlap_seconds,
            merge_overlap_word_window: settings.chunking.merge_overlap_word_window,
        },
    );
    tokio::spawn(worker.run());

    let state = AppState {
        job_repository,
        cancellation_store,
        progress_bus,
        job_sender,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
