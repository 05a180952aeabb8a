use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub transcription: TranscriptionSettings,
    #[serde(default)]
    pub chunking: ChunkingSettings,
    #[serde(default)]
    pub cancellation: CancellationSettings,
    #[serde(default)]
    pub jobs: JobSettings,
    #[serde(default)]
    pub worker: WorkerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "whisper-1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingSettings {
    pub max_segment_bytes: u64,
    pub overlap_seconds: f64,
    pub merge_overlap_word_window: usize,
}

impl Default for ChunkingSettings {
    fn default() -> Self {
        Self {
            max_segment_bytes: 25_000_000,
            overlap_seconds: 5.0,
            merge_overlap_word_window: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancellationSettings {
    pub ttl_minutes: u64,
    pub sweep_interval_seconds: u64,
}

impl Default for CancellationSettings {
    fn default() -> Self {
        Self {
            ttl_minutes: 15,
            sweep_interval_seconds: 60,
        }
    }
}

/// Retention for finished job records; live jobs are never evicted.
#[derive(Debug, Clone, Deserialize)]
pub struct JobSettings {
    pub retention_minutes: u64,
    pub sweep_interval_seconds: u64,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            retention_minutes: 60,
            sweep_interval_seconds: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkerSettings {
    pub queue_capacity: usize,
    pub progress_buffer: usize,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            queue_capacity: 32,
            progress_buffer: 64,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}
