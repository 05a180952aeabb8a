mod openai_whisper_client;

pub use openai_whisper_client::OpenAiWhisperClient;
