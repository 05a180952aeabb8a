pub mod decoder;
mod wav_segment_extractor;

pub use decoder::{decode_to_canonical_pcm, DecodedAudio, CANONICAL_SAMPLE_RATE};
pub use wav_segment_extractor::WavSegmentExtractor;
