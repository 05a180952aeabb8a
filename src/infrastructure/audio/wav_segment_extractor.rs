use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::application::ports::{ExtractionError, SegmentExtractor};

use super::decoder::CANONICAL_SAMPLE_RATE;

/// Cuts a window out of the canonical sample buffer and encodes it as
/// 16-bit mono WAV, the format the transcription API ingests.
pub struct WavSegmentExtractor;

impl SegmentExtractor for WavSegmentExtractor {
    fn extract(
        &self,
        samples: &[f32],
        start_seconds: f64,
        duration_seconds: f64,
    ) -> Result<Vec<u8>, ExtractionError> {
        if start_seconds < 0.0 || duration_seconds <= 0.0 {
            return Err(ExtractionError::OutOfRange(format!(
                "window start={}s duration={}s",
                start_seconds, duration_seconds
            )));
        }

        let start = (start_seconds * CANONICAL_SAMPLE_RATE as f64).round() as usize;
        let length = (duration_seconds * CANONICAL_SAMPLE_RATE as f64).round() as usize;

        if start >= samples.len() {
            return Err(ExtractionError::OutOfRange(format!(
                "window starts at sample {} but media has {}",
                start,
                samples.len()
            )));
        }
        let end = (start + length).min(samples.len());

        let spec = WavSpec {
            channels: 1,
            sample_rate: CANONICAL_SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec)
            .map_err(|e| ExtractionError::EncodingFailed(format!("wav header: {}", e)))?;

        for &sample in &samples[start..end] {
            let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            writer
                .write_sample(quantized)
                .map_err(|e| ExtractionError::EncodingFailed(format!("wav sample: {}", e)))?;
        }

        writer
            .finalize()
            .map_err(|e| ExtractionError::EncodingFailed(format!("wav finalize: {}", e)))?;

        Ok(cursor.into_inner())
    }
}
