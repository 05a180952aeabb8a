use crate::domain::AudioSegmentPlan;

/// Tolerance for the floating-point end-of-media comparison.
const COVERAGE_EPSILON: f64 = 1e-9;

#[derive(Debug, thiserror::Error)]
pub enum ChunkPlanError {
    #[error("invalid media dimensions: {size_bytes} bytes over {duration_seconds}s")]
    InvalidInput {
        size_bytes: u64,
        duration_seconds: f64,
    },
    #[error(
        "segment duration {segment_seconds:.3}s does not exceed the {overlap_seconds}s overlap; \
         raise max_segment_bytes or lower the overlap"
    )]
    SegmentShorterThanOverlap {
        segment_seconds: f64,
        overlap_seconds: f64,
    },
}

/// Converts a byte budget into time windows. The media's average byte rate
/// turns `max_segment_bytes` into a segment duration; windows of that
/// length are laid out from t=0, each starting `overlap_seconds` before
/// the previous one ends, and the final window is truncated to end exactly
/// at end-of-media.
///
/// Pure and deterministic. The returned windows cover `[0, total]` with no
/// gaps; every non-final consecutive pair overlaps by exactly
/// `overlap_seconds`.
pub fn plan(
    total_size_bytes: u64,
    total_duration_seconds: f64,
    max_segment_bytes: u64,
    overlap_seconds: f64,
) -> Result<Vec<AudioSegmentPlan>, ChunkPlanError> {
    if total_size_bytes == 0 || !(total_duration_seconds > 0.0) {
        return Err(ChunkPlanError::InvalidInput {
            size_bytes: total_size_bytes,
            duration_seconds: total_duration_seconds,
        });
    }

    if total_size_bytes <= max_segment_bytes {
        return Ok(vec![AudioSegmentPlan {
            index: 0,
            start_seconds: 0.0,
            duration_seconds: total_duration_seconds,
            is_overlap_with_previous: false,
        }]);
    }

    let byte_rate = total_size_bytes as f64 / total_duration_seconds;
    let segment_seconds = max_segment_bytes as f64 / byte_rate;

    // size > budget guarantees segment < total; a segment at or below the
    // overlap would walk backwards and never terminate.
    if segment_seconds <= overlap_seconds {
        return Err(ChunkPlanError::SegmentShorterThanOverlap {
            segment_seconds,
            overlap_seconds,
        });
    }

    let mut windows = Vec::new();
    let mut start = 0.0_f64;
    let mut index = 0_usize;

    loop {
        let duration = segment_seconds.min(total_duration_seconds - start);
        windows.push(AudioSegmentPlan {
            index,
            start_seconds: start,
            duration_seconds: duration,
            is_overlap_with_previous: index > 0,
        });

        if start + segment_seconds >= total_duration_seconds - COVERAGE_EPSILON {
            break;
        }

        start += segment_seconds - overlap_seconds;
        index += 1;
    }

    Ok(windows)
}
