use crate::domain::SegmentResult;

pub const DEFAULT_OVERLAP_WORD_WINDOW: usize = 30;

/// Reassembles per-segment transcripts into one string, trimming the
/// duplicate words the temporal overlap introduces at each boundary.
///
/// For every segment after the first, the trailing `word_window` words of
/// the accumulated text are compared against the leading `word_window`
/// words of the new segment; the longest exact suffix/prefix word match
/// (case-sensitive, whitespace tokens) is dropped from the new segment
/// before appending. This is a heuristic: it can under-trim when the model
/// transcribes the overlapped audio differently on each side, and a
/// coincidental match can over-trim. Results must arrive in index order.
///
/// Empty segment texts are skipped, so a partial input still merges; zero
/// segments merge to the empty string.
pub fn merge(results: &[SegmentResult], word_window: usize) -> String {
    let mut merged = String::new();

    for result in results {
        let incoming = result.text.trim();
        if incoming.is_empty() {
            continue;
        }

        if merged.is_empty() {
            merged.push_str(incoming);
            continue;
        }

        let remainder = strip_boundary_overlap(&merged, incoming, word_window);
        if remainder.is_empty() {
            continue;
        }

        merged.push(' ');
        merged.push_str(&remainder);
    }

    merged
}

/// Returns `incoming` with its duplicated leading words removed, rejoined
/// with single spaces.
fn strip_boundary_overlap(accumulated: &str, incoming: &str, word_window: usize) -> String {
    let accumulated_words: Vec<&str> = accumulated.split_whitespace().collect();
    let incoming_words: Vec<&str> = incoming.split_whitespace().collect();

    let tail_start = accumulated_words.len().saturating_sub(word_window);
    let tail = &accumulated_words[tail_start..];
    let head_len = incoming_words.len().min(word_window);

    let mut matched = 0;
    for len in (1..=tail.len().min(head_len)).rev() {
        if tail[tail.len() - len..] == incoming_words[..len] {
            matched = len;
            break;
        }
    }

    incoming_words[matched..].join(" ")
}
