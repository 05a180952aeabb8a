use klaksvik::application::services::transcript_merger::{merge, DEFAULT_OVERLAP_WORD_WINDOW};
use klaksvik::domain::SegmentResult;

fn segments(texts: &[&str]) -> Vec<SegmentResult> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| SegmentResult::new(i, t.to_string()))
        .collect()
}

#[test]
fn given_no_segments_when_merging_then_returns_empty_string() {
    assert_eq!(merge(&[], DEFAULT_OVERLAP_WORD_WINDOW), "");
}

#[test]
fn given_single_segment_when_merging_then_returns_its_text() {
    let results = segments(&["hello world"]);

    assert_eq!(merge(&results, DEFAULT_OVERLAP_WORD_WINDOW), "hello world");
}

#[test]
fn given_disjoint_segments_when_merging_then_concatenates_with_spaces() {
    let results = segments(&["first part of the talk", "entirely different words follow"]);

    assert_eq!(
        merge(&results, DEFAULT_OVERLAP_WORD_WINDOW),
        "first part of the talk entirely different words follow"
    );
}

#[test]
fn given_overlapping_boundary_when_merging_then_duplicate_words_appear_once() {
    let results = segments(&[
        "the quick brown fox",
        "brown fox jumps over the lazy dog",
    ]);

    let merged = merge(&results, DEFAULT_OVERLAP_WORD_WINDOW);

    assert_eq!(merged, "the quick brown fox jumps over the lazy dog");
    assert_eq!(merged.matches("brown fox").count(), 1);
}

#[test]
fn given_three_segments_with_overlaps_when_merging_then_all_boundaries_are_trimmed() {
    let results = segments(&[
        "we begin with the agenda for today",
        "agenda for today covers budget and hiring",
        "budget and hiring wrap up by noon",
    ]);

    assert_eq!(
        merge(&results, DEFAULT_OVERLAP_WORD_WINDOW),
        "we begin with the agenda for today covers budget and hiring wrap up by noon"
    );
}

#[test]
fn given_segment_fully_contained_in_tail_when_merging_then_nothing_is_appended() {
    let results = segments(&["closing remarks thank you", "thank you"]);

    assert_eq!(
        merge(&results, DEFAULT_OVERLAP_WORD_WINDOW),
        "closing remarks thank you"
    );
}

#[test]
fn given_failed_segments_as_empty_text_when_merging_then_they_are_skipped() {
    let results = segments(&["part one", "", "part three"]);

    assert_eq!(
        merge(&results, DEFAULT_OVERLAP_WORD_WINDOW),
        "part one part three"
    );
}

#[test]
fn given_overlap_longer_than_window_when_merging_then_only_window_words_are_trimmed() {
    // With a 2-word window the 4-word overlap is invisible: the incoming
    // head "c d" never matches the tail "e f", so the duplicate words
    // survive. The heuristic under-trims rather than guessing.
    let results = segments(&["a b c d e f", "c d e f g h"]);

    assert_eq!(merge(&results, 2), "a b c d e f c d e f g h");
}

#[test]
fn given_case_differences_when_merging_then_tokens_do_not_match() {
    let results = segments(&["see the River", "the river runs south"]);

    assert_eq!(
        merge(&results, DEFAULT_OVERLAP_WORD_WINDOW),
        "see the River the river runs south"
    );
}

#[test]
fn given_extra_whitespace_when_merging_then_appended_text_uses_single_spaces() {
    // The first segment keeps its inner spacing; trimmed continuations
    // are rejoined with single spaces.
    let results = segments(&["  spaced   out  ", "out   it   goes"]);

    assert_eq!(
        merge(&results, DEFAULT_OVERLAP_WORD_WINDOW),
        "spaced   out it goes"
    );
}
