/// Transcript of one planned window. A failed window fails the whole job,
/// so only successful results are accumulated; an empty text is valid
/// (silence, music).
#[derive(Debug, Clone)]
pub struct SegmentResult {
    pub index: usize,
    pub text: String,
}

impl SegmentResult {
    pub fn new(index: usize, text: String) -> Self {
        Self { index, text }
    }
}
