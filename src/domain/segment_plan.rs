/// One planned time window of the source audio. Windows are ordered by
/// `index`; consecutive windows share a fixed overlap so words cut at a
/// boundary are not lost.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegmentPlan {
    pub index: usize,
    pub start_seconds: f64,
    pub duration_seconds: f64,
    pub is_overlap_with_previous: bool,
}

impl AudioSegmentPlan {
    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }
}
