use crate::provider::TimedTextSegment;

/// Joins segment texts with a single space, keeping caption order.
/// Segment text is used as-is; no trimming or collapsing.
pub fn join_segments(segments: &[TimedTextSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
