use crate::recognition::types::{HandDetection, KEYPOINT_COUNT};

/// Minimum keypoint spread (pixels) for a detection to count as a hand.
pub const DEFAULT_MIN_SPREAD_PX: f32 = 50.0;

/// Drops detections that are malformed or too small to be a real hand.
pub fn filter_detections(detections: Vec<HandDetection>, min_spread: f32) -> Vec<HandDetection> {
    let before = detections.len();
    let kept: Vec<HandDetection> = detections
        .into_iter()
        .filter(|d| d.keypoints.len() == KEYPOINT_COUNT && d.spread() >= min_spread)
        .collect();
    if kept.len() != before {
        tracing::trace!(before, after = kept.len(), "detections filtered");
    }
    kept
}
