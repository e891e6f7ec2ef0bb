//! Landmark normalization: raw keypoints → position, rotation and scale
//! invariant feature vector.
use crate::recognition::types::{
    Keypoint, FEATURE_LEN, KEYPOINT_COUNT, MCP_INDICES, MIDDLE_MCP, WRIST,
};

/// Normalize a 21-point hand into a 42-value feature vector.
///
/// 1. Translate so the wrist sits at the origin.
/// 2. Rotate so the wrist → middle MCP direction lies on the +x axis.
/// 3. Divide by the mean wrist → MCP distance (1 when that is zero).
/// 4. Flatten as `[x0, y0, x1, y1, …]`, preserving point order.
///
/// Returns an empty vector when the input does not hold exactly 21 points.
pub fn normalize(keypoints: &[Keypoint]) -> Vec<f32> {
    if keypoints.len() != KEYPOINT_COUNT {
        return Vec::new();
    }

    let origin = keypoints[WRIST];
    let translated: Vec<(f32, f32)> = keypoints
        .iter()
        .map(|p| (p.x - origin.x, p.y - origin.y))
        .collect();

    let (dx, dy) = translated[MIDDLE_MCP];
    let angle = dy.atan2(dx);
    let (sin_a, cos_a) = (-angle).sin_cos();
    let rotated: Vec<(f32, f32)> = translated
        .iter()
        .map(|&(x, y)| (x * cos_a - y * sin_a, x * sin_a + y * cos_a))
        .collect();

    let mean_dist = MCP_INDICES
        .iter()
        .map(|&i| rotated[i].0.hypot(rotated[i].1))
        .sum::<f32>()
        / MCP_INDICES.len() as f32;
    let scale = if mean_dist > f32::EPSILON && mean_dist.is_finite() {
        mean_dist
    } else {
        1.0
    };

    let mut features = Vec::with_capacity(FEATURE_LEN);
    for (x, y) in rotated {
        features.push(x / scale);
        features.push(y / scale);
    }
    features
}
