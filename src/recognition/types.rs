use serde::{Deserialize, Serialize};

/// Number of landmarks in a single hand detection.
pub const KEYPOINT_COUNT: usize = 21;

/// Length of a normalized feature vector (21 points × 2 dimensions).
pub const FEATURE_LEN: usize = KEYPOINT_COUNT * 2;

// Landmark indices used by the recognition stages.
pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const RING_MCP: usize = 13;
pub const PINKY_MCP: usize = 17;

/// Knuckles whose mean distance from the wrist defines the hand's scale.
pub const MCP_INDICES: [usize; 4] = [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];

/// A single tracked landmark. Depth is carried through but ignored by the
/// 2D feature pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawKeypoint")]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Keypoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: None }
    }
}

/// Pose sources deliver points either as tuples or as objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKeypoint {
    Pair([f32; 2]),
    Triple([f32; 3]),
    Object { x: f32, y: f32, z: Option<f32> },
}

impl From<RawKeypoint> for Keypoint {
    fn from(raw: RawKeypoint) -> Self {
        match raw {
            RawKeypoint::Pair([x, y]) => Self { x, y, z: None },
            RawKeypoint::Triple([x, y, z]) => Self { x, y, z: Some(z) },
            RawKeypoint::Object { x, y, z } => Self { x, y, z },
        }
    }
}

/// One hand reported by the pose source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandDetection {
    pub keypoints: Vec<Keypoint>,
    /// Detector confidence, if the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl HandDetection {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints, score: None }
    }

    /// Largest of the horizontal and vertical extents, in source pixels.
    pub fn spread(&self) -> f32 {
        if self.keypoints.is_empty() {
            return 0.0;
        }
        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);
        for p in &self.keypoints {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        (max_x - min_x).max(max_y - min_y)
    }
}
