use serde::{Deserialize, Serialize};

use crate::shared::bounding_box::BoundingBox;

/// A facial landmark in normalized [0, 1] frame-relative coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
}

impl Keypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Keypoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One face reported by the detection source for a single frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub keypoints: Vec<Keypoint>,
    pub score: f64,
}

impl Detection {
    pub fn new(bounding_box: BoundingBox, keypoints: Vec<Keypoint>, score: f64) -> Self {
        Self {
            bounding_box,
            keypoints,
            score,
        }
    }

    /// Detector score as an integer percentage, rounded half-up.
    pub fn confidence_percent(&self) -> i64 {
        (self.score * 100.0 + 0.5).floor() as i64
    }
}
