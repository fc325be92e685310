use thiserror::Error;

use crate::shared::bounding_box::BoundingBox;

/// Input-contract violations raised while evaluating a frame.
///
/// These are caller bugs, never user-recoverable outcomes: an evaluation
/// that hits one aborts instead of producing a verdict.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    #[error("invalid input: pixel buffer has {actual} bytes, expected {expected} (width * height * 4)")]
    PixelBufferSize { expected: usize, actual: usize },
    #[error("invalid input: frame dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("invalid input: detection has {count} keypoints, at least {required} required")]
    TooFewKeypoints { count: usize, required: usize },
    #[error("invalid input: detection score must be within [0, 1], got {0}")]
    InvalidScore(f64),
    #[error("invalid input: bounding box must be finite with non-negative size, got {0:?}")]
    InvalidBoundingBox(BoundingBox),
}
