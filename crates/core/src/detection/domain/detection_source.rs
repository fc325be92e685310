use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;

/// Domain interface for the face detector feeding the quality gate.
///
/// The detector itself is an external capability. Implementations that
/// lose access to the camera or model report an empty detection set rather
/// than an error, which the gate turns into a "no face" verdict.
pub trait DetectionSource: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>>;
}
