use crate::detection::domain::detection::Detection;
use crate::quality::domain::thresholds::GateThresholds;
use crate::quality::domain::verdict::{RejectionReason, Verdict};
use crate::quality::domain::{brightness, frontality, geometry};
use crate::shared::constants::MIN_DETECTION_KEYPOINTS;
use crate::shared::error::GateError;
use crate::shared::frame::{Frame, FrameDimensions};

/// Ordered rule chain deciding whether a frame is fit for enrollment.
///
/// The first failing rule wins:
/// face count, frontality, brightness, size (too small, then too large),
/// centering, confidence. Evaluation reads nothing but its arguments and
/// the thresholds, so repeated calls with the same input agree.
#[derive(Clone, Debug, Default)]
pub struct QualityGate {
    thresholds: GateThresholds,
}

impl QualityGate {
    pub fn new(thresholds: GateThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &GateThresholds {
        &self.thresholds
    }

    pub fn evaluate(&self, detections: &[Detection], frame: &Frame) -> Result<Verdict, GateError> {
        self.evaluate_pixels(detections, frame.data(), frame.dimensions())
    }

    /// Same as [`QualityGate::evaluate`] over a raw RGBA buffer.
    ///
    /// The buffer length is checked up front, but brightness is only
    /// computed once the face count and frontality rules have passed.
    pub fn evaluate_pixels(
        &self,
        detections: &[Detection],
        pixels: &[u8],
        dimensions: FrameDimensions,
    ) -> Result<Verdict, GateError> {
        dimensions.check_rgba_len(pixels.len())?;

        let detection = match detections {
            [] => return Ok(Verdict::Rejected(RejectionReason::NoFace)),
            [single] => single,
            _ => return Ok(Verdict::Rejected(RejectionReason::MultipleFaces)),
        };
        validate_detection(detection)?;

        if !frontality::is_frontal(&detection.keypoints) {
            return Ok(Verdict::Rejected(RejectionReason::NotFrontal));
        }

        let luma = brightness::sample(pixels, dimensions.width, dimensions.height)?;
        log::debug!("Brightness {luma:.1}");
        if luma <= self.thresholds.dark_threshold {
            return Ok(Verdict::Rejected(RejectionReason::TooDark));
        }

        let ratio = geometry::size_ratio(&detection.bounding_box, dimensions);
        if ratio.any_below(self.thresholds.min_size_ratio) {
            return Ok(Verdict::Rejected(RejectionReason::TooClose));
        }
        if ratio.any_at_or_above(self.thresholds.max_size_ratio) {
            return Ok(Verdict::Rejected(RejectionReason::TooFar));
        }

        if !geometry::is_centered(
            &detection.bounding_box,
            dimensions,
            self.thresholds.centering_factor,
        ) {
            return Ok(Verdict::Rejected(RejectionReason::NotCentered));
        }

        let confidence = detection.confidence_percent();
        log::debug!("Confidence {confidence}%");
        if confidence < i64::from(self.thresholds.confidence_threshold) {
            return Ok(Verdict::Rejected(RejectionReason::LowConfidence));
        }

        Ok(Verdict::Accepted)
    }
}

fn validate_detection(detection: &Detection) -> Result<(), GateError> {
    if detection.keypoints.len() < MIN_DETECTION_KEYPOINTS {
        return Err(GateError::TooFewKeypoints {
            count: detection.keypoints.len(),
            required: MIN_DETECTION_KEYPOINTS,
        });
    }
    if !(0.0..=1.0).contains(&detection.score) {
        return Err(GateError::InvalidScore(detection.score));
    }
    let b = &detection.bounding_box;
    let finite = [b.origin_x, b.origin_y, b.width, b.height]
        .iter()
        .all(|v| v.is_finite());
    if !finite || b.width < 0.0 || b.height < 0.0 {
        return Err(GateError::InvalidBoundingBox(*b));
    }
    Ok(())
}
