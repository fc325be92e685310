use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::FrameDimensions;

/// How much of the frame a face occupies on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeRatio {
    pub height_ratio: f64,
    pub width_ratio: f64,
}

impl SizeRatio {
    pub fn any_below(&self, min: f64) -> bool {
        self.height_ratio < min || self.width_ratio < min
    }

    pub fn any_at_or_above(&self, max: f64) -> bool {
        self.height_ratio >= max || self.width_ratio >= max
    }
}

pub fn size_ratio(bbox: &BoundingBox, frame: FrameDimensions) -> SizeRatio {
    SizeRatio {
        height_ratio: bbox.height / frame.height as f64,
        width_ratio: bbox.width / frame.width as f64,
    }
}

/// Allowed center deviation in pixels; scales with the frame's shorter side.
pub fn centering_tolerance(frame: FrameDimensions, factor: f64) -> f64 {
    frame.width.min(frame.height) as f64 * factor
}

/// True when the box center lies within the tolerance of the frame center
/// on both axes (inclusive).
pub fn is_centered(bbox: &BoundingBox, frame: FrameDimensions, factor: f64) -> bool {
    let (box_cx, box_cy) = bbox.center();
    let frame_cx = frame.width as f64 / 2.0;
    let frame_cy = frame.height as f64 / 2.0;
    let tolerance = centering_tolerance(frame, factor);

    (box_cx - frame_cx).abs() <= tolerance && (box_cy - frame_cy).abs() <= tolerance
}
