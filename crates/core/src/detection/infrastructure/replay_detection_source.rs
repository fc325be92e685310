use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::detection::domain::detection::Detection;
use crate::detection::domain::detection_source::DetectionSource;
use crate::shared::frame::Frame;

/// Replays pre-recorded detections keyed by frame timestamp.
///
/// Used to run recorded captures through the gate without a live model.
/// Frames with no recorded entry yield an empty detection set.
pub struct ReplayDetectionSource {
    recorded: Arc<HashMap<Duration, Vec<Detection>>>,
}

impl ReplayDetectionSource {
    pub fn new(recorded: Arc<HashMap<Duration, Vec<Detection>>>) -> Self {
        Self { recorded }
    }
}

impl DetectionSource for ReplayDetectionSource {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Box<dyn std::error::Error>> {
        Ok(self
            .recorded
            .get(&frame.timestamp())
            .cloned()
            .unwrap_or_default())
    }
}
