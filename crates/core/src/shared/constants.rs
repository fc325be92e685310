/// Mean luma at or below which a frame is rejected as too dark (0-255 scale).
pub const DEFAULT_DARK_THRESHOLD: f64 = 60.0;

/// Smallest accepted face-to-frame ratio on either axis (inclusive).
pub const DEFAULT_MIN_SIZE_RATIO: f64 = 0.45;

/// Face-to-frame ratio on either axis at which a face is too large (exclusive).
pub const DEFAULT_MAX_SIZE_RATIO: f64 = 0.57;

/// Centering tolerance as a fraction of the frame's shorter side.
pub const DEFAULT_CENTERING_FACTOR: f64 = 0.13;

/// Minimum rounded detector confidence, in percent.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u32 = 90;

/// Minimum time between two quality evaluations of one session.
pub const DEFAULT_SAMPLING_INTERVAL_MS: u64 = 1000;

/// Keypoints a single evaluated detection must carry at minimum.
pub const MIN_DETECTION_KEYPOINTS: usize = 2;
