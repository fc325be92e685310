use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::constants::{
    DEFAULT_CENTERING_FACTOR, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_DARK_THRESHOLD,
    DEFAULT_MAX_SIZE_RATIO, DEFAULT_MIN_SIZE_RATIO,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("dark threshold must be within 0-255, got {0}")]
    DarkThreshold(f64),
    #[error("size ratio bounds must satisfy 0 < min < max, got [{min}, {max})")]
    SizeRatioBounds { min: f64, max: f64 },
    #[error("centering factor must be positive, got {0}")]
    CenteringFactor(f64),
    #[error("confidence threshold must be within 0-100, got {0}")]
    ConfidenceThreshold(u32),
    #[error("sampling interval must be positive")]
    SamplingInterval,
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tunable limits applied by the quality gate.
///
/// Fixed for the lifetime of a session. Fields missing from a config file
/// keep their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateThresholds {
    /// Mean luma at or below which the frame is too dark.
    pub dark_threshold: f64,
    /// Inclusive lower bound for both size ratios.
    pub min_size_ratio: f64,
    /// Exclusive upper bound for both size ratios.
    pub max_size_ratio: f64,
    /// Centering tolerance as a fraction of the shorter frame side.
    pub centering_factor: f64,
    /// Minimum rounded confidence percentage.
    pub confidence_threshold: u32,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self {
            dark_threshold: DEFAULT_DARK_THRESHOLD,
            min_size_ratio: DEFAULT_MIN_SIZE_RATIO,
            max_size_ratio: DEFAULT_MAX_SIZE_RATIO,
            centering_factor: DEFAULT_CENTERING_FACTOR,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl GateThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=255.0).contains(&self.dark_threshold) {
            return Err(ConfigError::DarkThreshold(self.dark_threshold));
        }
        let (min, max) = (self.min_size_ratio, self.max_size_ratio);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min < max) {
            return Err(ConfigError::SizeRatioBounds { min, max });
        }
        if !(self.centering_factor.is_finite() && self.centering_factor > 0.0) {
            return Err(ConfigError::CenteringFactor(self.centering_factor));
        }
        if self.confidence_threshold > 100 {
            return Err(ConfigError::ConfidenceThreshold(self.confidence_threshold));
        }
        Ok(())
    }
}
