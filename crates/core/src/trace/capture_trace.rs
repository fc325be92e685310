use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detection::domain::detection::Detection;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("failed to read trace {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse trace {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("trace {0} contains no frames")]
    Empty(PathBuf),
    #[error("trace timestamps must not decrease: {previous_ms}ms is followed by {next_ms}ms")]
    OutOfOrder { previous_ms: u64, next_ms: u64 },
}

/// Where a trace frame's pixels come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TracePixels {
    /// An image file, relative to the trace file unless absolute.
    Image { image: PathBuf },
    /// A uniform frame, handy for synthetic traces.
    Fill {
        fill: [u8; 4],
        width: u32,
        height: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub pixels: TracePixels,
    #[serde(default)]
    pub detections: Vec<Detection>,
}

impl TraceFrame {
    pub fn timestamp(&self) -> Duration {
        Duration::from_millis(self.timestamp_ms)
    }
}

/// A recorded capture: frames in stream order with the detections the
/// detector produced for each.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureTrace {
    pub frames: Vec<TraceFrame>,
}

impl CaptureTrace {
    /// Reads a trace file and resolves its image paths against the file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self, TraceError> {
        let json = fs::read_to_string(path).map_err(|source| TraceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut trace: CaptureTrace =
            serde_json::from_str(&json).map_err(|source| TraceError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if trace.frames.is_empty() {
            return Err(TraceError::Empty(path.to_path_buf()));
        }
        trace.check_order()?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        trace.resolve_images(base_dir);
        log::debug!("Loaded {} trace frames from {}", trace.frames.len(), path.display());
        Ok(trace)
    }

    /// Recorded detections keyed by frame timestamp. When a timestamp
    /// repeats, the first frame's detections are kept.
    pub fn detections_by_timestamp(&self) -> HashMap<Duration, Vec<Detection>> {
        let mut by_timestamp = HashMap::with_capacity(self.frames.len());
        for frame in &self.frames {
            by_timestamp
                .entry(frame.timestamp())
                .or_insert_with(|| frame.detections.clone());
        }
        by_timestamp
    }

    fn check_order(&self) -> Result<(), TraceError> {
        for pair in self.frames.windows(2) {
            if pair[1].timestamp_ms < pair[0].timestamp_ms {
                return Err(TraceError::OutOfOrder {
                    previous_ms: pair[0].timestamp_ms,
                    next_ms: pair[1].timestamp_ms,
                });
            }
        }
        Ok(())
    }

    fn resolve_images(&mut self, base_dir: &Path) {
        for frame in &mut self.frames {
            if let TracePixels::Image { image } = &mut frame.pixels {
                if image.is_relative() {
                    *image = base_dir.join(&*image);
                }
            }
        }
    }
}
