//! Mean-luma brightness estimate of an RGBA frame.
//!
//! Uses the Rec. 601 luma weights; alpha is ignored. This touches every
//! pixel, so callers run it only after the cheap structural checks pass.

use ndarray::{ArrayView3, Axis};

use crate::shared::error::GateError;
use crate::shared::frame::{Frame, FrameDimensions, RGBA_CHANNELS};

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Mean luma (0-255) of a raw RGBA buffer of `width` x `height` pixels.
pub fn sample(pixels: &[u8], width: u32, height: u32) -> Result<f64, GateError> {
    let dimensions = FrameDimensions::new(width, height);
    dimensions.check_rgba_len(pixels.len())?;
    let expected = dimensions.rgba_len()?;
    let view = ArrayView3::from_shape(
        (height as usize, width as usize, RGBA_CHANNELS),
        pixels,
    )
    .map_err(|_| GateError::PixelBufferSize {
        expected,
        actual: pixels.len(),
    })?;
    Ok(mean_luma(view))
}

/// Mean luma of an already-validated frame.
pub fn sample_frame(frame: &Frame) -> f64 {
    mean_luma(frame.as_ndarray())
}

/// Accumulates in row-major order so the sum matches a flat scan of the buffer.
fn mean_luma(view: ArrayView3<'_, u8>) -> f64 {
    let mut total = 0.0;
    let mut pixels = 0usize;
    for px in view.lanes(Axis(2)) {
        total += LUMA_R * px[0] as f64 + LUMA_G * px[1] as f64 + LUMA_B * px[2] as f64;
        pixels += 1;
    }
    total / pixels as f64
}
