use std::time::Duration;

use ndarray::ArrayView3;

use crate::shared::error::GateError;

pub const RGBA_CHANNELS: usize = 4;

/// Pixel extents of a source frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameDimensions {
    pub width: u32,
    pub height: u32,
}

impl FrameDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), GateError> {
        if self.width == 0 || self.height == 0 {
            return Err(self.invalid());
        }
        Ok(())
    }

    /// Fails when the pixel count does not fit in `usize`.
    pub fn pixel_count(&self) -> Result<usize, GateError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(|| self.invalid())
    }

    /// Byte length of an RGBA buffer with these extents.
    pub fn rgba_len(&self) -> Result<usize, GateError> {
        self.pixel_count()?
            .checked_mul(RGBA_CHANNELS)
            .ok_or_else(|| self.invalid())
    }

    /// Fails unless `len` is exactly the RGBA buffer size for these extents.
    pub fn check_rgba_len(&self, len: usize) -> Result<(), GateError> {
        self.validate()?;
        let expected = self.rgba_len()?;
        if len != expected {
            return Err(GateError::PixelBufferSize {
                expected,
                actual: len,
            });
        }
        Ok(())
    }

    fn invalid(&self) -> GateError {
        GateError::InvalidDimensions {
            width: self.width,
            height: self.height,
        }
    }
}

/// A single camera frame: contiguous RGBA bytes in row-major order,
/// stamped with its position in the stream.
///
/// The buffer length is validated on construction, so every `Frame`
/// satisfies `data.len() == width * height * 4`.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    dimensions: FrameDimensions,
    timestamp: Duration,
}

impl Frame {
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        timestamp: Duration,
    ) -> Result<Self, GateError> {
        let dimensions = FrameDimensions::new(width, height);
        dimensions.check_rgba_len(data.len())?;
        Ok(Self {
            data,
            dimensions,
            timestamp,
        })
    }

    /// A frame where every pixel has the same RGBA value.
    pub fn filled(
        rgba: [u8; 4],
        width: u32,
        height: u32,
        timestamp: Duration,
    ) -> Result<Self, GateError> {
        let dimensions = FrameDimensions::new(width, height);
        dimensions.validate()?;
        let len = dimensions.rgba_len()?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| GateError::InvalidDimensions { width, height })?;
        data.extend(rgba.iter().copied().cycle().take(len));
        Self::new(data, width, height, timestamp)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> FrameDimensions {
        self.dimensions
    }

    pub fn timestamp(&self) -> Duration {
        self.timestamp
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(
            (
                self.dimensions.height as usize,
                self.dimensions.width as usize,
                RGBA_CHANNELS,
            ),
            &self.data,
        )
        .expect("Frame data length must match dimensions")
    }
}
