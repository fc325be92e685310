use crate::session::frame_source::{FrameSource, StreamInfo};
use crate::shared::frame::Frame;
use crate::trace::capture_trace::{CaptureTrace, TraceFrame, TracePixels};

/// Plays a [`CaptureTrace`] back as a frame stream.
///
/// Images are decoded lazily, one per yielded frame, and converted to RGBA.
pub struct TraceFrameSource {
    frames: Vec<TraceFrame>,
    info: Option<StreamInfo>,
}

impl TraceFrameSource {
    pub fn new(trace: &CaptureTrace) -> Self {
        Self {
            frames: trace.frames.clone(),
            info: None,
        }
    }
}

fn frame_size(frame: &TraceFrame) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    match &frame.pixels {
        TracePixels::Image { image } => image::image_dimensions(image)
            .map_err(|e| format!("failed to read {}: {e}", image.display()).into()),
        TracePixels::Fill { width, height, .. } => Ok((*width, *height)),
    }
}

fn decode_frame(frame: &TraceFrame) -> Result<Frame, Box<dyn std::error::Error>> {
    match &frame.pixels {
        TracePixels::Image { image } => {
            let rgba = image::open(image)
                .map_err(|e| format!("failed to decode {}: {e}", image.display()))?
                .to_rgba8();
            let (width, height) = rgba.dimensions();
            Ok(Frame::new(rgba.into_raw(), width, height, frame.timestamp())?)
        }
        TracePixels::Fill {
            fill,
            width,
            height,
        } => Ok(Frame::filled(*fill, *width, *height, frame.timestamp())?),
    }
}

impl FrameSource for TraceFrameSource {
    fn open(&mut self) -> Result<StreamInfo, Box<dyn std::error::Error>> {
        let first = self.frames.first().ok_or("Trace has no frames")?;
        let (width, height) = frame_size(first)?;
        let info = StreamInfo {
            width,
            height,
            total_frames: Some(self.frames.len()),
        };
        self.info = Some(info.clone());
        Ok(info)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        if self.info.is_none() {
            return Box::new(std::iter::once(Err("TraceFrameSource: not opened".into())));
        }
        Box::new(self.frames.iter().map(decode_frame))
    }

    fn close(&mut self) {
        self.info = None;
    }
}
