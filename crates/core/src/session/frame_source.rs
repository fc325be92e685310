use crate::shared::frame::Frame;

/// Properties of an opened frame stream.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamInfo {
    pub width: u32,
    pub height: u32,
    /// Known for recorded streams, `None` for live cameras.
    pub total_frames: Option<usize>,
}

/// Supplies timestamped RGBA frames from a camera or a recording.
///
/// Implementations own the underlying device or file handle. `close` must
/// release it and must be safe to call more than once.
pub trait FrameSource: Send {
    /// Acquires the stream and returns its properties.
    fn open(&mut self) -> Result<StreamInfo, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in arrival order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the source.
    fn close(&mut self);
}
