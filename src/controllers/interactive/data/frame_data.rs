use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::time::Duration;

/// A finished frame, lent to the presenter until `present` returns.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    pub generation: u64,
    pub pixel_buffer: &'a PixelBuffer,
    pub viewport: Viewport,
    pub render_duration: Duration,
}
