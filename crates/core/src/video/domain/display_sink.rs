use ndarray::{concatenate, Array3, Axis};

use crate::shared::color::Color;
use crate::shared::frame::Frame;

/// A transient surface showing frames while a palette is being built.
///
/// Purely observational: nothing it does may change which colors are
/// produced or their order.
pub trait DisplaySink: Send {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Gives the surface a chance to refresh. Called once per shown frame.
    fn wait(&mut self, millis: u64);
}

/// Appends a `strip_width`-pixel column of `color` to the right of `frame`.
pub fn with_color_marker(frame: &Frame, color: &Color, strip_width: u32) -> Frame {
    let pixel = color.to_pixel();
    let height = frame.height() as usize;
    let channels = frame.channels() as usize;
    let marker = Array3::from_shape_fn((height, strip_width as usize, channels), |(_, _, c)| {
        pixel.get(c).copied().unwrap_or(u8::MAX)
    });
    let marked = concatenate(Axis(1), &[frame.as_ndarray(), marker.view()])
        .expect("marker matches frame height and channels");
    Frame::from_ndarray(marked, frame.index())
}
