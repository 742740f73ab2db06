use crate::shared::color::Color;
use crate::shared::frame::Frame;

/// Reduces a frame to a single representative color.
///
/// Takes `&mut self` so randomized implementations can own their generator.
pub trait ColorReducer: Send {
    fn reduce(&mut self, frame: &Frame) -> Result<Color, Box<dyn std::error::Error>>;
}
