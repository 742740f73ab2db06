use crate::color::domain::color_reducer::ColorReducer;
use crate::shared::color::Color;
use crate::shared::error::PaletteError;
use crate::shared::frame::Frame;

/// Per-channel arithmetic mean over every pixel of a frame.
///
/// Channel sums are accumulated as integers, so the result does not depend
/// on pixel order.
pub struct AverageColorReducer;

impl AverageColorReducer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AverageColorReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorReducer for AverageColorReducer {
    fn reduce(&mut self, frame: &Frame) -> Result<Color, Box<dyn std::error::Error>> {
        if frame.channels() < 3 {
            return Err(format!("expected 3 channels, frame has {}", frame.channels()).into());
        }
        let count = frame.pixel_count();
        if count == 0 {
            return Err(PaletteError::EmptyFrame {
                index: frame.index(),
            }
            .into());
        }

        let mut sums = [0u64; 3];
        for pixel in frame.pixels() {
            sums[0] += pixel[0] as u64;
            sums[1] += pixel[1] as u64;
            sums[2] += pixel[2] as u64;
        }

        let n = count as f64;
        Ok(Color::new(
            sums[0] as f64 / n,
            sums[1] as f64 / n,
            sums[2] as f64 / n,
        ))
    }
}
