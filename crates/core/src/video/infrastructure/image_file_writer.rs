use std::path::Path;

use image::RgbImage;

use crate::shared::frame::Frame;
use crate::video::domain::image_writer::ImageWriter;

/// Encodes frames with the `image` crate; the format follows the extension.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_rgb_image(frame: &Frame) -> Result<RgbImage, Box<dyn std::error::Error>> {
    if frame.channels() != 3 {
        return Err(format!("Unsupported channel count: {}", frame.channels()).into());
    }
    RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .ok_or_else(|| "Failed to create image from frame data".into())
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let img = to_rgb_image(frame)?;
        img.save(path)?;
        log::debug!(
            "Wrote {}x{} image to {}",
            img.width(),
            img.height(),
            path.display()
        );
        Ok(())
    }
}
