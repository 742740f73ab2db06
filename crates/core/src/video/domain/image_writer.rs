use std::path::Path;

use crate::shared::frame::Frame;

/// Persists a pixel grid as a raster image.
pub trait ImageWriter: Send {
    /// Writes `frame` to `path`. The format follows the path's extension.
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
