use std::path::PathBuf;
use std::time::Duration;

use crate::shared::frame::Frame;
use crate::video::domain::display_sink::DisplaySink;
use crate::video::domain::image_writer::ImageWriter;

/// Shows frames by overwriting a single preview image on disk.
///
/// Any viewer that reloads the file on change acts as the live window.
pub struct PreviewFileSink {
    writer: Box<dyn ImageWriter>,
    path: PathBuf,
    shown: usize,
}

impl PreviewFileSink {
    pub fn new(writer: Box<dyn ImageWriter>, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
            shown: 0,
        }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl DisplaySink for PreviewFileSink {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.write(&self.path, frame)?;
        self.shown += 1;
        if self.shown == 1 {
            log::info!("Live preview at {}", self.path.display());
        }
        Ok(())
    }

    fn wait(&mut self, millis: u64) {
        std::thread::sleep(Duration::from_millis(millis));
    }
}
