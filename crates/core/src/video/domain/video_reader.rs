use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// A sequentially readable video source.
///
/// Implementations own the decoder and its read cursor; the pipeline only
/// sees decoded 3-channel [`Frame`]s in presentation order.
pub trait VideoReader: Send {
    /// Opens the video at `path` and returns its metadata.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Returns a lazy iterator over the remaining frames in decode order.
    ///
    /// The iterator ends when the source is exhausted.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases the decoder. Safe to call more than once.
    fn close(&mut self);
}
