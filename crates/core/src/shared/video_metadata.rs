use std::path::PathBuf;

/// Properties of an opened video source.
///
/// `total_frames` is the container's reported count and may be 0 when the
/// container does not record it; it is only used for progress reporting and
/// stride derivation, never to bound iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}
