use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of the palette pipeline.
///
/// None of these are retried: any of them aborts the run. Reaching the end
/// of a video is never an error.
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("video source unavailable at {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },
    #[error("invalid color selection method '{0}' (expected 'average' or 'dominant')")]
    InvalidMethod(String),
    #[error("no frames were selected, cannot build an empty palette")]
    EmptyPalette,
    #[error("frame {index} has no pixels")]
    EmptyFrame { index: usize },
    #[error("invalid palette dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
