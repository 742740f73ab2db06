/// Chooses how many frames to skip after each selected frame.
///
/// An explicit stride always wins. Otherwise the stride spreads the video
/// across roughly `target_width` samples: `total_frames / target_width`,
/// or 0 (every frame) when the video has no more frames than the target
/// width.
pub fn derive_stride(explicit: Option<usize>, total_frames: usize, target_width: u32) -> usize {
    if let Some(stride) = explicit {
        return stride;
    }
    let target_width = target_width as usize;
    if target_width == 0 || target_width >= total_frames {
        0
    } else {
        total_frames / target_width
    }
}

/// Number of frames a sampler with `stride` selects from `total_frames`.
pub fn selected_count(total_frames: usize, stride: usize) -> usize {
    total_frames.div_ceil(stride + 1)
}
