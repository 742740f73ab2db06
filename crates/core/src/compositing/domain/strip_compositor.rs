use ndarray::{concatenate, Array3, ArrayView3, Axis};

use crate::compositing::domain::batch_fold::fold_in_batches;
use crate::compositing::domain::strip_width::StripWidthPolicy;
use crate::shared::color::Color;
use crate::shared::constants::PALETTE_BATCH_SIZE;
use crate::shared::error::PaletteError;
use crate::shared::frame::Frame;

/// Lays colors out as vertical strips, left to right, in input order.
///
/// Strips are concatenated into sub-palettes of `batch_size` strips, and the
/// sub-palettes are joined in one final concatenation. The result is the
/// same image a strip-by-strip concatenation would produce.
pub struct StripCompositor {
    policy: StripWidthPolicy,
    batch_size: usize,
}

impl StripCompositor {
    pub fn new(policy: StripWidthPolicy) -> Self {
        Self {
            policy,
            batch_size: PALETTE_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Builds the palette image for `colors`.
    ///
    /// The height is always `target_height`; the width is the sum of strip
    /// widths, which only approximates `target_width` under
    /// [`StripWidthPolicy::Even`] and ignores it under
    /// [`StripWidthPolicy::Unit`].
    pub fn composite(
        &self,
        colors: &[Color],
        target_width: u32,
        target_height: u32,
    ) -> Result<Frame, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        let invalid = PaletteError::InvalidDimensions {
            width: target_width,
            height: target_height,
        };
        if target_height == 0 {
            return Err(invalid);
        }
        let strip_width = self
            .policy
            .strip_width(target_width, colors.len())
            .ok_or(invalid)?;

        log::debug!(
            "Compositing {} strips of {}x{} ({} policy)",
            colors.len(),
            strip_width,
            target_height,
            self.policy
        );

        let strips = colors
            .iter()
            .map(|color| solid_strip(color, strip_width, target_height));
        let sub_palettes = fold_in_batches(strips, self.batch_size, hstack_pair);

        log::debug!("Combining {} sub-palettes", sub_palettes.len());
        let views: Vec<ArrayView3<'_, u8>> = sub_palettes.iter().map(|p| p.view()).collect();
        let palette = concatenate(Axis(1), &views)
            .expect("sub-palettes share height and channel count");

        Ok(Frame::from_ndarray(palette, 0))
    }
}

fn solid_strip(color: &Color, width: u32, height: u32) -> Array3<u8> {
    let pixel = color.to_pixel();
    Array3::from_shape_fn((height as usize, width as usize, 3), |(_, _, c)| pixel[c])
}

fn hstack_pair(left: Array3<u8>, right: Array3<u8>) -> Array3<u8> {
    concatenate(Axis(1), &[left.view(), right.view()])
        .expect("strips share height and channel count")
}
