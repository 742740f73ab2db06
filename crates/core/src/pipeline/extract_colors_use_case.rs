use std::time::Instant;

use crate::color::domain::color_reducer::ColorReducer;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::sampling::domain::frame_sampler::FrameSampler;
use crate::sampling::domain::stride::selected_count;
use crate::shared::color::Color;
use crate::shared::constants::{DISPLAY_STRIP_WIDTH, DISPLAY_WAIT_MS};
use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::display_sink::{with_color_marker, DisplaySink};
use crate::video::domain::video_reader::VideoReader;

/// Sampling pipeline: read → sample → reduce → (display).
///
/// Produces one color per selected frame, in frame order. The reader must
/// already be open.
pub struct ExtractColorsUseCase<'a> {
    reader: &'a mut dyn VideoReader,
    reducer: &'a mut dyn ColorReducer,
    display: Option<&'a mut dyn DisplaySink>,
    logger: &'a mut dyn PipelineLogger,
}

impl<'a> ExtractColorsUseCase<'a> {
    pub fn new(
        reader: &'a mut dyn VideoReader,
        reducer: &'a mut dyn ColorReducer,
        display: Option<&'a mut dyn DisplaySink>,
        logger: &'a mut dyn PipelineLogger,
    ) -> Self {
        Self {
            reader,
            reducer,
            display,
            logger,
        }
    }

    pub fn execute(
        &mut self,
        metadata: &VideoMetadata,
        stride: usize,
    ) -> Result<Vec<Color>, Box<dyn std::error::Error>> {
        let total = metadata.total_frames;
        let mut colors = Vec::with_capacity(selected_count(total, stride));
        let mut sampler = FrameSampler::new(self.reader.frames(), stride);
        let mut reported = None;

        while let Some(frame) = sampler.next() {
            let started = Instant::now();
            let color = self.reducer.reduce(&frame)?;
            self.logger
                .timing("reduce", started.elapsed().as_secs_f64() * 1000.0);

            if let Some(display) = self.display.as_deref_mut() {
                show_with_marker(display, &frame, &color);
            }

            log::trace!("Frame {} -> {color}", frame.index());
            colors.push(color);
            reported = Some(sampler.frames_read());
            self.logger.progress(sampler.frames_read(), total);
        }

        // Trailing skipped frames are only counted once the source ends.
        let frames_read = sampler.frames_read();
        if reported != Some(frames_read) {
            self.logger.progress(frames_read, total);
        }
        self.logger.info(&format!(
            "Extracted {} colors from {frames_read} frames (stride {stride})",
            colors.len()
        ));
        Ok(colors)
    }
}

/// Display failures never reach the caller.
fn show_with_marker(display: &mut dyn DisplaySink, frame: &Frame, color: &Color) {
    let marked = with_color_marker(frame, color, DISPLAY_STRIP_WIDTH);
    if let Err(e) = display.show(&marked) {
        log::warn!("Display failed on frame {}: {e}", frame.index());
    }
    display.wait(DISPLAY_WAIT_MS);
}
