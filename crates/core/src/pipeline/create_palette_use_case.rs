use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::color::domain::color_method::ColorMethod;
use crate::color::infrastructure::reducer_factory::create_reducer;
use crate::compositing::domain::strip_compositor::StripCompositor;
use crate::pipeline::extract_colors_use_case::ExtractColorsUseCase;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::sampling::domain::stride::derive_stride;
use crate::shared::error::PaletteError;
use crate::shared::palette_settings::PaletteSettings;
use crate::video::domain::display_sink::DisplaySink;
use crate::video::domain::image_writer::ImageWriter;
use crate::video::domain::video_reader::VideoReader;

/// What a finished palette run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteReport {
    pub output_path: PathBuf,
    pub colors: usize,
    pub stride: usize,
    pub width: u32,
    pub height: u32,
}

/// Full palette pipeline: open → sample → reduce → composite → write.
pub struct CreatePaletteUseCase {
    reader: Box<dyn VideoReader>,
    image_writer: Box<dyn ImageWriter>,
    display: Option<Box<dyn DisplaySink>>,
    logger: Box<dyn PipelineLogger>,
}

impl CreatePaletteUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        image_writer: Box<dyn ImageWriter>,
        display: Option<Box<dyn DisplaySink>>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            image_writer,
            display,
            logger,
        }
    }

    /// Builds the palette for `input_path` and writes it to `output_path`.
    ///
    /// Settings and the method name are checked before the video is opened.
    /// Nothing is written unless at least one color was extracted.
    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
        settings: &PaletteSettings,
    ) -> Result<PaletteReport, Box<dyn std::error::Error>> {
        settings.validate()?;
        let method: ColorMethod = settings.method.parse()?;
        if settings.border_size > 0 {
            log::warn!(
                "Border of {}px in {} requested; borders are not drawn",
                settings.border_size,
                settings.border_color
            );
        }

        if !input_path.exists() {
            return Err(PaletteError::SourceUnavailable {
                path: input_path.to_path_buf(),
                reason: "no such file".to_string(),
            }
            .into());
        }
        let metadata = self
            .reader
            .open(input_path)
            .map_err(|e| PaletteError::SourceUnavailable {
                path: input_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let stride = derive_stride(settings.stride, metadata.total_frames, settings.width);
        self.logger.info(&format!(
            "Opened {} ({}x{}, {} frames, {:.2} fps, {}); method {method}, stride {stride}",
            input_path.display(),
            metadata.width,
            metadata.height,
            metadata.total_frames,
            metadata.fps,
            metadata.codec
        ));

        let mut reducer = create_reducer(method, settings.seed);
        let display = self
            .display
            .as_deref_mut()
            .map(|d| d as &mut dyn DisplaySink);
        let extracted = ExtractColorsUseCase::new(
            self.reader.as_mut(),
            reducer.as_mut(),
            display,
            self.logger.as_mut(),
        )
        .execute(&metadata, stride);
        self.reader.close();
        let colors = extracted?;
        self.logger.metric("colors", colors.len() as f64);
        self.logger.metric("stride", stride as f64);

        let started = Instant::now();
        let palette = StripCompositor::new(settings.strip_width).composite(
            &colors,
            settings.width,
            settings.height,
        )?;
        self.logger
            .timing("composite", started.elapsed().as_secs_f64() * 1000.0);

        let started = Instant::now();
        self.image_writer.write(output_path, &palette)?;
        self.logger
            .timing("write", started.elapsed().as_secs_f64() * 1000.0);

        self.logger.info(&format!(
            "Saved {}x{} palette of {} colors to {}",
            palette.width(),
            palette.height(),
            colors.len(),
            output_path.display()
        ));
        self.logger.summary();

        Ok(PaletteReport {
            output_path: output_path.to_path_buf(),
            colors: colors.len(),
            stride,
            width: palette.width(),
            height: palette.height(),
        })
    }
}
