mod progress;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use video_palette_core::compositing::domain::strip_width::StripWidthPolicy;
use video_palette_core::pipeline::create_palette_use_case::CreatePaletteUseCase;
use video_palette_core::pipeline::pipeline_logger::{PipelineLogger, StdoutPipelineLogger};
use video_palette_core::shared::palette_settings::PaletteSettings;
use video_palette_core::video::domain::display_sink::DisplaySink;
use video_palette_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use video_palette_core::video::infrastructure::image_file_writer::ImageFileWriter;
use video_palette_core::video::infrastructure::preview_file_sink::PreviewFileSink;

use crate::progress::ProgressBarPipelineLogger;

/// Builds a color palette image from the frames of a video.
#[derive(Parser)]
#[command(name = "video-palette")]
struct Cli {
    /// Input video file.
    #[arg(short = 'v', long)]
    video: PathBuf,

    /// Directory the palette is written to (created if missing).
    #[arg(short = 'o', long)]
    output_dir: PathBuf,

    /// Palette file name; the extension picks the image format.
    #[arg(short = 'f', long)]
    output_filename: PathBuf,

    /// Show each sampled frame with its color in a live preview image.
    #[arg(short = 'd', long)]
    display: bool,

    /// Color selection method: average or dominant [default: average].
    #[arg(short = 'c', long)]
    color_selection_method: Option<String>,

    /// Frames to skip after each sampled frame [default: frames / width].
    #[arg(short = 's', long)]
    stride: Option<usize>,

    /// Palette width in pixels [default: 1920].
    #[arg(short = 'w', long)]
    width: Option<u32>,

    /// Palette height in pixels [default: 1080].
    #[arg(short = 'g', long)]
    height: Option<u32>,

    /// Strip width policy: even or unit [default: even].
    #[arg(long)]
    strip_width: Option<StripWidthPolicy>,

    /// Seed for the dominant color clustering.
    #[arg(long)]
    seed: Option<u64>,

    /// Border size in pixels (not drawn yet).
    #[arg(long)]
    border_size: Option<u32>,

    /// Border color (not drawn yet).
    #[arg(long)]
    border_color: Option<String>,

    /// JSON settings file [default: <config dir>/Video Palette/settings.json].
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log plain progress lines instead of drawing a progress bar.
    #[arg(long)]
    no_progress: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = build_settings(&cli)?;
    let output = cli.output_dir.join(&cli.output_filename);

    let display: Option<Box<dyn DisplaySink>> = if settings.display {
        Some(Box::new(PreviewFileSink::new(
            Box::new(ImageFileWriter::new()),
            preview_path(&cli),
        )))
    } else {
        None
    };
    let logger: Box<dyn PipelineLogger> = if cli.no_progress {
        Box::new(StdoutPipelineLogger::default())
    } else {
        Box::new(ProgressBarPipelineLogger::new()?)
    };

    let mut use_case = CreatePaletteUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(ImageFileWriter::new()),
        display,
        logger,
    );
    let report = use_case.execute(&cli.video, &output, &settings)?;

    log::info!(
        "Palette of {} colors ({}x{}, stride {}) written to {}",
        report.colors,
        report.width,
        report.height,
        report.stride,
        report.output_path.display()
    );
    Ok(())
}

/// Settings file values, overridden by any flag given on the command line.
fn build_settings(cli: &Cli) -> Result<PaletteSettings, Box<dyn std::error::Error>> {
    let mut settings = PaletteSettings::load_or_default(cli.config.as_deref())?;

    if let Some(method) = &cli.color_selection_method {
        settings.method = method.clone();
    }
    if cli.stride.is_some() {
        settings.stride = cli.stride;
    }
    if let Some(width) = cli.width {
        settings.width = width;
    }
    if let Some(height) = cli.height {
        settings.height = height;
    }
    if let Some(policy) = cli.strip_width {
        settings.strip_width = policy;
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if let Some(size) = cli.border_size {
        settings.border_size = size;
    }
    if let Some(color) = &cli.border_color {
        settings.border_color = color.clone();
    }
    settings.display |= cli.display;

    log::debug!("Effective settings: {settings:?}");
    Ok(settings)
}

/// `<output dir>/<output stem>.preview.png`, next to the palette.
fn preview_path(cli: &Cli) -> PathBuf {
    let stem = cli
        .output_filename
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "palette".to_string());
    cli.output_dir.join(format!("{stem}.preview.png"))
}
