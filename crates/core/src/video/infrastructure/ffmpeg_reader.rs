use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;

/// Decodes video frames via ffmpeg-next (libavformat + libavcodec).
///
/// Every decoded frame is converted to RGB24, so C0/C1/C2 are R/G/B.
pub struct FfmpegReader {
    input_ctx: Option<ffmpeg_next::format::context::Input>,
    video_stream_index: usize,
}

// Safety: FfmpegReader is only used from a single thread at a time.
// The raw pointers inside ffmpeg types are not shared across threads.
unsafe impl Send for FfmpegReader {}

impl FfmpegReader {
    pub fn new() -> Self {
        Self {
            input_ctx: None,
            video_stream_index: 0,
        }
    }
}

impl Default for FfmpegReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoReader for FfmpegReader {
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let ictx = ffmpeg_next::format::input(path)?;

        let stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or("No video stream found")?;

        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())?;
        let decoder = codec_ctx.decoder().video()?;

        let rate = stream.rate();
        let fps = if rate.denominator() != 0 {
            rate.numerator() as f64 / rate.denominator() as f64
        } else {
            0.0
        };

        let metadata = VideoMetadata {
            width: decoder.width(),
            height: decoder.height(),
            fps,
            total_frames: stream.frames().max(0) as usize,
            codec: decoder
                .codec()
                .map(|c| c.name().to_string())
                .unwrap_or_default(),
            source_path: Some(path.to_path_buf()),
        };
        log::debug!(
            "Opened {}: {}x{} {} @ {:.2} fps, {} frames",
            path.display(),
            metadata.width,
            metadata.height,
            metadata.codec,
            metadata.fps,
            metadata.total_frames
        );

        self.video_stream_index = stream.index();
        self.input_ctx = Some(ictx);

        Ok(metadata)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        let video_stream_index = self.video_stream_index;
        let Some(ictx) = self.input_ctx.as_mut() else {
            return Box::new(std::iter::once(Err("FfmpegReader: not opened".into())));
        };

        match DecodedFrames::new(ictx, video_stream_index) {
            Ok(frames) => Box::new(frames),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }

    fn close(&mut self) {
        self.input_ctx = None;
    }
}

enum DecodeState {
    /// Packets remain in the container.
    Feeding,
    /// End of input was signalled; the decoder may still hold pictures.
    Draining,
    Finished,
}

/// Lazily decodes one video stream. Only the current picture is held.
struct DecodedFrames<'a> {
    input: &'a mut ffmpeg_next::format::context::Input,
    stream_index: usize,
    decoder: ffmpeg_next::decoder::Video,
    converter: RgbConverter,
    state: DecodeState,
    next_index: usize,
}

impl<'a> DecodedFrames<'a> {
    fn new(
        input: &'a mut ffmpeg_next::format::context::Input,
        stream_index: usize,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let stream = input
            .stream(stream_index)
            .ok_or("video stream no longer present")?;
        let decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())?
            .decoder()
            .video()?;
        let converter = RgbConverter::for_decoder(&decoder)?;

        Ok(Self {
            input,
            stream_index,
            decoder,
            converter,
            state: DecodeState::Feeding,
            next_index: 0,
        })
    }

    fn receive(&mut self) -> Option<Result<Frame, Box<dyn std::error::Error>>> {
        let mut picture = ffmpeg_next::util::frame::video::Video::empty();
        self.decoder.receive_frame(&mut picture).ok()?;
        let index = self.next_index;
        self.next_index += 1;
        Some(self.converter.convert(&picture, index))
    }

    /// Sends the next packet of our stream to the decoder, or signals end of
    /// input once the container runs dry.
    fn feed(&mut self) {
        loop {
            match self.input.packets().next() {
                Some((stream, packet)) if stream.index() == self.stream_index => {
                    match self.decoder.send_packet(&packet) {
                        Ok(()) => return,
                        Err(e) => log::debug!("Decoder rejected packet: {e}"),
                    }
                }
                Some(_) => {}
                None => {
                    if let Err(e) = self.decoder.send_eof() {
                        log::debug!("Decoder refused end of stream: {e}");
                    }
                    self.state = DecodeState::Draining;
                    return;
                }
            }
        }
    }
}

impl Iterator for DecodedFrames<'_> {
    type Item = Result<Frame, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        while !matches!(self.state, DecodeState::Finished) {
            if let Some(frame) = self.receive() {
                return Some(frame);
            }
            match self.state {
                DecodeState::Feeding => self.feed(),
                _ => self.state = DecodeState::Finished,
            }
        }
        None
    }
}

/// Converts decoded pictures of any pixel format to packed RGB24 frames.
struct RgbConverter {
    scaler: ffmpeg_next::software::scaling::Context,
    width: u32,
    height: u32,
}

impl RgbConverter {
    fn for_decoder(decoder: &ffmpeg_next::decoder::Video) -> Result<Self, ffmpeg_next::Error> {
        let (width, height) = (decoder.width(), decoder.height());
        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )?;
        Ok(Self {
            scaler,
            width,
            height,
        })
    }

    fn convert(
        &mut self,
        picture: &ffmpeg_next::util::frame::video::Video,
        index: usize,
    ) -> Result<Frame, Box<dyn std::error::Error>> {
        let mut rgb = ffmpeg_next::util::frame::video::Video::empty();
        self.scaler.run(picture, &mut rgb)?;

        // Rows may be padded past `row_bytes`.
        let row_bytes = self.width as usize * 3;
        let data: Vec<u8> = rgb
            .data(0)
            .chunks(rgb.stride(0).max(row_bytes))
            .take(self.height as usize)
            .flat_map(|row| &row[..row_bytes])
            .copied()
            .collect();
        Ok(Frame::new(data, self.width, self.height, 3, index))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Encodes `colors.len()` solid-color frames into an MPEG-4 file.
    pub(crate) fn create_test_video(path: &Path, colors: &[[u8; 3]], width: u32, height: u32) {
        let fps = 25;
        ffmpeg_next::init().unwrap();

        let mut octx = ffmpeg_next::format::output(path).unwrap();
        let global_header = octx
            .format()
            .flags()
            .contains(ffmpeg_next::format::Flags::GLOBAL_HEADER);

        let codec = ffmpeg_next::encoder::find(ffmpeg_next::codec::Id::MPEG4).unwrap();
        let mut ost = octx.add_stream(Some(codec)).unwrap();

        let mut encoder_ctx = ffmpeg_next::codec::context::Context::new_with_codec(codec)
            .encoder()
            .video()
            .unwrap();
        encoder_ctx.set_width(width);
        encoder_ctx.set_height(height);
        encoder_ctx.set_format(ffmpeg_next::format::Pixel::YUV420P);
        encoder_ctx.set_time_base(ffmpeg_next::Rational(1, fps));
        encoder_ctx.set_frame_rate(Some(ffmpeg_next::Rational(fps, 1)));
        if global_header {
            encoder_ctx.set_flags(ffmpeg_next::codec::Flags::GLOBAL_HEADER);
        }

        let mut encoder = encoder_ctx
            .open_with(ffmpeg_next::Dictionary::new())
            .unwrap();
        ost.set_parameters(&encoder);
        octx.write_header().unwrap();
        let ost_time_base = octx.stream(0).unwrap().time_base();

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            ffmpeg_next::format::Pixel::RGB24,
            width,
            height,
            ffmpeg_next::format::Pixel::YUV420P,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .unwrap();

        for (i, color) in colors.iter().enumerate() {
            let mut rgb_frame = ffmpeg_next::util::frame::video::Video::new(
                ffmpeg_next::format::Pixel::RGB24,
                width,
                height,
            );
            let stride = rgb_frame.stride(0);
            let data = rgb_frame.data_mut(0);
            for row in 0..height as usize {
                for col in 0..width as usize {
                    let offset = row * stride + col * 3;
                    data[offset..offset + 3].copy_from_slice(color);
                }
            }

            let mut yuv_frame = ffmpeg_next::util::frame::video::Video::empty();
            scaler.run(&rgb_frame, &mut yuv_frame).unwrap();
            yuv_frame.set_pts(Some(i as i64));

            encoder.send_frame(&yuv_frame).unwrap();
            let mut encoded = ffmpeg_next::Packet::empty();
            while encoder.receive_packet(&mut encoded).is_ok() {
                encoded.set_stream(0);
                encoded.rescale_ts(ffmpeg_next::Rational(1, fps), ost_time_base);
                encoded.write_interleaved(&mut octx).unwrap();
            }
        }

        encoder.send_eof().unwrap();
        let mut encoded = ffmpeg_next::Packet::empty();
        while encoder.receive_packet(&mut encoded).is_ok() {
            encoded.set_stream(0);
            encoded.rescale_ts(ffmpeg_next::Rational(1, fps), ost_time_base);
            encoded.write_interleaved(&mut octx).unwrap();
        }
        octx.write_trailer().unwrap();
    }

    fn test_video_path(dir: &Path) -> PathBuf {
        dir.join("test.mp4")
    }

    #[test]
    fn test_open_returns_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = test_video_path(dir.path());
        create_test_video(&path, &[[128, 128, 128]; 5], 160, 120);

        let mut reader = FfmpegReader::new();
        let meta = reader.open(&path).unwrap();
        assert_eq!(meta.width, 160);
        assert_eq!(meta.height, 120);
        assert!(meta.fps > 0.0);
        assert_eq!(meta.source_path, Some(path));
    }

    #[test]
    fn test_open_nonexistent_fails() {
        let mut reader = FfmpegReader::new();
        assert!(reader.open(Path::new("/nonexistent/test.mp4")).is_err());
    }

    #[test]
    fn test_frames_yields_every_frame_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = test_video_path(dir.path());
        create_test_video(&path, &[[40, 40, 40]; 5], 160, 120);

        let mut reader = FfmpegReader::new();
        reader.open(&path).unwrap();

        let frames: Vec<Frame> = reader.frames().map(|f| f.unwrap()).collect();
        assert_eq!(frames.len(), 5);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.index(), i);
            assert_eq!(frame.channels(), 3);
            assert_eq!(frame.data().len(), 160 * 120 * 3);
        }
    }

    #[test]
    fn test_decoded_colors_are_close_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = test_video_path(dir.path());
        create_test_video(&path, &[[200, 200, 200], [20, 20, 20]], 64, 64);

        let mut reader = FfmpegReader::new();
        reader.open(&path).unwrap();
        let frames: Vec<Frame> = reader.frames().map(|f| f.unwrap()).collect();

        let center = |f: &Frame| f.as_ndarray()[[32, 32, 0]] as i32;
        assert!((center(&frames[0]) - 200).abs() < 12);
        assert!((center(&frames[1]) - 20).abs() < 12);
    }

    #[test]
    fn test_frames_without_open_returns_error() {
        let mut reader = FfmpegReader::new();
        let result = reader.frames().next().unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_close_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = test_video_path(dir.path());
        create_test_video(&path, &[[0, 0, 0]], 160, 120);

        let mut reader = FfmpegReader::new();
        reader.open(&path).unwrap();
        reader.close();
        reader.close();
        assert!(reader.frames().next().unwrap().is_err());
    }
}
