use crate::shared::frame::Frame;

type FrameResult = Result<Frame, Box<dyn std::error::Error>>;

/// Selects every `stride + 1`-th frame from a decoded frame stream,
/// starting with the first.
///
/// Skipped frames are read and discarded in order. The sequence ends when
/// the source is exhausted or a read fails; a failed read is logged and
/// treated as the end of the video.
pub struct FrameSampler<I> {
    frames: I,
    stride: usize,
    pending_skip: usize,
    frames_read: usize,
    done: bool,
}

impl<I> FrameSampler<I>
where
    I: Iterator<Item = FrameResult>,
{
    pub fn new(frames: I, stride: usize) -> Self {
        Self {
            frames,
            stride,
            pending_skip: 0,
            frames_read: 0,
            done: false,
        }
    }

    /// Frames pulled from the source so far, selected or skipped.
    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    fn read(&mut self) -> Option<Frame> {
        if self.done {
            return None;
        }
        match self.frames.next() {
            Some(Ok(frame)) => {
                self.frames_read += 1;
                Some(frame)
            }
            Some(Err(e)) => {
                log::warn!(
                    "Stopping after {} frames: read failed: {e}",
                    self.frames_read
                );
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl<I> Iterator for FrameSampler<I>
where
    I: Iterator<Item = FrameResult>,
{
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        while self.pending_skip > 0 {
            self.read()?;
            self.pending_skip -= 1;
        }
        let frame = self.read()?;
        self.pending_skip = self.stride;
        Some(frame)
    }
}
