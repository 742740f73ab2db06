use ndarray::{Array3, ArrayView3};

/// A dense grid of pixels: contiguous bytes in row-major order.
///
/// Used both for decoded video frames and for the palette image the
/// compositor produces. Channel order is whatever the decoder emitted; the
/// domain layer treats each pixel as an opaque triplet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    /// Builds a 3-channel frame where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: [u8; 3], index: usize) -> Self {
        let count = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(count * 3);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self::new(data, width, height, 3, index)
    }

    /// Takes ownership of a `(height, width, channels)` array.
    pub fn from_ndarray(array: Array3<u8>, index: usize) -> Self {
        let (height, width, channels) = array.dim();
        // Logical iteration order is row-major regardless of memory layout.
        let data: Vec<u8> = array.iter().copied().collect();
        Self::new(data, width as u32, height as u32, channels as u8, index)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Position of this frame in decode order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Iterates over pixels as channel slices, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks_exact(self.channels.max(1) as usize)
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
