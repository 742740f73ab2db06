use std::fmt;

/// A representative color for one sampled frame.
///
/// Stored as floating point because means and cluster centroids are
/// rarely integral. Channel order follows the decoder (C0/C1/C2).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    channels: [f64; 3],
}

impl Color {
    pub fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self {
            channels: [c0, c1, c2],
        }
    }

    pub fn channels(&self) -> [f64; 3] {
        self.channels
    }

    /// Rounds each channel to the nearest integer, saturating to 0..=255.
    pub fn to_pixel(&self) -> [u8; 3] {
        self.channels.map(|c| {
            if c.is_nan() {
                0
            } else {
                c.round().clamp(0.0, 255.0) as u8
            }
        })
    }
}

impl From<[f64; 3]> for Color {
    fn from(channels: [f64; 3]) -> Self {
        Self { channels }
    }
}

impl From<[u8; 3]> for Color {
    fn from(pixel: [u8; 3]) -> Self {
        Self {
            channels: pixel.map(f64::from),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c0, c1, c2] = self.channels;
        write!(f, "({c0:.1}, {c1:.1}, {c2:.1})")
    }
}
