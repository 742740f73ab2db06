/// Strips concatenated into one sub-palette before it is set aside.
pub const PALETTE_BATCH_SIZE: usize = 500;

/// Width of the color marker appended to frames sent to a display sink.
pub const DISPLAY_STRIP_WIDTH: u32 = 20;

/// Display pump tick between frames, in milliseconds.
pub const DISPLAY_WAIT_MS: u64 = 1;

pub const DEFAULT_PALETTE_WIDTH: u32 = 1920;
pub const DEFAULT_PALETTE_HEIGHT: u32 = 1080;

/// Clusters used by the dominant color reducer.
pub const DOMINANT_CLUSTERS: usize = 5;
/// Iteration cap for a single k-means attempt.
pub const DOMINANT_MAX_ITERATIONS: usize = 200;
/// A k-means attempt converges once no center moves farther than this.
pub const DOMINANT_EPSILON: f64 = 0.1;
/// Independent k-means attempts; the most compact one wins.
pub const DOMINANT_ATTEMPTS: usize = 10;
