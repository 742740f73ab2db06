use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::color::domain::color_reducer::ColorReducer;
use crate::color::infrastructure::kmeans::{kmeans, KMeansParams, Point};
use crate::shared::color::Color;
use crate::shared::constants::{
    DOMINANT_ATTEMPTS, DOMINANT_CLUSTERS, DOMINANT_EPSILON, DOMINANT_MAX_ITERATIONS,
};
use crate::shared::error::PaletteError;
use crate::shared::frame::Frame;

pub const DEFAULT_PARAMS: KMeansParams = KMeansParams {
    clusters: DOMINANT_CLUSTERS,
    max_iterations: DOMINANT_MAX_ITERATIONS,
    epsilon: DOMINANT_EPSILON,
    attempts: DOMINANT_ATTEMPTS,
};

/// Picks the centroid of the most populated k-means cluster.
///
/// Clustering is randomized; the generator is owned by the reducer and can
/// be seeded for reproducible output. Whatever the seed, the result is one
/// of the cluster centroids, and a single-color frame always yields that
/// exact color.
pub struct DominantColorReducer {
    params: KMeansParams,
    rng: ChaCha8Rng,
}

impl DominantColorReducer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_params(DEFAULT_PARAMS, rng)
    }

    pub fn with_params(params: KMeansParams, rng: ChaCha8Rng) -> Self {
        Self { params, rng }
    }
}

impl ColorReducer for DominantColorReducer {
    fn reduce(&mut self, frame: &Frame) -> Result<Color, Box<dyn std::error::Error>> {
        if frame.channels() < 3 {
            return Err(format!("expected 3 channels, frame has {}", frame.channels()).into());
        }
        let points: Vec<Point> = frame
            .pixels()
            .map(|p| [p[0] as f64, p[1] as f64, p[2] as f64])
            .collect();

        let clustering =
            kmeans(&points, &self.params, &mut self.rng).ok_or(PaletteError::EmptyFrame {
                index: frame.index(),
            })?;
        let dominant = clustering.centers[clustering.largest_cluster()];
        Ok(Color::from(dominant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `a` pixels of `first` followed by `b` pixels of `second`, one row.
    fn two_color_frame(first: [u8; 3], a: usize, second: [u8; 3], b: usize) -> Frame {
        let mut data = Vec::with_capacity((a + b) * 3);
        for _ in 0..a {
            data.extend_from_slice(&first);
        }
        for _ in 0..b {
            data.extend_from_slice(&second);
        }
        Frame::new(data, (a + b) as u32, 1, 3, 0)
    }

    fn noisy_frame() -> Frame {
        let data: Vec<u8> = (0..40 * 30 * 3u32).map(|i| (i * 7919 % 251) as u8).collect();
        Frame::new(data, 40, 30, 3, 0)
    }

    #[test]
    fn test_uniform_frame_always_returns_exact_color() {
        let frame = Frame::filled(16, 9, [10, 20, 30], 0);
        let mut reducer = DominantColorReducer::new(None);
        for _ in 0..5 {
            assert_eq!(
                reducer.reduce(&frame).unwrap(),
                Color::new(10.0, 20.0, 30.0)
            );
        }
    }

    #[test]
    fn test_majority_color_wins() {
        let frame = two_color_frame([200, 30, 30], 70, [20, 20, 220], 30);
        let color = DominantColorReducer::new(Some(7)).reduce(&frame).unwrap();
        assert_eq!(color, Color::new(200.0, 30.0, 30.0));
    }

    #[test]
    fn test_result_is_a_cluster_centroid() {
        let frame = noisy_frame();
        let color = DominantColorReducer::new(Some(42)).reduce(&frame).unwrap();

        let points: Vec<Point> = frame
            .pixels()
            .map(|p| [p[0] as f64, p[1] as f64, p[2] as f64])
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let clustering = kmeans(&points, &DEFAULT_PARAMS, &mut rng).unwrap();

        assert!(clustering
            .centers
            .iter()
            .any(|c| Color::from(*c) == color));
        assert_eq!(
            Color::from(clustering.centers[clustering.largest_cluster()]),
            color
        );
    }

    #[test]
    fn test_same_seed_reproduces_result() {
        let frame = noisy_frame();
        let a = DominantColorReducer::new(Some(99)).reduce(&frame).unwrap();
        let b = DominantColorReducer::new(Some(99)).reduce(&frame).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_result_within_pixel_range() {
        let color = DominantColorReducer::new(Some(1))
            .reduce(&noisy_frame())
            .unwrap();
        for c in color.channels() {
            assert!((0.0..=255.0).contains(&c));
        }
    }

    #[test]
    fn test_tiny_frame_with_fewer_pixels_than_clusters() {
        let frame = two_color_frame([0, 0, 0], 2, [255, 255, 255], 1);
        let color = DominantColorReducer::new(Some(3)).reduce(&frame).unwrap();
        assert_eq!(color, Color::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_frame_errors() {
        let frame = Frame::filled(0, 3, [0, 0, 0], 2);
        let err = DominantColorReducer::new(Some(0)).reduce(&frame).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PaletteError>(),
            Some(PaletteError::EmptyFrame { index: 2 })
        ));
    }
}
