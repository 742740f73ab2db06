//! k-means over 3-channel pixels, backed by `kmeans_colors`.
//!
//! Each attempt is a seeded `get_kmeans` run on pixels scaled to 0..1. The
//! run's centroids are then polished in `f64`: every pixel is labelled with
//! its nearest centroid and each center becomes the exact mean of its
//! pixels, so a cluster of identical pixels has exactly their value. The
//! attempt with the lowest compactness (sum of squared distances to the
//! assigned centers) is kept.

use std::collections::HashSet;

use kmeans_colors::get_kmeans;
use palette::Srgb;
use rand::Rng;

pub type Point = [f64; 3];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KMeansParams {
    pub clusters: usize,
    pub max_iterations: usize,
    /// Largest center movement, in 0..=255 units, that counts as converged.
    pub epsilon: f64,
    pub attempts: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Clustering {
    pub centers: Vec<Point>,
    pub labels: Vec<usize>,
    pub compactness: f64,
}

impl Clustering {
    /// Points assigned to each center.
    pub fn counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.centers.len()];
        for &label in &self.labels {
            counts[label] += 1;
        }
        counts
    }

    /// Index of the center with the most points; ties go to the lowest index.
    pub fn largest_cluster(&self) -> usize {
        let counts = self.counts();
        let mut best = 0;
        for (i, &count) in counts.iter().enumerate() {
            if count > counts[best] {
                best = i;
            }
        }
        best
    }
}

/// Clusters `points`, or returns `None` when there are none.
///
/// Asks for at most as many clusters as there are distinct points. Each
/// attempt draws its seed from `rng`.
pub fn kmeans<R: Rng>(points: &[Point], params: &KMeansParams, rng: &mut R) -> Option<Clustering> {
    if points.is_empty() {
        return None;
    }
    let k = params
        .clusters
        .min(u8::MAX as usize)
        .min(distinct_up_to(points, params.clusters))
        .max(1);
    let pixels: Vec<Srgb> = points
        .iter()
        .map(|p| Srgb::new((p[0] / 255.0) as f32, (p[1] / 255.0) as f32, (p[2] / 255.0) as f32))
        .collect();
    let converge = (params.epsilon / 255.0).powi(2) as f32;

    let mut best: Option<Clustering> = None;
    for _ in 0..params.attempts.max(1) {
        let run = get_kmeans(k, params.max_iterations, converge, false, &pixels, rng.gen());
        let seeds: Vec<Point> = run
            .centroids
            .iter()
            .map(|c| [c.red as f64 * 255.0, c.green as f64 * 255.0, c.blue as f64 * 255.0])
            .collect();
        let attempt = polish(points, &seeds);

        if best
            .as_ref()
            .map_or(true, |b| attempt.compactness < b.compactness)
        {
            best = Some(attempt);
        }
    }
    best
}

/// Labels each point with its nearest seed, then replaces every seed that
/// received points with their mean.
fn polish(points: &[Point], seeds: &[Point]) -> Clustering {
    let labels: Vec<usize> = points.iter().map(|p| nearest_center(p, seeds)).collect();

    let mut sums = vec![[0.0; 3]; seeds.len()];
    let mut counts = vec![0usize; seeds.len()];
    for (p, &label) in points.iter().zip(&labels) {
        for c in 0..3 {
            sums[label][c] += p[c];
        }
        counts[label] += 1;
    }
    let centers: Vec<Point> = seeds
        .iter()
        .zip(sums.iter().zip(&counts))
        .map(|(seed, (sum, &count))| match count {
            0 => *seed,
            n => sum.map(|s| s / n as f64),
        })
        .collect();

    let compactness = points
        .iter()
        .zip(&labels)
        .map(|(p, &label)| distance_sq(p, &centers[label]))
        .sum();
    Clustering {
        centers,
        labels,
        compactness,
    }
}

/// Number of distinct points, counting no further than `limit`.
fn distinct_up_to(points: &[Point], limit: usize) -> usize {
    let mut seen = HashSet::new();
    for p in points {
        seen.insert(p.map(f64::to_bits));
        if seen.len() >= limit {
            break;
        }
    }
    seen.len()
}

fn nearest_center(point: &Point, centers: &[Point]) -> usize {
    let mut best = (0, f64::INFINITY);
    for (i, center) in centers.iter().enumerate() {
        let d = distance_sq(point, center);
        if d < best.1 {
            best = (i, d);
        }
    }
    best.0
}

fn distance_sq(a: &Point, b: &Point) -> f64 {
    (0..3).map(|c| (a[c] - b[c]) * (a[c] - b[c])).sum()
}
