//! Point generators and brute-force reference queries, shared by the unit
//! tests, the integration tests and the benchmarks.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::nearest_neighbour::NearestNeighbour;
use crate::point::Point;
use crate::rect::Rect;

/// Deterministic RNG so that failures reproduce
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `qty` points drawn uniformly from `[0, extent)` on both axes
pub fn rand_points<R: Rng>(rng: &mut R, qty: usize, extent: f64) -> Vec<Point> {
    (0..qty)
        .map(|_| Point::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
        .collect()
}

/// Integer grid `(i, j)` for `i in 0..width`, `j in 0..height`, column by
/// column. Sorted input, so insertion-order trees built from it are deep.
pub fn grid_points(width: usize, height: usize) -> Vec<Point> {
    (0..width)
        .flat_map(|i| (0..height).map(move |j| Point::new(i as f64, j as f64)))
        .collect()
}

pub fn linear_range_orthogonal(points: &[Point], rect: &Rect) -> Vec<Point> {
    points.iter().filter(|p| rect.contains(p)).copied().collect()
}

pub fn linear_range_circular(points: &[Point], center: &Point, radius: f64) -> Vec<Point> {
    points
        .iter()
        .filter(|p| p.distance(center) <= radius)
        .copied()
        .collect()
}

/// The `qty` nearest points to `query`, by a stable sort on distance.
pub fn linear_nearest_n(points: &[Point], query: &Point, qty: usize) -> Vec<NearestNeighbour> {
    let mut all: Vec<_> = points
        .iter()
        .map(|p| NearestNeighbour {
            distance: p.distance(query),
            point: *p,
        })
        .collect();
    all.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    all.truncate(qty);
    all
}

/// Orders points by `x` then `y`, so that query results can be compared
/// regardless of traversal order.
pub fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points
}
