//! Sample Point Clouds
//!
//! Small generators used by the demo binary, the benchmarks and the tests.
//! Randomized generators draw from the caller's generator so that a fixed
//! seed reproduces the same cloud.

use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::f64::consts::PI;

/// `n` random points on the unit `d`-sphere embedded in ℝ^(d+1)
///
/// Each point is a standard Gaussian vector scaled to unit length, which
/// gives the uniform distribution on the sphere.
pub fn random_sphere_points<R: Rng + ?Sized>(n: usize, d: usize, rng: &mut R) -> Array2<f64> {
    let dim = d + 1;
    let mut points = Array2::zeros((n, dim));

    for i in 0..n {
        loop {
            for j in 0..dim {
                points[[i, j]] = StandardNormal.sample(rng);
            }
            let norm = points.row(i).iter().map(|x| x * x).sum::<f64>().sqrt();
            // A zero vector has no direction; draw again
            if norm > 0.0 {
                points.row_mut(i).mapv_inplace(|x| x / norm);
                break;
            }
        }
    }

    points
}

/// `n` evenly spaced points on a circle of the given radius in ℝ²
pub fn circle_points(n: usize, radius: f64) -> Array2<f64> {
    let mut points = Array2::zeros((n, 2));

    for i in 0..n {
        let theta = 2.0 * PI * (i as f64) / (n as f64);
        points[[i, 0]] = radius * theta.cos();
        points[[i, 1]] = radius * theta.sin();
    }

    points
}

/// `n` points uniform in the unit cube [0, 1]^d
pub fn uniform_cube_points<R: Rng + ?Sized>(n: usize, d: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_simple_fn((n, d), || rng.random::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sphere_points_unit_norm() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = random_sphere_points(50, 2, &mut rng);

        assert_eq!(points.dim(), (50, 3));
        for row in points.rows() {
            let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_sphere_points_reproducible() {
        let a = random_sphere_points(10, 1, &mut StdRng::seed_from_u64(3));
        let b = random_sphere_points(10, 1, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_circle_points() {
        let points = circle_points(4, 2.0);
        assert!((points[[0, 0]] - 2.0).abs() < 1e-12);
        assert!((points[[1, 1]] - 2.0).abs() < 1e-12);
        assert!((points[[2, 0]] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cube_points_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let points = uniform_cube_points(20, 3, &mut rng);
        assert_eq!(points.dim(), (20, 3));
        assert!(points.iter().all(|&x| (0.0..1.0).contains(&x)));
    }
}
