//! Coordinate Metrics
//!
//! Distances between two rows of a point matrix.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::error::PhomError;

/// Distance function between two coordinate vectors
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Metric {
    /// L2 norm of the difference
    #[default]
    Euclidean,
    /// L∞ norm of the difference
    Maximum,
    /// L1 norm of the difference
    Manhattan,
    /// Σ |x - y| / |x + y| over coordinates where x + y ≠ 0
    Canberra,
    /// Fraction of mismatched non-zero flags among coordinates where
    /// at least one side is non-zero
    Binary,
    /// Lp norm of the difference with exponent p > 0
    Minkowski(f64),
}

impl Metric {
    /// Check the metric parameters
    pub fn validate(&self) -> Result<(), PhomError> {
        match *self {
            Metric::Minkowski(p) if !(p.is_finite() && p > 0.0) => Err(PhomError::invalid(
                "minkowski_p",
                format!("exponent must be finite and positive, got {}", p),
            )),
            _ => Ok(()),
        }
    }

    /// Compute the distance between two points
    pub fn distance(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        debug_assert_eq!(a.len(), b.len());
        let pairs = a.iter().zip(b.iter());

        match *self {
            Metric::Euclidean => pairs
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<f64>()
                .sqrt(),
            Metric::Maximum => pairs.map(|(x, y)| (x - y).abs()).fold(0.0, f64::max),
            Metric::Manhattan => pairs.map(|(x, y)| (x - y).abs()).sum(),
            Metric::Canberra => pairs
                .filter_map(|(x, y)| {
                    let sum = (x + y).abs();
                    if sum != 0.0 {
                        Some((x - y).abs() / sum)
                    } else {
                        None
                    }
                })
                .sum(),
            Metric::Binary => {
                let mut numerator = 0usize;
                let mut denominator = 0usize;
                for (x, y) in pairs {
                    let (x, y) = (*x != 0.0, *y != 0.0);
                    if x || y {
                        denominator += 1;
                        if x ^ y {
                            numerator += 1;
                        }
                    }
                }
                if denominator > 0 {
                    numerator as f64 / denominator as f64
                } else {
                    0.0
                }
            }
            Metric::Minkowski(p) => pairs
                .map(|(x, y)| (x - y).abs().powf(p))
                .sum::<f64>()
                .powf(1.0 / p),
        }
    }
}
