//! Metric Space Trait: the Only View the Core Has of Its Input
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     MetricSpace Trait                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  + size()               - Number of points                  │
//! │  + distance(i, j)       - Pairwise distance                 │
//! │  + estimate_diameter()  - Sampled upper-bound heuristic     │
//! │  + distance_matrix()    - Dense symmetric matrix            │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use ndarray::Array2;
use rand::{Rng, RngCore};

use super::Metric;
use crate::error::PhomError;

/// Number of random pairs drawn by [`MetricSpace::estimate_diameter`]
/// when no explicit sample count is wanted
pub const DEFAULT_DIAMETER_SAMPLES: usize = 100;

/// Finite metric space on the points `0..size()`
pub trait MetricSpace {
    /// Distance between points `i` and `j`
    fn distance(&self, i: usize, j: usize) -> f64;

    /// Number of points
    fn size(&self) -> usize;

    /// Estimate the diameter from `samples` random index pairs
    ///
    /// Returns the largest sampled distance, which is a lower bound on the
    /// true diameter and is used as a scale heuristic only. An empty space
    /// has diameter 0.
    fn estimate_diameter(&self, samples: usize, rng: &mut dyn RngCore) -> f64 {
        let n = self.size();
        if n == 0 {
            return 0.0;
        }

        let mut max = 0.0;
        for _ in 0..samples {
            let i = rng.random_range(0..n);
            let j = rng.random_range(0..n);
            let d = self.distance(i, j);
            if d > max {
                max = d;
            }
        }
        max
    }

    /// Materialize all pairwise distances
    fn distance_matrix(&self) -> Array2<f64> {
        let n = self.size();
        let mut dm = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in i + 1..n {
                let d = self.distance(i, j);
                dm[[i, j]] = d;
                dm[[j, i]] = d;
            }
        }

        dm
    }
}

impl<M: MetricSpace + ?Sized> MetricSpace for &M {
    fn distance(&self, i: usize, j: usize) -> f64 {
        (**self).distance(i, j)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}

/// Metric space given by a precomputed distance matrix
#[derive(Debug, Clone)]
pub struct ExplicitMetricSpace {
    distances: Array2<f64>,
}

impl ExplicitMetricSpace {
    /// Wrap a square distance matrix
    pub fn new(distances: Array2<f64>) -> Result<Self, PhomError> {
        let (rows, cols) = distances.dim();
        if rows != cols {
            return Err(PhomError::NonSquareDistanceMatrix { rows, cols });
        }
        Ok(Self { distances })
    }

    /// Compute the distance matrix of a point cloud once and keep it
    pub fn from_points(points: &Array2<f64>, metric: Metric) -> Result<Self, PhomError> {
        metric.validate()?;
        let cloud = PointCloudMetricSpace {
            points: points.clone(),
            metric,
        };
        Ok(Self {
            distances: cloud.distance_matrix(),
        })
    }

    /// Underlying matrix
    pub fn distances(&self) -> &Array2<f64> {
        &self.distances
    }
}

impl MetricSpace for ExplicitMetricSpace {
    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[[i, j]]
    }

    fn size(&self) -> usize {
        self.distances.nrows()
    }

    fn distance_matrix(&self) -> Array2<f64> {
        self.distances.clone()
    }
}

/// Metric space of point coordinates, distances computed on demand
#[derive(Debug, Clone)]
pub struct PointCloudMetricSpace {
    points: Array2<f64>,
    metric: Metric,
}

impl PointCloudMetricSpace {
    /// One point per row
    pub fn new(points: Array2<f64>, metric: Metric) -> Result<Self, PhomError> {
        metric.validate()?;
        Ok(Self { points, metric })
    }

    /// Euclidean point cloud
    pub fn euclidean(points: Array2<f64>) -> Self {
        Self {
            points,
            metric: Metric::Euclidean,
        }
    }

    pub fn points(&self) -> &Array2<f64> {
        &self.points
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Ambient dimension of the coordinates
    pub fn ambient_dimension(&self) -> usize {
        self.points.ncols()
    }
}

impl MetricSpace for PointCloudMetricSpace {
    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        self.metric.distance(self.points.row(i), self.points.row(j))
    }

    fn size(&self) -> usize {
        self.points.nrows()
    }
}
