//! Metric Module: Finite Metric Spaces for Complex Construction
//!
//! Every filtration in this crate is built from a finite metric space,
//! seen only through the [`MetricSpace`] capability: a point count and a
//! pairwise distance. Concrete spaces are provided for the two common
//! inputs:
//!
//! - [`ExplicitMetricSpace`]: a precomputed square distance matrix
//! - [`PointCloudMetricSpace`]: rows of coordinates plus a [`Metric`]
//!
//! ## Preconditions
//!
//! Distances are assumed non-negative, symmetric and zero on the
//! diagonal. None of this is checked; a malformed space produces a
//! meaningless filtration rather than an error.

mod distance;
mod point_cloud;
mod space;

pub use distance::Metric;
pub use point_cloud::{circle_points, random_sphere_points, uniform_cube_points};
pub use space::{ExplicitMetricSpace, MetricSpace, PointCloudMetricSpace, DEFAULT_DIAMETER_SAMPLES};
