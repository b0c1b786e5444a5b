//! Lazy Witness Complex
//!
//! A landmark-based approximation of the Vietoris-Rips filtration. Only the
//! L landmarks become vertices; all N points of the space act as witnesses.
//!
//! ## Construction
//!
//! With D the L×N matrix of landmark-to-point distances:
//!
//! ```text
//!   m[n]    = ν-th entry of sort({0} ∪ column n of D)      (m[n] = 0 if ν = 0)
//!
//!   e(a, b) = min   max( max(D[a,n], D[b,n]) - m[n], 0 )
//!              n
//! ```
//!
//! The edge [a, b] is present when e(a, b) < max filtration value, and the
//! clique expansion then proceeds exactly as for Vietoris-Rips.
//!
//! Reference: de Silva & Carlsson, "Topological estimation using witness
//! complexes", SPBG (2004).

use log::trace;
use ndarray::{Array1, Array2};
use rayon::prelude::*;

use super::{ComplexBuilder, Graph};
use crate::metric::MetricSpace;

/// Witness rank used for the per-point bound m[n]
pub const DEFAULT_NU: usize = 2;

/// Lazy witness filtration builder on a fixed landmark set
pub struct LazyWitness<'a, M: MetricSpace + ?Sized> {
    space: &'a M,
    /// Indices of the landmark points; landmark `l` becomes vertex `l`
    landmarks: Vec<usize>,
    max_filtration: f64,
    max_dimension: usize,
    nu: usize,
}

impl<'a, M: MetricSpace + Sync + ?Sized> LazyWitness<'a, M> {
    pub fn new(space: &'a M, landmarks: Vec<usize>, max_filtration: f64, max_dimension: usize) -> Self {
        Self {
            space,
            landmarks,
            max_filtration,
            max_dimension,
            nu: DEFAULT_NU,
        }
    }

    /// Override the witness rank ν (0 disables the per-point bound)
    pub fn with_nu(mut self, nu: usize) -> Self {
        self.nu = nu;
        self
    }

    pub fn landmarks(&self) -> &[usize] {
        &self.landmarks
    }

    pub fn nu(&self) -> usize {
        self.nu
    }

    /// L×N distances from every landmark to every point
    pub fn landmark_distances(&self) -> Array2<f64> {
        let n = self.space.size();
        Array2::from_shape_fn((self.landmarks.len(), n), |(l, p)| {
            self.space.distance(self.landmarks[l], p)
        })
    }

    /// Per-witness bound m[n]
    fn witness_bounds(&self, d: &Array2<f64>) -> Array1<f64> {
        if self.nu == 0 {
            return Array1::zeros(d.ncols());
        }
        let nu = self.nu;
        Array1::from_iter(d.columns().into_iter().map(|column| {
            let mut sorted: Vec<f64> = std::iter::once(0.0).chain(column.iter().copied()).collect();
            sorted.sort_by(f64::total_cmp);
            sorted[nu.min(sorted.len() - 1)]
        }))
    }
}

impl<'a, M: MetricSpace + Sync + ?Sized> ComplexBuilder for LazyWitness<'a, M> {
    fn create_1_skeleton(&self) -> Graph {
        let d = self.landmark_distances();
        let m = self.witness_bounds(&d);
        let n_landmarks = self.landmarks.len();
        let max_filtration = self.max_filtration;

        let rows: Vec<Vec<(usize, usize, f64)>> = (0..n_landmarks)
            .into_par_iter()
            .map(|i| {
                let row_i = d.row(i);
                (i + 1..n_landmarks)
                    .filter_map(|j| {
                        let row_j = d.row(j);
                        let e = row_i
                            .iter()
                            .zip(row_j.iter())
                            .zip(m.iter())
                            .map(|((&d_in, &d_jn), &m_n)| (d_in.max(d_jn) - m_n).max(0.0))
                            .fold(f64::INFINITY, f64::min);
                        // a space without witnesses leaves every edge at 0
                        let e = if e.is_finite() { e } else { 0.0 };
                        (e < max_filtration).then_some((i, j, e))
                    })
                    .collect()
            })
            .collect();

        let mut graph = Graph::new();
        for (i, j, e) in rows.into_iter().flatten() {
            graph.add_edge(i, j, e);
        }
        trace!(
            "lazy witness 1-skeleton on {} landmarks, {} witnesses: {} edges",
            n_landmarks,
            d.ncols(),
            graph.num_edges()
        );
        graph
    }

    fn vertex_count(&self) -> usize {
        self.landmarks.len()
    }

    fn max_dimension(&self) -> usize {
        self.max_dimension
    }
}
