//! Vietoris-Rips Complex Construction
//!
//! The Vietoris-Rips complex VR_ε(X) is a simplicial complex where:
//! - 0-simplices are the points in X
//! - A k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ ε for all i,j
//!
//! Sweeping ε from 0 to the maximum filtration value gives a filtration in
//! which each simplex is born at its diameter.

use log::trace;
use rayon::prelude::*;

use super::{ComplexBuilder, Graph};
use crate::metric::MetricSpace;

/// Vietoris-Rips filtration builder
pub struct VietorisRips<'a, M: MetricSpace + ?Sized> {
    /// Input points
    space: &'a M,
    /// Largest edge length kept in the 1-skeleton
    max_filtration: f64,
    /// Largest simplex dimension generated
    max_dimension: usize,
}

impl<'a, M: MetricSpace + Sync + ?Sized> VietorisRips<'a, M> {
    pub fn new(space: &'a M, max_filtration: f64, max_dimension: usize) -> Self {
        Self {
            space,
            max_filtration,
            max_dimension,
        }
    }

    pub fn max_filtration(&self) -> f64 {
        self.max_filtration
    }
}

impl<'a, M: MetricSpace + Sync + ?Sized> ComplexBuilder for VietorisRips<'a, M> {
    /// Every pair within the maximum filtration value, weighted by distance
    fn create_1_skeleton(&self) -> Graph {
        let n = self.space.size();
        let max_filtration = self.max_filtration;

        // Rows are independent; merging them in row order keeps the graph
        // identical to a sequential scan.
        let rows: Vec<Vec<(usize, usize, f64)>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (i + 1..n)
                    .filter_map(|j| {
                        let d = self.space.distance(i, j);
                        (d <= max_filtration).then_some((i, j, d))
                    })
                    .collect()
            })
            .collect();

        let mut graph = Graph::new();
        for (i, j, d) in rows.into_iter().flatten() {
            graph.add_edge(i, j, d);
        }
        trace!("VR 1-skeleton at threshold {}: {} edges", max_filtration, graph.num_edges());
        graph
    }

    fn vertex_count(&self) -> usize {
        self.space.size()
    }

    fn max_dimension(&self) -> usize {
        self.max_dimension
    }
}
