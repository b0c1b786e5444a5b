//! Flag Complex Expansion
//!
//! Both filtrations in this crate are flag complexes: a simplex is present
//! as soon as all of its edges are, and it is born when its last edge is.
//! Construction is therefore split in two:
//!
//! 1. a strategy-specific weighted 1-skeleton ([`ComplexBuilder::create_1_skeleton`])
//! 2. the shared lower-neighbour clique expansion ([`incremental_expansion`])
//!
//! ## Expansion
//!
//! Starting from each vertex u with candidate set N(u) = lower neighbours
//! of u, a simplex τ is emitted and then extended by every v in its
//! candidate set. The extension τ ∪ {v} only keeps candidates that are
//! also lower neighbours of v, so every clique is generated exactly once
//! (starting from its largest vertex) and the recursion never touches
//! non-cliques.
//!
//! Reference: Zomorodian, "Fast construction of the Vietoris-Rips
//! complex", Computers & Graphics 34 (2010).

use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::*;

use super::{FilteredComplex, Graph, Simplex};

/// Strategy that produces a weighted 1-skeleton to expand
///
/// Implementors only decide which edges exist and how much they weigh;
/// [`ComplexBuilder::construct`] does the rest.
pub trait ComplexBuilder {
    /// Weighted graph on the vertices `0..vertex_count()`
    fn create_1_skeleton(&self) -> Graph;

    /// Number of vertices of the complex
    fn vertex_count(&self) -> usize;

    /// Largest simplex dimension to generate
    fn max_dimension(&self) -> usize;

    /// Build the 1-skeleton, expand it and sort into filtration order
    fn construct(&self) -> FilteredComplex {
        let graph = self.create_1_skeleton();
        debug!(
            "1-skeleton: {} vertices, {} edges",
            self.vertex_count(),
            graph.num_edges()
        );
        incremental_expansion(&graph, self.vertex_count(), self.max_dimension())
    }
}

/// Expand a weighted graph into its flag complex up to dimension `k`
///
/// Vertices are born at 0, edges at their weight, and higher simplices at
/// the largest weight among their edges. The returned complex is already
/// in filtration order.
pub fn incremental_expansion(graph: &Graph, n_vertices: usize, k: usize) -> FilteredComplex {
    // Each starting vertex owns its own output; concatenating in vertex
    // order keeps the pre-sort sequence independent of scheduling.
    let per_vertex: Vec<Vec<(Simplex, f64)>> = (0..n_vertices)
        .into_par_iter()
        .map(|u| {
            let mut out = Vec::new();
            add_cofaces(graph, k, Simplex::vertex(u), graph.lower_neighbors(u), 0.0, &mut out);
            out
        })
        .collect();

    let total: usize = per_vertex.iter().map(Vec::len).sum();
    let mut complex = FilteredComplex::with_capacity(total);
    for (simplex, value) in per_vertex.into_iter().flatten() {
        complex.add(simplex, value);
    }
    complex.finalize();

    debug!(
        "expanded to {} simplices (dimension cap {}), per dimension {:?}",
        complex.len(),
        k,
        complex.count_by_dimension()
    );
    complex
}

fn add_cofaces(
    graph: &Graph,
    k: usize,
    tau: Simplex,
    candidates: BTreeSet<usize>,
    filtration_value: f64,
    out: &mut Vec<(Simplex, f64)>,
) {
    out.push((tau.clone(), filtration_value));
    if tau.dimension() >= k {
        return;
    }

    for &v in &candidates {
        let sigma = tau.append_to(v);
        let next_candidates = graph.intersect_with_lower_neighbors(&candidates, v);

        let weight = if sigma.dimension() == 1 {
            edge_weight(graph, sigma[0], sigma[1])
        } else {
            tau.vertices()
                .iter()
                .map(|&t| edge_weight(graph, t, v))
                .fold(filtration_value, f64::max)
        };

        add_cofaces(graph, k, sigma, next_candidates, weight, out);
    }
}

/// Weight of an edge the expansion knows to exist
#[inline]
fn edge_weight(graph: &Graph, a: usize, b: usize) -> f64 {
    let weight = graph.weight(a, b);
    debug_assert!(weight.is_some(), "expansion reached a missing edge [{}, {}]", a, b);
    weight.unwrap_or(0.0)
}
