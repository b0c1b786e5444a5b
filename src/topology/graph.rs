//! Weighted 1-Skeleton
//!
//! Undirected weighted graph stored by its lower adjacency: each vertex y
//! maps to the neighbours x < y and the weight of [x, y]. Lower
//! neighbourhoods are exactly what the clique expansion consumes.

use std::collections::{BTreeMap, BTreeSet};

/// Sparse symmetric weighted adjacency without self-loops
#[derive(Debug, Clone, Default)]
pub struct Graph {
    lower: BTreeMap<usize, BTreeMap<usize, f64>>,
    n_edges: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or reweight the edge {i, j}; self-loops are ignored
    pub fn add_edge(&mut self, i: usize, j: usize, weight: f64) {
        if i == j {
            return;
        }
        let (x, y) = if i < j { (i, j) } else { (j, i) };
        if self
            .lower
            .entry(y)
            .or_default()
            .insert(x, weight)
            .is_none()
        {
            self.n_edges += 1;
        }
    }

    /// Weight of {i, j} if the edge exists
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        let (x, y) = if i < j { (i, j) } else { (j, i) };
        self.lower.get(&y)?.get(&x).copied()
    }

    /// Neighbours of `y` with a smaller index
    pub fn lower_neighbors(&self, y: usize) -> BTreeSet<usize> {
        self.lower
            .get(&y)
            .map(|adj| adj.keys().copied().collect())
            .unwrap_or_default()
    }

    /// `set` ∩ lower_neighbors(y)
    pub fn intersect_with_lower_neighbors(&self, set: &BTreeSet<usize>, y: usize) -> BTreeSet<usize> {
        match self.lower.get(&y) {
            Some(adj) => adj.keys().filter(|x| set.contains(x)).copied().collect(),
            None => BTreeSet::new(),
        }
    }

    pub fn num_edges(&self) -> usize {
        self.n_edges
    }

    /// All edges as (x, y, weight) with x < y, ordered by y then x
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.lower
            .iter()
            .flat_map(|(&y, adj)| adj.iter().map(move |(&x, &w)| (x, y, w)))
    }
}
