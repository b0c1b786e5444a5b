//! Persistent Homology via Boundary Reduction over Z/2
//!
//! Simplices are processed in filtration order. Each one either creates a
//! new homology class or destroys one, which is decided by reducing its
//! boundary against the columns already seen.
//!
//! ## Algorithm Overview
//!
//! ```text
//! for s in filtration order (dimension ≤ max_dimension + 1):
//!     d ← marked facets of s
//!     while T[pivot(d)] is non-empty:  d ← d + T[pivot(d)]      (mod 2)
//!     d = 0  →  s is marked (creator)
//!     d ≠ 0  →  T[pivot(d)] ← d;  emit [t(pivot), t(s)) in dim(pivot)
//!
//! every marked simplex with empty T entry  →  [t, ∞)
//! ```
//!
//! The pivot of a chain is its largest simplex in filtration order
//! (value, then simplex order). Zero-length pairs are not emitted.
//!
//! ## Reference
//!
//! Zomorodian & Carlsson (2005). "Computing Persistent Homology".
//! Discrete & Computational Geometry 33.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use log::debug;

use super::{BarcodeCollection, FilteredComplex, Simplex};

/// Default largest homology dimension reported
pub const DEFAULT_MAX_DIMENSION: usize = 2;

/// A mod-2 chain: the set of simplices with coefficient 1
#[derive(Debug, Clone, Default, PartialEq)]
struct Chain {
    simplices: BTreeSet<Simplex>,
}

impl Chain {
    fn is_zero(&self) -> bool {
        self.simplices.is_empty()
    }

    fn contains(&self, s: &Simplex) -> bool {
        self.simplices.contains(s)
    }

    /// Largest simplex in filtration order
    fn pivot<'a>(&'a self, complex: &FilteredComplex) -> Option<&'a Simplex> {
        self.simplices
            .iter()
            .max_by(|a, b| filtration_order(complex, a, b))
    }

    /// XOR with another chain - addition in Z/2
    fn add_assign(&mut self, other: &Chain) {
        for s in &other.simplices {
            if !self.simplices.remove(s) {
                self.simplices.insert(s.clone());
            }
        }
    }
}

/// Counters from one reduction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistenceStats {
    /// Simplices reduced
    pub processed: usize,
    /// Simplices above dimension `max_dimension + 1`
    pub skipped: usize,
    /// Marked simplices of dimension ≤ `max_dimension`
    pub marked: usize,
    /// Creator/destroyer pairs found
    pub pairs: usize,
    /// Pairs born and killed at the same value, not emitted
    pub zero_length: usize,
}

/// Z/2 persistence of a filtration-ordered complex
#[derive(Debug, Clone, Copy)]
pub struct PersistenceEngine {
    max_dimension: usize,
}

impl Default for PersistenceEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIMENSION)
    }
}

impl PersistenceEngine {
    /// Report homology in dimensions `0..=max_dimension`
    pub fn new(max_dimension: usize) -> Self {
        Self { max_dimension }
    }

    pub fn max_dimension(&self) -> usize {
        self.max_dimension
    }

    /// Barcodes of `complex`, which must be in filtration order
    pub fn compute_intervals(&self, complex: &FilteredComplex) -> BarcodeCollection {
        self.compute_intervals_with_stats(complex).0
    }

    /// Barcodes together with reduction counters
    pub fn compute_intervals_with_stats(
        &self,
        complex: &FilteredComplex,
    ) -> (BarcodeCollection, PersistenceStats) {
        debug_assert!(complex.is_sorted(), "complex must be finalized before reduction");

        let mut reduction = Reduction::new(complex);
        let mut intervals = BarcodeCollection::new();
        let mut stats = PersistenceStats::default();

        let dimension_cap = self.max_dimension.saturating_add(1);
        for s in complex {
            if s.dimension() > dimension_cap {
                stats.skipped += 1;
                continue;
            }
            stats.processed += 1;

            let d = reduction.remove_pivot_rows(s);
            let Some(sigma_i) = d.pivot(complex).cloned() else {
                reduction.marked.insert(s.clone());
                continue;
            };

            let k = sigma_i.dimension();
            let t_i = filtration_value(complex, &sigma_i);
            let t_j = filtration_value(complex, s);
            reduction.t.insert(sigma_i, d);
            stats.pairs += 1;

            if k <= self.max_dimension {
                if t_j - t_i > 0.0 {
                    intervals.add_interval(k, t_i, t_j);
                } else {
                    stats.zero_length += 1;
                }
            }
        }

        // BTreeSet iteration visits the creators in simplex order
        for s in &reduction.marked {
            if s.dimension() > self.max_dimension {
                continue;
            }
            stats.marked += 1;
            if reduction.t.get(s).map_or(true, Chain::is_zero) {
                intervals.add_infinite_interval(s.dimension(), filtration_value(complex, s));
            }
        }

        debug!(
            "reduction: {} processed, {} skipped, {} marked, {} pairs ({} zero-length), {} intervals",
            stats.processed,
            stats.skipped,
            stats.marked,
            stats.pairs,
            stats.zero_length,
            intervals.num_intervals()
        );
        (intervals, stats)
    }
}

/// Reduction state: creators and the reduced column stored at each pivot
struct Reduction<'a> {
    complex: &'a FilteredComplex,
    marked: BTreeSet<Simplex>,
    t: HashMap<Simplex, Chain>,
}

impl<'a> Reduction<'a> {
    fn new(complex: &'a FilteredComplex) -> Self {
        Self {
            complex,
            marked: BTreeSet::new(),
            t: HashMap::new(),
        }
    }

    /// Boundary of `s` restricted to marked simplices, reduced until its
    /// pivot has no stored column
    fn remove_pivot_rows(&self, s: &Simplex) -> Chain {
        let mut d = Chain {
            simplices: s
                .boundary()
                .into_iter()
                .filter(|face| self.marked.contains(face))
                .collect(),
        };

        while let Some(sigma_i) = d.pivot(self.complex) {
            let column = match self.t.get(sigma_i) {
                Some(column) if !column.is_zero() && column.contains(sigma_i) => column,
                _ => break,
            };
            d.add_assign(column);
        }
        d
    }
}

/// Filtration value of a simplex the complex is known to contain
fn filtration_value(complex: &FilteredComplex, s: &Simplex) -> f64 {
    let value = complex.filtration_value(s);
    debug_assert!(value.is_some(), "simplex {} was never added to the complex", s);
    value.unwrap_or(0.0)
}

fn filtration_order(complex: &FilteredComplex, a: &Simplex, b: &Simplex) -> Ordering {
    filtration_value(complex, a)
        .total_cmp(&filtration_value(complex, b))
        .then_with(|| a.cmp(b))
}
