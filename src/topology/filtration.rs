//! Filtered Simplicial Complexes
//!
//! A filtered complex is a sequence of simplices together with a
//! filtration value ("birth time") for each of them. Builders append
//! simplices in whatever order they discover them and then call
//! [`FilteredComplex::finalize`], which sorts the sequence by
//! (filtration value, simplex order). That order is the column order of
//! the boundary matrix reduced by the persistence engine.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::Simplex;

/// Simplices tagged with filtration values
#[derive(Debug, Clone, Default)]
pub struct FilteredComplex {
    /// Filtration value of every simplex ever added (last write wins)
    filtration_values: HashMap<Simplex, f64>,
    /// Simplices in insertion order, or filtration order once finalized
    simplices: Vec<Simplex>,
}

impl FilteredComplex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            filtration_values: HashMap::with_capacity(capacity),
            simplices: Vec::with_capacity(capacity),
        }
    }

    /// Append a simplex and set its filtration value
    ///
    /// Adding the same simplex twice keeps both entries in the sequence
    /// but only the last filtration value.
    pub fn add(&mut self, simplex: Simplex, filtration_value: f64) {
        self.filtration_values
            .insert(simplex.clone(), filtration_value);
        self.simplices.push(simplex);
    }

    /// Append the vertex [v]
    pub fn add_vertex(&mut self, v: usize, filtration_value: f64) {
        self.add(Simplex::vertex(v), filtration_value);
    }

    /// Append the edge [a, b]
    pub fn add_edge(&mut self, a: usize, b: usize, filtration_value: f64) {
        self.add(Simplex::edge(a, b), filtration_value);
    }

    /// Filtration value, or 0 for a simplex that was never added
    ///
    /// The zero default matches the birth time of vertices in a
    /// Vietoris-Rips complex but is wrong for anything else. Prefer
    /// [`FilteredComplex::filtration_value`] when the simplex may be absent.
    pub fn get_filtration_value(&self, simplex: &Simplex) -> f64 {
        self.filtration_value(simplex).unwrap_or(0.0)
    }

    /// Filtration value if the simplex was added
    pub fn filtration_value(&self, simplex: &Simplex) -> Option<f64> {
        self.filtration_values.get(simplex).copied()
    }

    pub fn contains(&self, simplex: &Simplex) -> bool {
        self.filtration_values.contains_key(simplex)
    }

    /// Filtration order: value ascending, ties broken by simplex order
    pub fn filtration_cmp(&self, a: &Simplex, b: &Simplex) -> Ordering {
        self.get_filtration_value(a)
            .total_cmp(&self.get_filtration_value(b))
            .then_with(|| a.cmp(b))
    }

    /// Sort the sequence into filtration order
    pub fn finalize(&mut self) {
        let mut keyed: Vec<(f64, Simplex)> = self
            .simplices
            .drain(..)
            .map(|s| (self.filtration_values.get(&s).copied().unwrap_or(0.0), s))
            .collect();

        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        self.simplices = keyed.into_iter().map(|(_, s)| s).collect();
    }

    /// Whether the sequence is already in filtration order
    pub fn is_sorted(&self) -> bool {
        self.simplices
            .windows(2)
            .all(|w| self.filtration_cmp(&w[0], &w[1]) != Ordering::Greater)
    }

    /// Every stored face of every simplex is born no later than the simplex
    pub fn is_monotone(&self) -> bool {
        self.simplices.iter().all(|s| {
            let t = self.get_filtration_value(s);
            s.boundary().iter().all(|face| match self.filtration_value(face) {
                Some(face_t) => face_t <= t,
                None => true,
            })
        })
    }

    /// Simplices in the current sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, Simplex> {
        self.simplices.iter()
    }

    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    /// Length of the sequence (duplicates counted)
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Largest simplex dimension, `None` for an empty complex
    pub fn max_dimension(&self) -> Option<usize> {
        self.simplices.iter().map(Simplex::dimension).max()
    }

    /// Number of simplices of each dimension, indexed by dimension
    pub fn count_by_dimension(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.max_dimension().map_or(0, |d| d + 1)];
        for s in &self.simplices {
            counts[s.dimension()] += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a FilteredComplex {
    type Item = &'a Simplex;
    type IntoIter = std::slice::Iter<'a, Simplex>;

    fn into_iter(self) -> Self::IntoIter {
        self.simplices.iter()
    }
}

impl FromIterator<(Simplex, f64)> for FilteredComplex {
    fn from_iter<I: IntoIterator<Item = (Simplex, f64)>>(iter: I) -> Self {
        let mut complex = FilteredComplex::new();
        for (simplex, value) in iter {
            complex.add(simplex, value);
        }
        complex
    }
}
