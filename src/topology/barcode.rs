//! Barcodes: Persistence Intervals Grouped by Dimension
//!
//! A persistence interval [b, d) represents a homology class that is
//! "born" at filtration value b and "dies" at value d. Classes that never
//! die are recorded as half-infinite intervals [b, ∞).
//!
//! ## Interpretation
//!
//! - Long-lived intervals represent robust topological structure
//! - Short-lived intervals are usually sampling noise
//! - Infinite intervals are the homology of the complex at the largest scale

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::PhomError;

/// A right-open interval [start, finish), or [start, ∞) when `finish` is `None`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interval {
    start: f64,
    finish: Option<f64>,
}

impl Interval {
    /// The finite interval [start, finish)
    pub fn finite(start: f64, finish: f64) -> Self {
        debug_assert!(start <= finish, "interval [{}, {}) is reversed", start, finish);
        Self {
            start,
            finish: Some(finish),
        }
    }

    /// The half-infinite interval [start, ∞)
    pub fn infinite(start: f64) -> Self {
        Self { start, finish: None }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// Right endpoint, `None` for an infinite interval
    pub fn finish(&self) -> Option<f64> {
        self.finish
    }

    pub fn is_infinite(&self) -> bool {
        self.finish.is_none()
    }

    /// Right endpoint with infinity replaced by `max_filtration`
    pub fn finish_or(&self, max_filtration: f64) -> f64 {
        self.finish.unwrap_or(max_filtration)
    }

    /// Lifetime of the class (infinite for an infinite interval)
    pub fn persistence(&self) -> f64 {
        match self.finish {
            Some(finish) => finish - self.start,
            None => f64::INFINITY,
        }
    }

    /// Whether the class is alive at `t`
    pub fn contains(&self, t: f64) -> bool {
        self.start <= t && self.finish.map_or(true, |finish| t < finish)
    }
}

/// Start ascending; on equal starts finite before infinite, then finish ascending
impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .total_cmp(&other.start)
            .then_with(|| match (self.finish, other.finish) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.total_cmp(&b),
            })
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Interval {}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finish {
            Some(finish) => write!(f, "[{},{})", self.start, finish),
            None => write!(f, "[{},infinity)", self.start),
        }
    }
}

/// One row of the flat endpoint table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndpointRow {
    pub dimension: usize,
    pub start: f64,
    /// Finish, or the caller's max filtration value for infinite intervals
    pub end: f64,
}

/// Persistence intervals keyed by homology dimension
///
/// Within a dimension intervals keep their insertion order; use
/// [`BarcodeCollection::sorted`] for the [`Interval`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BarcodeCollection {
    intervals: BTreeMap<usize, Vec<Interval>>,
}

impl BarcodeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record [start, finish) in `dimension`
    pub fn add_interval(&mut self, dimension: usize, start: f64, finish: f64) {
        self.push(dimension, Interval::finite(start, finish));
    }

    /// Record [start, ∞) in `dimension`
    pub fn add_infinite_interval(&mut self, dimension: usize, start: f64) {
        self.push(dimension, Interval::infinite(start));
    }

    pub fn push(&mut self, dimension: usize, interval: Interval) {
        self.intervals.entry(dimension).or_default().push(interval);
    }

    /// Total number of intervals over all dimensions
    pub fn num_intervals(&self) -> usize {
        self.intervals.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_intervals() == 0
    }

    /// Dimensions holding at least one interval, ascending
    pub fn dimensions(&self) -> Vec<usize> {
        self.intervals
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(&d, _)| d)
            .collect()
    }

    /// Intervals of one dimension in insertion order
    pub fn intervals(&self, dimension: usize) -> &[Interval] {
        self.intervals
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// (dimension, interval) pairs, dimensions ascending
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Interval)> + '_ {
        self.intervals
            .iter()
            .flat_map(|(&d, v)| v.iter().map(move |i| (d, i)))
    }

    /// Copy with each dimension sorted by interval order
    pub fn sorted(&self) -> Self {
        let mut out = self.clone();
        for v in out.intervals.values_mut() {
            v.sort();
        }
        out
    }

    /// Start and finish values of one dimension
    ///
    /// Infinite intervals are skipped unless `include_infinite`, in which
    /// case their finish is `f64::INFINITY`.
    pub fn start_end_points(&self, dimension: usize, include_infinite: bool) -> (Vec<f64>, Vec<f64>) {
        self.intervals(dimension)
            .iter()
            .filter(|i| include_infinite || !i.is_infinite())
            .map(|i| (i.start(), i.finish_or(f64::INFINITY)))
            .unzip()
    }

    /// Flat table, one row per interval
    pub fn endpoint_rows(&self, max_filtration: f64) -> Vec<EndpointRow> {
        self.iter()
            .map(|(dimension, i)| EndpointRow {
                dimension,
                start: i.start(),
                end: i.finish_or(max_filtration),
            })
            .collect()
    }

    /// Flat table as an n×3 matrix of (dimension, start, end)
    pub fn endpoint_matrix(&self, max_filtration: f64) -> Array2<f64> {
        let rows = self.endpoint_rows(max_filtration);
        let mut matrix = Array2::zeros((rows.len(), 3));
        for (k, row) in rows.iter().enumerate() {
            matrix[[k, 0]] = row.dimension as f64;
            matrix[[k, 1]] = row.start;
            matrix[[k, 2]] = row.end;
        }
        matrix
    }

    /// Sum of lifetimes of the finite intervals in `dimension`
    pub fn total_persistence(&self, dimension: usize) -> f64 {
        self.intervals(dimension)
            .iter()
            .filter(|i| !i.is_infinite())
            .map(Interval::persistence)
            .sum()
    }

    /// Shannon entropy of the finite lifetimes in `dimension`
    ///
    /// H = -Σ pᵢ ln pᵢ with pᵢ = ℓᵢ / Σℓ. Zero when no finite interval
    /// has positive length.
    pub fn persistent_entropy(&self, dimension: usize) -> f64 {
        let total = self.total_persistence(dimension);
        if total <= 0.0 {
            return 0.0;
        }

        let mut entropy = 0.0;
        for i in self.intervals(dimension).iter().filter(|i| !i.is_infinite()) {
            let p = i.persistence() / total;
            if p > 0.0 {
                entropy -= p * p.ln();
            }
        }
        entropy
    }

    pub fn to_json(&self) -> Result<String, PhomError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PhomError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for BarcodeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dimension, interval) in self.iter() {
            writeln!(f, "{}: {}", dimension, interval)?;
        }
        Ok(())
    }
}
