//! Betti Numbers: Topological Invariants
//!
//! The k-th Betti number βₖ counts the number of k-dimensional
//! "holes" in a topological space:
//!
//! - β₀: Number of connected components
//! - β₁: Number of 1-dimensional loops/cycles
//! - β₂: Number of 2-dimensional voids/cavities
//!
//! At filtration value t, βₖ(t) is the number of dimension-k intervals
//! [b, d) with b ≤ t < d, so it is read directly off the barcodes.

use super::BarcodeCollection;

/// Betti numbers at a specific filtration value
#[derive(Debug, Clone, PartialEq)]
pub struct BettiNumbers {
    /// βₖ at index k, up to the largest dimension in the barcodes
    pub betti: Vec<usize>,
    /// Filtration scale
    pub epsilon: f64,
}

impl BettiNumbers {
    /// Count the intervals alive at `epsilon`
    pub fn at(barcodes: &BarcodeCollection, epsilon: f64) -> Self {
        let len = barcodes.dimensions().last().map_or(0, |&d| d + 1);
        let mut betti = vec![0usize; len];
        for (dimension, interval) in barcodes.iter() {
            if interval.contains(epsilon) {
                betti[dimension] += 1;
            }
        }
        Self { betti, epsilon }
    }

    /// βₖ, zero beyond the stored dimensions
    pub fn beta(&self, k: usize) -> usize {
        self.betti.get(k).copied().unwrap_or(0)
    }

    /// Total topological complexity
    pub fn total(&self) -> usize {
        self.betti.iter().sum()
    }

    /// Euler characteristic χ = β₀ - β₁ + β₂ - ...
    pub fn euler_characteristic(&self) -> i64 {
        self.betti
            .iter()
            .enumerate()
            .map(|(k, &b)| if k % 2 == 0 { b as i64 } else { -(b as i64) })
            .sum()
    }
}

/// Betti curve: Betti numbers sampled on a uniform filtration grid
#[derive(Debug, Clone)]
pub struct BettiCurve {
    pub values: Vec<BettiNumbers>,
}

impl BettiCurve {
    /// Sample `n_steps + 1` evenly spaced values in [min, max]
    pub fn compute(barcodes: &BarcodeCollection, min: f64, max: f64, n_steps: usize) -> Self {
        let values = (0..=n_steps)
            .map(|step| {
                let epsilon = if n_steps == 0 {
                    min
                } else {
                    min + (max - min) * step as f64 / n_steps as f64
                };
                BettiNumbers::at(barcodes, epsilon)
            })
            .collect();

        Self { values }
    }

    /// (ε, βₖ) pairs
    pub fn curve(&self, k: usize) -> Vec<(f64, usize)> {
        self.values.iter().map(|b| (b.epsilon, b.beta(k))).collect()
    }

    /// Area under the βₖ curve (trapezoid rule)
    pub fn integrated(&self, k: usize) -> f64 {
        if self.values.len() < 2 {
            return 0.0;
        }

        let mut integral = 0.0;
        for i in 1..self.values.len() {
            let de = self.values[i].epsilon - self.values[i - 1].epsilon;
            let avg = (self.values[i].beta(k) + self.values[i - 1].beta(k)) as f64 / 2.0;
            integral += de * avg;
        }
        integral
    }
}

impl BarcodeCollection {
    /// Betti numbers at filtration value `epsilon`
    pub fn betti_numbers(&self, epsilon: f64) -> BettiNumbers {
        BettiNumbers::at(self, epsilon)
    }
}
