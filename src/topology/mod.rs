//! Topology Module: Filtered Complexes and Persistent Homology
//!
//! Implements the mathematical structures for topological data analysis:
//! - Simplices and filtered simplicial complexes
//! - Flag complex construction (Vietoris-Rips and lazy witness)
//! - Persistent homology by boundary reduction over Z/2
//! - Barcodes and Betti numbers
//!
//! ## Mathematical Background
//!
//! For a finite metric space X we construct a filtration of simplicial
//! complexes K_ε indexed by the scale parameter ε. Persistent homology
//! tracks the birth and death of topological features (connected
//! components, loops, voids) across this filtration.
//!
//! ## Pipeline
//!
//! ```text
//!   MetricSpace ──► ComplexBuilder ──► FilteredComplex ──► PersistenceEngine ──► BarcodeCollection
//!                   (1-skeleton +       (filtration         (Z/2 reduction)
//!                    clique expansion)   order)
//! ```

mod barcode;
mod betti;
mod filtration;
mod flag_complex;
mod graph;
mod lazy_witness;
mod persistence;
mod simplex;
mod vietoris_rips;

pub use barcode::{BarcodeCollection, EndpointRow, Interval};
pub use betti::{BettiCurve, BettiNumbers};
pub use filtration::FilteredComplex;
pub use flag_complex::{incremental_expansion, ComplexBuilder};
pub use graph::Graph;
pub use lazy_witness::{LazyWitness, DEFAULT_NU};
pub use persistence::{PersistenceEngine, PersistenceStats, DEFAULT_MAX_DIMENSION};
pub use simplex::Simplex;
pub use vietoris_rips::VietorisRips;
