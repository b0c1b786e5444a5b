//! # phom
//!
//! Persistent Homology of Finite Metric Spaces
//!
//! ## Theoretical Framework
//!
//! This crate computes the multi-scale topology of a finite point set or
//! distance matrix: connected components, loops, voids and their higher
//! analogues, reported as barcodes. An interval [b, d) in dimension k is
//! a k-dimensional hole that appears at scale b and is filled in at
//! scale d.
//!
//! ### Methodology
//!
//! 1. **Filtration**: a flag complex is built from a weighted 1-skeleton,
//!    either the full Vietoris-Rips complex or the lazy witness complex
//!    on a set of maxmin landmarks
//!
//! 2. **Reduction**: the boundary matrix is reduced over Z/2 in
//!    filtration order, pairing each destroyer with the class it kills
//!
//! 3. **Barcodes**: pairs become finite intervals, unpaired creators
//!    become infinite ones
//!
//! ## Example
//!
//! ```no_run
//! use phom::{circle_points, vr_persistent_homology, PointCloudMetricSpace};
//!
//! let space = PointCloudMetricSpace::euclidean(circle_points(24, 1.0));
//! let barcodes = vr_persistent_homology(&space, 1, 1.0);
//! print!("{}", barcodes);
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - Zomorodian & Carlsson, "Computing Persistent Homology" (2005)
//! - de Silva & Carlsson, "Topological estimation using witness complexes" (2004)

pub mod error;
pub mod landmark;
pub mod metric;
pub mod pipeline;
pub mod topology;

pub use error::PhomError;

// Re-exports from metric
pub use metric::{
    circle_points,
    random_sphere_points,
    uniform_cube_points,
    ExplicitMetricSpace,
    Metric,
    MetricSpace,
    PointCloudMetricSpace,
};

// Re-exports from landmark
pub use landmark::LandmarkSelector;

// Re-exports from topology
pub use topology::{
    // Complex construction
    incremental_expansion,
    ComplexBuilder,
    FilteredComplex,
    Graph,
    LazyWitness,
    Simplex,
    VietorisRips,
    // Persistence
    BarcodeCollection,
    BettiCurve,
    BettiNumbers,
    EndpointRow,
    Interval,
    PersistenceEngine,
    PersistenceStats,
};

// Re-exports from pipeline
pub use pipeline::{
    compute_persistent_homology,
    default_persistent_homology,
    default_persistent_homology_with_rng,
    estimate_diameter,
    lw_persistent_homology,
    lw_persistent_homology_with_rng,
    vr_persistent_homology,
    PhomConfig,
    Strategy,
};
