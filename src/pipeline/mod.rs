//! Pipeline Module: Choosing and Running a Filtration
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  size ≤ 100      Vietoris-Rips on every point                │
//! │  size ≤ 1000     lazy witness, 2·⌈√size⌉ landmarks           │
//! │  size > 1000     lazy witness, 100 landmarks                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Landmarks come from exact maxmin when the space is no larger than the
//! maxmin sample size and from approximate maxmin otherwise. The plain
//! entry points use the thread-local generator; the `_with_rng` variants
//! take an explicit one, and [`PhomConfig::seed`] pins a `StdRng`.

mod config;
mod driver;

pub use config::{compute_persistent_homology, PhomConfig, Strategy};
pub use driver::{
    default_landmark_count, default_persistent_homology, default_persistent_homology_with_rng,
    estimate_diameter, lw_persistent_homology, lw_persistent_homology_with_rng,
    vr_persistent_homology, DEFAULT_MAXMIN_SAMPLES, LARGE_SPACE_LANDMARKS, LARGE_SPACE_SIZE,
    VR_SIZE_LIMIT,
};
