//! Run Configuration

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::driver::{
    default_landmark_count, default_persistent_homology_with_rng, lw_persistent_homology_with_rng,
    vr_persistent_homology, DEFAULT_MAXMIN_SAMPLES, VR_SIZE_LIMIT,
};
use crate::error::PhomError;
use crate::landmark::DEFAULT_SAMPLE_SIZE;
use crate::metric::{MetricSpace, DEFAULT_DIAMETER_SAMPLES};
use crate::topology::BarcodeCollection;

/// Which filtration to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Vietoris-Rips up to 100 points, lazy witness with the automatic
    /// landmark schedule above
    #[default]
    Auto,
    VietorisRips,
    /// Lazy witness with the configured landmark and sample counts
    LazyWitness,
}

/// Configuration for a persistent homology run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhomConfig {
    /// Largest homology dimension reported
    pub max_dimension: usize,
    /// Filtration is truncated at this value
    pub max_filtration: f64,
    pub strategy: Strategy,
    /// Landmarks for [`Strategy::LazyWitness`]
    pub landmark_count: usize,
    /// Exact maxmin up to this many points, approximate with this many
    /// candidates per round above
    pub maxmin_sample_size: usize,
    /// Seed for landmark selection; `None` uses the thread-local generator
    pub seed: Option<u64>,
}

impl Default for PhomConfig {
    fn default() -> Self {
        Self {
            max_dimension: 1,
            max_filtration: 1.0,
            strategy: Strategy::Auto,
            landmark_count: 50,
            maxmin_sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

impl PhomConfig {
    /// Auto-configure based on the space
    ///
    /// Uses the estimated diameter as the maximum filtration value and
    /// spells out the strategy the automatic schedule would pick.
    pub fn auto_configure<M: MetricSpace + ?Sized>(space: &M) -> Self {
        Self::auto_configure_with_rng(space, &mut rand::rng())
    }

    /// [`PhomConfig::auto_configure`] sampling the diameter from `rng`
    pub fn auto_configure_with_rng<M, R>(space: &M, rng: &mut R) -> Self
    where
        M: MetricSpace + ?Sized,
        R: Rng + ?Sized,
    {
        let n = space.size();
        // `&mut R` is itself an RngCore even when R is unsized
        let max_filtration = space.estimate_diameter(DEFAULT_DIAMETER_SAMPLES, &mut &mut *rng);

        if n <= VR_SIZE_LIMIT {
            Self {
                max_filtration,
                strategy: Strategy::VietorisRips,
                ..Self::default()
            }
        } else {
            Self {
                max_filtration,
                strategy: Strategy::LazyWitness,
                landmark_count: default_landmark_count(n),
                maxmin_sample_size: DEFAULT_MAXMIN_SAMPLES,
                ..Self::default()
            }
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), PhomError> {
        if !self.max_filtration.is_finite() {
            return Err(PhomError::invalid("max_filtration", "must be finite"));
        }
        if self.max_filtration < 0.0 {
            return Err(PhomError::invalid(
                "max_filtration",
                format!("must be non-negative, got {}", self.max_filtration),
            ));
        }
        if self.strategy == Strategy::LazyWitness {
            if self.landmark_count == 0 {
                return Err(PhomError::invalid(
                    "landmark_count",
                    "lazy witness needs at least one landmark",
                ));
            }
            if self.maxmin_sample_size == 0 {
                return Err(PhomError::invalid(
                    "maxmin_sample_size",
                    "lazy witness needs at least one maxmin sample",
                ));
            }
        }
        Ok(())
    }
}

/// Validate `config` and run the configured strategy
pub fn compute_persistent_homology<M>(space: &M, config: &PhomConfig) -> Result<BarcodeCollection, PhomError>
where
    M: MetricSpace + Sync + ?Sized,
{
    config.validate()?;
    info!(
        "computing H0..H{} of {} points, strategy {:?}, max filtration {}",
        config.max_dimension,
        space.size(),
        config.strategy,
        config.max_filtration
    );

    let barcodes = match config.seed {
        Some(seed) => run(space, config, &mut StdRng::seed_from_u64(seed)),
        None => run(space, config, &mut rand::rng()),
    };
    Ok(barcodes)
}

fn run<M, R>(space: &M, config: &PhomConfig, rng: &mut R) -> BarcodeCollection
where
    M: MetricSpace + Sync + ?Sized,
    R: Rng + ?Sized,
{
    match config.strategy {
        Strategy::Auto => default_persistent_homology_with_rng(
            space,
            config.max_dimension,
            config.max_filtration,
            rng,
        ),
        Strategy::VietorisRips => {
            vr_persistent_homology(space, config.max_dimension, config.max_filtration)
        }
        Strategy::LazyWitness => lw_persistent_homology_with_rng(
            space,
            config.max_dimension,
            config.max_filtration,
            config.landmark_count,
            config.maxmin_sample_size,
            rng,
        ),
    }
}
