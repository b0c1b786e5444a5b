//! Landmark Module: Choosing the Vertices of a Witness Complex
//!
//! A lazy witness complex only has as many vertices as there are
//! landmarks, so the landmarks should cover the space evenly. Three
//! selectors are provided:
//!
//! | Selector        | Cost per landmark | Coverage            |
//! |-----------------|-------------------|---------------------|
//! | `Random`        | O(1)              | uneven              |
//! | `MaxMin`        | O(N)              | greedy farthest     |
//! | `ApproxMaxMin`  | O(L·samples)      | sampled farthest    |
//!
//! All selectors draw from an explicit generator, return at most `size()`
//! distinct indices and return nothing on an empty space.

mod maxmin;

pub use maxmin::{approx_maxmin, maxmin, random};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::metric::MetricSpace;

/// Default number of candidates scored per approximate maxmin round
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Landmark selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandmarkSelector {
    /// Uniformly random subset
    Random,
    /// Exact greedy farthest-point sampling
    MaxMin,
    /// Farthest-point sampling over `sample_size` random candidates per round
    ApproxMaxMin { sample_size: usize },
}

impl Default for LandmarkSelector {
    fn default() -> Self {
        LandmarkSelector::ApproxMaxMin {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl LandmarkSelector {
    /// Exact maxmin when the space has at most `sample_size` points,
    /// approximate otherwise
    pub fn for_space<M: MetricSpace + ?Sized>(space: &M, sample_size: usize) -> Self {
        if space.size() <= sample_size {
            LandmarkSelector::MaxMin
        } else {
            LandmarkSelector::ApproxMaxMin { sample_size }
        }
    }

    /// Select `min(count, size)` landmark indices
    pub fn select<M, R>(&self, space: &M, count: usize, rng: &mut R) -> Vec<usize>
    where
        M: MetricSpace + Sync + ?Sized,
        R: Rng + ?Sized,
    {
        match *self {
            LandmarkSelector::Random => random(space, count, rng),
            LandmarkSelector::MaxMin => maxmin(space, count, rng),
            LandmarkSelector::ApproxMaxMin { sample_size } => {
                approx_maxmin(space, count, sample_size, rng)
            }
        }
    }
}
