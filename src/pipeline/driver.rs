//! Driving Functions: Metric Space to Barcodes
//!
//! Each entry point builds a filtration with dimension cap
//! `max_dimension + 1`, so that (max_dimension+1)-simplices can kill
//! classes in the top reported dimension, then reduces it.

use log::info;
use rand::Rng;

use crate::landmark::LandmarkSelector;
use crate::metric::{MetricSpace, DEFAULT_DIAMETER_SAMPLES};
use crate::topology::{BarcodeCollection, ComplexBuilder, LazyWitness, PersistenceEngine, VietorisRips};

/// Spaces up to this size get the full Vietoris-Rips filtration
pub const VR_SIZE_LIMIT: usize = 100;

/// Above this size the landmark count stops growing
pub const LARGE_SPACE_SIZE: usize = 1000;

/// Landmark count used for large spaces
pub const LARGE_SPACE_LANDMARKS: usize = 100;

/// Candidates per approximate maxmin round in the automatic schedule
pub const DEFAULT_MAXMIN_SAMPLES: usize = 1000;

/// Landmark count of the automatic schedule: 2·⌈√n⌉, capped at 100 for
/// spaces above 1000 points
pub fn default_landmark_count(size: usize) -> usize {
    if size > LARGE_SPACE_SIZE {
        LARGE_SPACE_LANDMARKS
    } else {
        2 * (size as f64).sqrt().ceil() as usize
    }
}

/// Sampled diameter of the space with the thread-local generator
pub fn estimate_diameter<M: MetricSpace + ?Sized>(space: &M) -> f64 {
    space.estimate_diameter(DEFAULT_DIAMETER_SAMPLES, &mut rand::rng())
}

/// Vietoris-Rips for small spaces, lazy witness otherwise
pub fn default_persistent_homology<M>(space: &M, max_dimension: usize, max_filtration: f64) -> BarcodeCollection
where
    M: MetricSpace + Sync + ?Sized,
{
    default_persistent_homology_with_rng(space, max_dimension, max_filtration, &mut rand::rng())
}

/// [`default_persistent_homology`] drawing landmarks from `rng`
pub fn default_persistent_homology_with_rng<M, R>(
    space: &M,
    max_dimension: usize,
    max_filtration: f64,
    rng: &mut R,
) -> BarcodeCollection
where
    M: MetricSpace + Sync + ?Sized,
    R: Rng + ?Sized,
{
    let n = space.size();
    if n <= VR_SIZE_LIMIT {
        info!("{} points: using the Vietoris-Rips filtration", n);
        return vr_persistent_homology(space, max_dimension, max_filtration);
    }

    let landmark_count = default_landmark_count(n);
    info!(
        "{} points: using the lazy witness filtration on {} landmarks",
        n, landmark_count
    );
    lw_persistent_homology_with_rng(
        space,
        max_dimension,
        max_filtration,
        landmark_count,
        DEFAULT_MAXMIN_SAMPLES,
        rng,
    )
}

/// Persistent homology of the Vietoris-Rips filtration up to `max_filtration`
pub fn vr_persistent_homology<M>(space: &M, max_dimension: usize, max_filtration: f64) -> BarcodeCollection
where
    M: MetricSpace + Sync + ?Sized,
{
    let cap = max_dimension.saturating_add(1);
    let complex = VietorisRips::new(space, max_filtration, cap).construct();
    PersistenceEngine::new(max_dimension).compute_intervals(&complex)
}

/// Persistent homology of the lazy witness filtration
///
/// Landmarks are chosen by exact maxmin when the space has at most
/// `maxmin_sample_size` points, by approximate maxmin otherwise.
pub fn lw_persistent_homology<M>(
    space: &M,
    max_dimension: usize,
    max_filtration: f64,
    landmark_count: usize,
    maxmin_sample_size: usize,
) -> BarcodeCollection
where
    M: MetricSpace + Sync + ?Sized,
{
    lw_persistent_homology_with_rng(
        space,
        max_dimension,
        max_filtration,
        landmark_count,
        maxmin_sample_size,
        &mut rand::rng(),
    )
}

/// [`lw_persistent_homology`] drawing landmarks from `rng`
pub fn lw_persistent_homology_with_rng<M, R>(
    space: &M,
    max_dimension: usize,
    max_filtration: f64,
    landmark_count: usize,
    maxmin_sample_size: usize,
    rng: &mut R,
) -> BarcodeCollection
where
    M: MetricSpace + Sync + ?Sized,
    R: Rng + ?Sized,
{
    let selector = LandmarkSelector::for_space(space, maxmin_sample_size);
    let landmarks = selector.select(space, landmark_count, rng);

    let cap = max_dimension.saturating_add(1);
    let complex = LazyWitness::new(space, landmarks, max_filtration, cap).construct();
    PersistenceEngine::new(max_dimension).compute_intervals(&complex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{ExplicitMetricSpace, PointCloudMetricSpace};
    use ndarray::{array, Array2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_landmark_schedule() {
        assert_eq!(default_landmark_count(101), 22);
        assert_eq!(default_landmark_count(400), 40);
        assert_eq!(default_landmark_count(1000), 64);
        assert_eq!(default_landmark_count(1001), 100);
    }

    #[test]
    fn test_seeded_runs_agree() {
        let points = Array2::from_shape_fn((150, 1), |(i, _)| i as f64);
        let space = PointCloudMetricSpace::euclidean(points);

        let a = default_persistent_homology_with_rng(&space, 0, 50.0, &mut StdRng::seed_from_u64(4));
        let b = default_persistent_homology_with_rng(&space, 0, 50.0, &mut StdRng::seed_from_u64(4));
        assert_eq!(a, b);
        // a line is connected once the landmarks' gaps are bridged
        assert_eq!(a.intervals(0).iter().filter(|i| i.is_infinite()).count(), 1);
    }

    #[test]
    fn test_oversized_max_dimension_matches_small_cap() {
        let space = ExplicitMetricSpace::new(array![
            [0.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0]
        ])
        .unwrap();

        let b = vr_persistent_homology(&space, usize::MAX, 1.5);
        assert_eq!(b, vr_persistent_homology(&space, 1, 1.5));
        assert_eq!(b.num_intervals(), 3);
        assert_eq!(b.intervals(0).iter().filter(|i| i.is_infinite()).count(), 1);

        let mut rng = StdRng::seed_from_u64(8);
        let lw = lw_persistent_homology_with_rng(&space, usize::MAX, 1.5, 3, 10, &mut rng);
        assert_eq!(lw.intervals(0).iter().filter(|i| i.is_infinite()).count(), 1);
    }

    #[test]
    fn test_dyn_metric_space() {
        let points = Array2::from_shape_fn((6, 1), |(i, _)| i as f64);
        let space: Box<dyn MetricSpace + Sync> = Box::new(PointCloudMetricSpace::euclidean(points));

        let b = vr_persistent_homology(space.as_ref(), 0, 1.0);
        assert_eq!(b.num_intervals(), 6);
        assert!(estimate_diameter(space.as_ref()) <= 5.0);
    }

    #[test]
    fn test_estimate_diameter_bounds() {
        let points = Array2::from_shape_fn((20, 1), |(i, _)| i as f64);
        let space = PointCloudMetricSpace::euclidean(points);
        let d = estimate_diameter(&space);
        assert!(d >= 0.0 && d <= 19.0);
    }
}
