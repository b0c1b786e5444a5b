//! Greedy Farthest-Point Sampling
//!
//! Landmarks l₀, l₁, ... are chosen inductively. With
//!
//! ```text
//!   f(z) = min { d(z, l₀), ..., d(z, l_{i-1}) }
//! ```
//!
//! the next landmark is lᵢ = argmax f(z), the first seed being random.
//! The exact variant scans every point each round; the approximate variant
//! only scores `sample_size` points drawn with replacement.
//!
//! Selections never repeat an index: selected points are excluded from
//! the candidates. When an approximate round happens to sample only
//! selected points, the lowest unselected index is taken instead.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;

use crate::metric::MetricSpace;

/// Uniformly random subset of `min(count, size)` points
pub fn random<M, R>(space: &M, count: usize, rng: &mut R) -> Vec<usize>
where
    M: MetricSpace + ?Sized,
    R: Rng + ?Sized,
{
    let mut indices: Vec<usize> = (0..space.size()).collect();
    indices.shuffle(rng);
    indices.truncate(count);
    debug!("random selection: {} landmarks", indices.len());
    indices
}

/// Exact maxmin selection of `min(count, size)` landmarks
///
/// Keeps the running minimum distance of every point to the landmark set,
/// so each round costs one distance per point. Rounds are scanned in
/// parallel; ties go to the lowest index, matching a sequential first-found
/// scan.
pub fn maxmin<M, R>(space: &M, count: usize, rng: &mut R) -> Vec<usize>
where
    M: MetricSpace + Sync + ?Sized,
    R: Rng + ?Sized,
{
    let n = space.size();
    let count = count.min(n);
    if count == 0 {
        return Vec::new();
    }

    let seed = rng.random_range(0..n);
    let mut landmarks = Vec::with_capacity(count);
    let mut selected = vec![false; n];
    let mut min_distance = vec![f64::INFINITY; n];

    let mut next = seed;
    loop {
        landmarks.push(next);
        selected[next] = true;
        if landmarks.len() == count {
            break;
        }

        min_distance
            .par_iter_mut()
            .enumerate()
            .for_each(|(z, m)| *m = m.min(space.distance(next, z)));

        next = (0..n)
            .into_par_iter()
            .filter(|&z| !selected[z])
            .map(|z| (z, min_distance[z]))
            .reduce_with(farther)
            .map(|(z, _)| z)
            // count <= n leaves at least one unselected point here
            .unwrap_or(0);
    }

    debug!("maxmin selection: {} of {} points, seed {}", landmarks.len(), n, seed);
    landmarks
}

/// Approximate maxmin selection scoring `sample_size` random points per round
///
/// The sample size is clamped to the size of the space. Candidates are
/// drawn sequentially from `rng`, so the result only depends on the
/// generator state.
pub fn approx_maxmin<M, R>(space: &M, count: usize, sample_size: usize, rng: &mut R) -> Vec<usize>
where
    M: MetricSpace + ?Sized,
    R: Rng + ?Sized,
{
    let n = space.size();
    let count = count.min(n);
    if count == 0 {
        return Vec::new();
    }
    let sample_size = sample_size.min(n);

    let mut landmarks = Vec::with_capacity(count);
    let mut selected = vec![false; n];

    let seed = rng.random_range(0..n);
    landmarks.push(seed);
    selected[seed] = true;

    while landmarks.len() < count {
        let mut best: Option<(usize, f64)> = None;
        for _ in 0..sample_size {
            let z = rng.random_range(0..n);
            if selected[z] {
                continue;
            }
            let f = distance_to_set(space, &landmarks, z);
            if best.map_or(true, |(_, best_f)| f > best_f) {
                best = Some((z, f));
            }
        }

        let next = match best {
            Some((z, _)) => z,
            None => first_unselected(&selected),
        };
        landmarks.push(next);
        selected[next] = true;
    }

    debug!(
        "approximate maxmin selection: {} of {} points, {} samples per round",
        landmarks.len(),
        n,
        sample_size
    );
    landmarks
}

/// min over the landmark set of d(l, z)
fn distance_to_set<M: MetricSpace + ?Sized>(space: &M, landmarks: &[usize], z: usize) -> f64 {
    landmarks
        .iter()
        .map(|&l| space.distance(l, z))
        .fold(f64::INFINITY, f64::min)
}

/// Larger distance wins, then the lower index
fn farther(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    match a.1.total_cmp(&b.1) {
        std::cmp::Ordering::Greater => a,
        std::cmp::Ordering::Less => b,
        std::cmp::Ordering::Equal => {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        }
    }
}

fn first_unselected(selected: &[bool]) -> usize {
    selected.iter().position(|&s| !s).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::{ExplicitMetricSpace, PointCloudMetricSpace};
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn line(n: usize) -> PointCloudMetricSpace {
        let points = ndarray::Array2::from_shape_fn((n, 1), |(i, _)| i as f64);
        PointCloudMetricSpace::euclidean(points)
    }

    #[test]
    fn test_maxmin_distinct_and_clamped() {
        let space = line(10);
        for count in [0, 1, 4, 10, 25] {
            let mut rng = StdRng::seed_from_u64(7);
            let l = maxmin(&space, count, &mut rng);
            let distinct: BTreeSet<_> = l.iter().copied().collect();
            assert_eq!(l.len(), count.min(10));
            assert_eq!(distinct.len(), l.len());
        }
    }

    #[test]
    fn test_maxmin_spreads_out() {
        let space = line(11);
        let mut rng = StdRng::seed_from_u64(3);
        let l = maxmin(&space, 3, &mut rng);

        // the second landmark is an endpoint farthest from the seed, the
        // third lies between the two
        let seed = l[0];
        let expected_second = if seed >= 5 { 0 } else { 10 };
        assert_eq!(l[1], expected_second);
        let f3 = distance_to_set(&space, &l[..2], l[2]);
        for z in 0..11 {
            assert!(distance_to_set(&space, &l[..2], z) <= f3 + 1e-12);
        }
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        assert_eq!(farther((4, 2.0), (0, 2.0)), (0, 2.0));
        assert_eq!(farther((0, 2.0), (4, 2.0)), (0, 2.0));
        assert_eq!(farther((0, 1.0), (4, 2.0)), (4, 2.0));
    }

    #[test]
    fn test_maxmin_deterministic_for_seed() {
        let space = line(50);
        let a = maxmin(&space, 8, &mut StdRng::seed_from_u64(42));
        let b = maxmin(&space, 8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        let a = approx_maxmin(&space, 8, 10, &mut StdRng::seed_from_u64(42));
        let b = approx_maxmin(&space, 8, 10, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_points_still_distinct() {
        let dm = array![
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0]
        ];
        let space = ExplicitMetricSpace::new(dm).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let l = maxmin(&space, 3, &mut rng);
        assert_eq!(l.iter().copied().collect::<BTreeSet<_>>().len(), 3);
        let l = approx_maxmin(&space, 3, 2, &mut rng);
        assert_eq!(l.iter().copied().collect::<BTreeSet<_>>().len(), 3);
    }

    #[test]
    fn test_approx_maxmin_clamps() {
        let space = line(6);
        let mut rng = StdRng::seed_from_u64(9);
        let l = approx_maxmin(&space, 100, 1000, &mut rng);
        assert_eq!(l.len(), 6);
        assert_eq!(l.iter().copied().collect::<BTreeSet<_>>().len(), 6);
    }

    #[test]
    fn test_random_subset() {
        let space = line(20);
        let mut rng = StdRng::seed_from_u64(5);
        let l = random(&space, 7, &mut rng);
        assert_eq!(l.len(), 7);
        assert!(l.iter().all(|&i| i < 20));
        assert_eq!(l.iter().copied().collect::<BTreeSet<_>>().len(), 7);
        assert_eq!(random(&space, 99, &mut rng).len(), 20);
    }

    #[test]
    fn test_empty_space() {
        let space = ExplicitMetricSpace::new(ndarray::Array2::zeros((0, 0))).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(maxmin(&space, 5, &mut rng).is_empty());
        assert!(approx_maxmin(&space, 5, 10, &mut rng).is_empty());
        assert!(random(&space, 5, &mut rng).is_empty());
    }
}
