use ndarray::{array, Array2};
use phom::{
    circle_points, default_persistent_homology, lw_persistent_homology_with_rng,
    random_sphere_points, uniform_cube_points, vr_persistent_homology, BarcodeCollection,
    ComplexBuilder, ExplicitMetricSpace, Interval, LandmarkSelector, LazyWitness,
    PersistenceEngine, PointCloudMetricSpace, VietorisRips,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn explicit(dm: Array2<f64>) -> ExplicitMetricSpace {
    ExplicitMetricSpace::new(dm).unwrap()
}

fn finite(b: &BarcodeCollection, dim: usize) -> Vec<Interval> {
    b.intervals(dim).iter().copied().filter(|i| !i.is_infinite()).collect()
}

fn infinite(b: &BarcodeCollection, dim: usize) -> Vec<Interval> {
    b.intervals(dim).iter().copied().filter(|i| i.is_infinite()).collect()
}

#[test]
fn equilateral_triangle() {
    let space = explicit(array![
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0]
    ]);
    let b = vr_persistent_homology(&space, 1, 1.5);

    assert_eq!(infinite(&b, 0), vec![Interval::infinite(0.0)]);
    assert_eq!(finite(&b, 0), vec![Interval::finite(0.0, 1.0); 2]);
    assert!(b.intervals(1).is_empty());
    assert_eq!(b.num_intervals(), 3);
}

fn unit_square() -> ExplicitMetricSpace {
    let s2 = 2.0_f64.sqrt();
    // corners in cyclic order
    explicit(array![
        [0.0, 1.0, s2,  1.0],
        [1.0, 0.0, 1.0, s2 ],
        [s2,  1.0, 0.0, 1.0],
        [1.0, s2,  1.0, 0.0]
    ])
}

#[test]
fn square_without_diagonals_keeps_its_loop() {
    let b = vr_persistent_homology(&unit_square(), 1, 1.2);

    assert_eq!(b.intervals(1).len(), 1);
    assert_eq!(b.intervals(1)[0], Interval::infinite(1.0));
    assert_eq!(infinite(&b, 0).len(), 1);
}

#[test]
fn square_with_diagonals_fills_its_loop() {
    let s2 = 2.0_f64.sqrt();
    let b = vr_persistent_homology(&unit_square(), 1, 2.0);

    let h1 = finite(&b, 1);
    assert_eq!(h1.len(), 1);
    assert!(infinite(&b, 1).is_empty());
    assert_eq!(h1[0].start(), 1.0);
    assert!(h1[0].persistence() <= s2 - 1.0 + 1e-12);
    assert!(h1[0].persistence() > 0.0);
}

#[test]
fn circle_has_one_long_loop() {
    let n = 24;
    let space = PointCloudMetricSpace::euclidean(circle_points(n, 1.0));
    let max_filtration = 1.0;
    let b = vr_persistent_homology(&space, 1, max_filtration);

    let chord = 2.0 * (std::f64::consts::PI / n as f64).sin();
    assert_eq!(infinite(&b, 0).len(), 1);
    assert_eq!(finite(&b, 0).len(), n - 1);
    for i in finite(&b, 0) {
        assert!((i.persistence() - chord).abs() < 1e-9);
    }

    let long: Vec<_> = b
        .intervals(1)
        .iter()
        .filter(|i| i.finish_or(max_filtration) - i.start() > 0.5)
        .collect();
    assert_eq!(long.len(), 1);
    assert!((long[0].start() - chord).abs() < 1e-9);
}

/// The six points ±eᵢ: an octahedron, a combinatorial 2-sphere
fn octahedron() -> PointCloudMetricSpace {
    PointCloudMetricSpace::euclidean(array![
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0]
    ])
}

#[test]
fn octahedron_has_a_void() {
    let s2 = 2.0_f64.sqrt();
    let b = vr_persistent_homology(&octahedron(), 2, 1.9);

    assert_eq!(infinite(&b, 0).len(), 1);
    assert_eq!(finite(&b, 0).len(), 5);
    // every loop is filled as soon as it appears
    assert!(b.intervals(1).is_empty());
    assert_eq!(b.intervals(2).len(), 1);
    assert!(b.intervals(2)[0].is_infinite());
    assert!((b.intervals(2)[0].start() - s2).abs() < 1e-12);
}

#[test]
fn octahedron_void_is_filled_by_antipodal_edges() {
    let s2 = 2.0_f64.sqrt();
    let b = vr_persistent_homology(&octahedron(), 2, 2.5);

    assert_eq!(b.intervals(2).len(), 1);
    let void = b.intervals(2)[0];
    assert!((void.start() - s2).abs() < 1e-12);
    assert!((void.finish_or(f64::NAN) - 2.0).abs() < 1e-12);
}

#[test]
fn empty_space_gives_empty_barcodes() {
    let space = explicit(Array2::zeros((0, 0)));
    assert_eq!(default_persistent_homology(&space, 2, 1.0).num_intervals(), 0);

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        lw_persistent_homology_with_rng(&space, 1, 1.0, 10, 5, &mut rng).num_intervals(),
        0
    );
}

#[test]
fn single_point_is_one_component() {
    let space = explicit(array![[0.0]]);
    let b = default_persistent_homology(&space, 1, 1.0);
    assert_eq!(b.num_intervals(), 1);
    assert_eq!(b.intervals(0)[0], Interval::infinite(0.0));
}

#[test]
fn built_complexes_are_monotone() {
    let mut rng = StdRng::seed_from_u64(21);
    let space = PointCloudMetricSpace::euclidean(uniform_cube_points(40, 3, &mut rng));

    let vr = VietorisRips::new(&space, 0.5, 3).construct();
    assert!(vr.is_monotone());
    assert!(vr.is_sorted());

    let landmarks = LandmarkSelector::MaxMin.select(&space, 12, &mut rng);
    let lw = LazyWitness::new(&space, landmarks, 0.5, 3).construct();
    assert!(lw.is_monotone());
    assert!(lw.is_sorted());
    assert_eq!(lw.count_by_dimension()[0], 12);
}

#[test]
fn interval_count_matches_reduction_bookkeeping() {
    let mut rng = StdRng::seed_from_u64(5);
    for n in [10, 25, 40] {
        let space = PointCloudMetricSpace::euclidean(random_sphere_points(n, 2, &mut rng));
        let complex = VietorisRips::new(&space, 1.0, 3).construct();
        let (b, stats) = PersistenceEngine::new(2).compute_intervals_with_stats(&complex);

        assert_eq!(stats.marked - stats.zero_length, b.num_intervals());
        assert_eq!(stats.processed + stats.skipped, complex.len());
        assert!(!infinite(&b, 0).is_empty());
    }
}

#[test]
fn endpoint_export_of_computed_barcodes() {
    let space = explicit(array![
        [0.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0]
    ]);
    let b = vr_persistent_homology(&space, 1, 1.5);

    let m = b.endpoint_matrix(1.5);
    assert_eq!(m.dim(), (3, 3));
    let mut ends: Vec<f64> = m.column(2).to_vec();
    ends.sort_by(f64::total_cmp);
    assert_eq!(ends, vec![1.0, 1.0, 1.5]);

    let back = BarcodeCollection::from_json(&b.to_json().unwrap()).unwrap();
    assert_eq!(back, b);
    assert_eq!(back.to_string(), b.to_string());
}
