//! phom demo: Barcodes of Sampled Circles and Spheres
//!
//! ## Protocol
//!
//! 1. Sample evenly spaced points on a circle and run Vietoris-Rips
//! 2. Sample random points on the 2-sphere and run the automatic strategy
//! 3. Sample a larger sphere so that the lazy witness complex is used
//! 4. Print barcodes, Betti numbers and the endpoint table

use phom::{
    circle_points,
    compute_persistent_homology,
    random_sphere_points,
    vr_persistent_homology,
    BarcodeCollection,
    BettiCurve,
    MetricSpace,
    PhomConfig,
    PointCloudMetricSpace,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  phom: Persistent Homology of Sampled Manifolds");
    println!("═══════════════════════════════════════════════════════════════\n");

    let seed = 2011;
    let mut rng = StdRng::seed_from_u64(seed);

    // ── Circle ──────────────────────────────────────────────────────
    let n_circle = 32;
    let circle = PointCloudMetricSpace::euclidean(circle_points(n_circle, 1.0));
    let max_filtration = 1.0;

    println!("Circle: {} points, radius 1, VR up to ε = {:.2}", n_circle, max_filtration);
    let barcodes = vr_persistent_homology(&circle, 1, max_filtration);
    report(&barcodes, max_filtration);

    // ── Small sphere (Vietoris-Rips) ────────────────────────────────
    let n_sphere = 60;
    let sphere = PointCloudMetricSpace::euclidean(random_sphere_points(n_sphere, 2, &mut rng));
    let config = PhomConfig {
        max_dimension: 2,
        max_filtration: 0.9,
        seed: Some(seed),
        ..PhomConfig::default()
    };

    println!("\nSphere S²: {} points, strategy {:?}", n_sphere, config.strategy);
    match compute_persistent_homology(&sphere, &config) {
        Ok(barcodes) => report(&barcodes, config.max_filtration),
        Err(e) => eprintln!("  failed: {}", e),
    }

    // ── Large sphere (lazy witness) ─────────────────────────────────
    let n_large = 2000;
    let large = PointCloudMetricSpace::euclidean(random_sphere_points(n_large, 2, &mut rng));
    let mut config = PhomConfig::auto_configure(&large).with_seed(seed);
    config.max_dimension = 2;
    config.max_filtration = 0.6;

    println!(
        "\nSphere S²: {} points, strategy {:?}, {} landmarks, {} maxmin samples",
        large.size(),
        config.strategy,
        config.landmark_count,
        config.maxmin_sample_size
    );
    match compute_persistent_homology(&large, &config) {
        Ok(barcodes) => report(&barcodes, config.max_filtration),
        Err(e) => eprintln!("  failed: {}", e),
    }

    println!("\n═══════════════════════════════════════════════════════════════");
}

fn report(barcodes: &BarcodeCollection, max_filtration: f64) {
    println!("  {} intervals", barcodes.num_intervals());
    for dim in barcodes.dimensions() {
        let finite = barcodes.intervals(dim).iter().filter(|i| !i.is_infinite()).count();
        let infinite = barcodes.intervals(dim).len() - finite;
        let longest = barcodes
            .intervals(dim)
            .iter()
            .map(|i| i.finish_or(max_filtration) - i.start())
            .fold(0.0, f64::max);
        println!(
            "  H{}: {:>4} finite, {:>2} infinite, longest {:.4}, entropy {:.4}",
            dim,
            finite,
            infinite,
            longest,
            barcodes.persistent_entropy(dim)
        );
    }

    let curve = BettiCurve::compute(barcodes, 0.0, max_filtration, 10);
    println!("  β₁ curve:");
    for (eps, b1) in curve.curve(1) {
        println!("    ε = {:.3}  β₁ = {}", eps, b1);
    }

    let table = barcodes.endpoint_matrix(max_filtration);
    println!("  endpoint table: {} rows × {} columns", table.nrows(), table.ncols());
}
