// Randomized SVD of an approximately low-rank matrix.

use rand::rngs::StdRng;
use rand::SeedableRng;
use randomized_svd::prelude::*;

pub fn main() {
    env_logger::init();

    let dimension = (500, 200);
    let rank = 20;

    let mut rng = StdRng::seed_from_u64(4664397);
    let mat = f64::random_approximate_low_rank_matrix(dimension, 1.0, 1E-3, &mut rng).unwrap();

    for power_iterations in 1..=DEFAULT_POWER_ITERATIONS {
        let svd = RandomizedSVDOptions::new(rank)
            .with_power_iterations(power_iterations)
            .compute(&mat, &mut rng)
            .unwrap();

        let rel_diff = f64::rel_diff_fro(svd.to_mat().view(), mat.view()).unwrap();

        println!(
            "Power iterations: {}, relative error: {:.3E}",
            power_iterations, rel_diff
        );
    }

    let svd = randomized_svd(&mat, rank, DEFAULT_POWER_ITERATIONS, &mut rng).unwrap();
    println!("Shape of U: {}x{}", svd.u.nrows(), svd.u.ncols());
    println!("Leading singular values: {:.4}", svd.s.slice(ndarray::s![0..5]));
    println!("Success.")
}
