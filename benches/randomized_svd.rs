use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use randomized_svd::prelude::*;

fn bench_power_iterations(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mat = f64::random_approximate_low_rank_matrix((1000, 400), 1.0, 1E-6, &mut rng).unwrap();

    let mut group = c.benchmark_group("randomized_svd_1000x400_rank_20");
    for power_iterations in [1usize, 3, 5].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(power_iterations),
            power_iterations,
            |b, &power_iterations| {
                b.iter(|| randomized_svd(black_box(&mat), 20, power_iterations, &mut rng).unwrap())
            },
        );
    }
    group.finish();
}

fn bench_exact_svd(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mat = f64::random_approximate_low_rank_matrix((1000, 400), 1.0, 1E-6, &mut rng).unwrap();

    c.bench_function("exact_svd_1000x400", |b| {
        b.iter(|| SVD::<f64>::compute_from(black_box(mat.view())).unwrap())
    });
}

criterion_group!(benches, bench_power_iterations, bench_exact_svd);
criterion_main!(benches);
