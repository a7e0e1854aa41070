use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ndarray::{Array1, Array2};
use num_methods_solvers::Method;

/// Deterministic diagonally dominant test matrix.
fn test_system(n: usize) -> (Array2<f64>, Array1<f64>) {
    let mut a = Array2::from_shape_fn((n, n), |(i, j)| {
        ((i as f64 * 3.7 + j as f64 * 1.3).sin()) * 0.9
    });
    for i in 0..n {
        let off: f64 = (0..n).filter(|&j| j != i).map(|j| a[[i, j]].abs()).sum();
        a[[i, i]] = off + 1.0 + (i as f64 * 0.11).cos().abs();
    }
    let b = Array1::from_shape_fn(n, |i| (i as f64 * 0.7).cos() * 10.0);
    (a, b)
}

fn bench_solvers(c: &mut Criterion) {
    let (a, b) = test_system(50);
    for method in [Method::Gauss, Method::Lu, Method::Lup] {
        c.bench_function(&format!("{} n=50", method.name()), |bencher| {
            bencher.iter(|| method.solve(black_box(&a), black_box(&b)).unwrap())
        });
    }
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
