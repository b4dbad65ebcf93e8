//! Skip-zero iteration and sign-prediction benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_predict::*;

/// Dense vector of `len` elements where every `stride`-th element is non-zero.
fn strided(len: usize, stride: usize) -> Vec<f64> {
    (0..len)
        .map(|i| if i % stride == 0 { (i as f64).sin() + 2.0 } else { 0.0 })
        .collect()
}

fn benchmark_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_value_iteration");
    for stride in [1usize, 10, 100] {
        let values = strided(100_000, stride);
        group.bench_with_input(BenchmarkId::from_parameter(stride), &values, |b, values| {
            b.iter(|| {
                make_vector_index_value_iterator(black_box(values))
                    .fold(0.0, |acc, entry| acc + entry.value)
            });
        });
    }
    group.finish();
}

fn benchmark_sign_predictor(c: &mut Criterion) {
    let weights: Vec<f64> = (0..10_000).map(|i| ((i % 7) as f64) - 3.0).collect();
    let classifier = make_sign_predictor(LinearPredictor::new(weights, 0.5));
    let dense = DenseDataVector::from(strided(10_000, 20));
    let sparse = SparseDataVector::from_index_value_iterator(dense.index_values())
        .expect("dense cursor yields increasing indices");

    c.bench_function("sign_predict_dense_10k", |b| {
        b.iter(|| classifier.predict(black_box(&dense)));
    });
    c.bench_function("linear_score_sparse_10k", |b| {
        b.iter(|| classifier.predictor().score(black_box(&sparse)));
    });
}

criterion_group!(benches, benchmark_iteration, benchmark_sign_predictor);
criterion_main!(benches);
