use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use kango::{ArchitectureConfig, GradientRule, Matrix, Network, loss};

fn config(rule: GradientRule) -> ArchitectureConfig {
    ArchitectureConfig {
        input_neurons: 64,
        hidden_neurons: 32,
        output_neurons: 32,
        num_epochs: 1,
        learning_rate: 1e-3,
        gradient_rule: rule,
    }
}

fn batch(rows: usize, cols: usize, seed: u64) -> Matrix {
    Matrix::random_uniform(rows, cols, &mut StdRng::seed_from_u64(seed))
}

fn network_forward_bench(c: &mut Criterion) {
    let net = Network::new_with_seed(config(GradientRule::Faithful), 0);
    let x = batch(256, 64, 1);

    c.bench_function("network_forward_256x64_32_32", |b| {
        b.iter(|| black_box(net.forward(black_box(&x)).unwrap()))
    });
}

fn network_predict_bench(c: &mut Criterion) {
    let net = Network::new_with_seed(config(GradientRule::Faithful), 0);
    let x = batch(256, 64, 1);

    c.bench_function("network_predict_256x64_32_32", |b| {
        b.iter(|| black_box(net.predict(black_box(&x)).unwrap()))
    });
}

fn network_epoch_bench(c: &mut Criterion) {
    let base = Network::new_with_seed(config(GradientRule::Corrected), 0);
    let x = batch(256, 64, 1);
    let y = batch(256, 32, 2);

    c.bench_function("network_backward_256x64_32_32", |b| {
        let out = base.forward(&x).unwrap();
        let err = loss::label_error(&y, &out).unwrap();
        b.iter(|| black_box(base.backward(black_box(&x), &out, &err).unwrap()))
    });

    c.bench_function("network_train_epoch_256x64_32_32", |b| {
        b.iter_batched(
            || base.clone(),
            |mut net| black_box(net.train(&x, &y).unwrap()),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    network_forward_bench,
    network_predict_bench,
    network_epoch_bench
);
criterion_main!(benches);
