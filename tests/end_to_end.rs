use kango::metrics::{accuracy, argmax_rows};
use kango::{ArchitectureConfig, Error, GradientRule, Matrix, Network, NetworkBuilder, loss};

fn scenario_config(rule: GradientRule) -> ArchitectureConfig {
    ArchitectureConfig {
        input_neurons: 4,
        hidden_neurons: 3,
        output_neurons: 3,
        num_epochs: 500,
        learning_rate: 0.1,
        gradient_rule: rule,
    }
}

fn one_hot_identity() -> Matrix {
    Matrix::from_rows(&[
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ])
    .unwrap()
}

/// Sample `i` switches on feature `i`; the fourth feature is always off.
fn indicator_features() -> Matrix {
    Matrix::from_rows(&[
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0],
    ])
    .unwrap()
}

/// Weights under which each sample drives only "its" hidden unit, and every output starts
/// strictly inside (0, 1).
fn decoupled_network(rule: GradientRule) -> Network {
    let weight0 = Matrix::from_rows(&[
        vec![1.0, -20.0, -20.0],
        vec![-20.0, 1.0, -20.0],
        vec![-20.0, -20.0, 1.0],
        vec![0.0, 0.0, 0.0],
    ])
    .unwrap();
    let weight1 = Matrix::from_rows(&[
        vec![0.6, 0.2, 0.2],
        vec![0.2, 0.6, 0.2],
        vec![0.2, 0.2, 0.6],
    ])
    .unwrap();
    Network::from_weights(scenario_config(rule), weight0, weight1).unwrap()
}

fn scenario_features() -> Matrix {
    Matrix::from_rows(&[
        vec![0.9, 0.1, 0.2, 0.1],
        vec![0.1, 0.8, 0.1, 0.3],
        vec![0.2, 0.1, 0.9, 0.2],
    ])
    .unwrap()
}

#[test]
fn seeded_scenario_trains_and_predicts_with_expected_shapes() {
    let x = scenario_features();
    let y = one_hot_identity();

    let mut net = NetworkBuilder::from_config(scenario_config(GradientRule::Faithful))
        .build_with_seed(2024)
        .unwrap();
    let report = net.train(&x, &y).unwrap();
    assert_eq!(report.epochs, 500);

    let (w0, w1) = net.weights().unwrap();
    assert_eq!(w0.dims(), (4, 3));
    assert_eq!(w1.dims(), (3, 3));

    let predictions = net.predict(&x).unwrap();
    assert_eq!(predictions.dims(), (3, 3));
}

#[test]
fn corrected_rule_hits_at_least_one_label_from_seeded_weights() {
    let x = scenario_features();
    let y = one_hot_identity();

    for seed in [0, 7, 42] {
        let mut net = NetworkBuilder::from_config(scenario_config(GradientRule::Corrected))
            .build_with_seed(seed)
            .unwrap();
        net.train(&x, &y).unwrap();
        let predictions = net.predict(&x).unwrap();

        assert_eq!(predictions.dims(), (3, 3));
        assert!(predictions.as_slice().iter().all(|v| v.is_finite()));
        let winners = argmax_rows(&predictions);
        assert!(
            (0..3).any(|i| winners[i] == i),
            "seed={seed} winners={winners:?}"
        );
    }
}

#[test]
fn faithful_rule_diverges_from_seed_zero() {
    // Outputs leave (0, 1), the output slope turns negative and the weights blow up.
    let mut net = NetworkBuilder::from_config(scenario_config(GradientRule::Faithful))
        .build_with_seed(0)
        .unwrap();
    let report = net.train(&scenario_features(), &one_hot_identity()).unwrap();
    assert_eq!(report.epochs, 500);

    let predictions = net.predict(&scenario_features()).unwrap();
    assert!(predictions.as_slice().iter().any(|v| !v.is_finite()));
}

#[test]
fn faithful_rule_learns_the_decoupled_scenario() {
    let x = indicator_features();
    let y = one_hot_identity();
    let mut net = decoupled_network(GradientRule::Faithful);

    net.train(&x, &y).unwrap();
    let predictions = net.predict(&x).unwrap();

    assert_eq!(predictions.dims(), (3, 3));
    assert!(predictions.as_slice().iter().all(|v| v.is_finite()));
    assert_eq!(argmax_rows(&predictions), vec![0, 1, 2]);
    assert_eq!(accuracy(&predictions, &y).unwrap(), 1.0);

    // The training-time outputs never left (0, 1).
    let output = net.forward(&x).unwrap();
    assert!(output.as_slice().iter().all(|&v| v > 0.0 && v < 1.0));
}

#[test]
fn corrected_rule_learns_the_decoupled_scenario() {
    let x = indicator_features();
    let y = one_hot_identity();
    let mut net = decoupled_network(GradientRule::Corrected);

    let before = loss::mse(&net.forward(&x).unwrap(), &y).unwrap();
    net.train(&x, &y).unwrap();
    let after = loss::mse(&net.forward(&x).unwrap(), &y).unwrap();
    assert!(after < before, "before={before} after={after}");

    let predictions = net.predict(&x).unwrap();
    assert_eq!(argmax_rows(&predictions), vec![0, 1, 2]);
    assert_eq!(accuracy(&predictions, &y).unwrap(), 1.0);
}

#[test]
fn faithful_prediction_differs_from_training_forward_pass() {
    // ReLU at prediction time, sigmoid during training.
    let net = decoupled_network(GradientRule::Faithful);
    let x = indicator_features();
    let forward = net.forward(&x).unwrap();
    let predicted = net.predict(&x).unwrap();
    assert_ne!(forward, predicted);
    // Sample 0 only activates hidden unit 0 with pre-activation 1.0 under ReLU.
    assert_eq!(predicted.row(0), &[0.6, 0.2, 0.2]);
}

#[test]
fn predict_is_repeatable_after_training() {
    let x = indicator_features();
    let y = one_hot_identity();
    let mut net = decoupled_network(GradientRule::Faithful);
    net.train(&x, &y).unwrap();
    assert_eq!(net.predict(&x).unwrap(), net.predict(&x).unwrap());
    assert_eq!(net.forward(&x).unwrap(), net.forward(&x).unwrap());
}

#[test]
fn uninitialized_model_is_reported() {
    let net = Network::uninitialized(scenario_config(GradientRule::Faithful));
    let err = net.predict(&indicator_features()).unwrap_err();
    assert_eq!(err, Error::UninitializedModel);
    assert!(err.to_string().contains("uninitialized model"));
}
