//! The network engine: two weight matrices, forward/backward passes and the update rule.
//!
//! Topology is fixed at `input -> hidden -> output`:
//! - `weight0` has shape `(input_neurons, hidden_neurons)`
//! - `weight1` has shape `(hidden_neurons, output_neurons)`
//!
//! Samples are rows. A batch of `n` samples is an `(n, input_neurons)` feature matrix and
//! the network output is `(n, output_neurons)`. There are no biases and the output layer
//! is linear.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::activation::{Activation, sigmoid_prime};
use crate::{ArchitectureConfig, Error, GradientRule, Matrix, Result};

/// A one-hidden-layer feed-forward network.
///
/// A network built with [`Network::uninitialized`] has no weights yet; every operation on
/// it returns [`Error::UninitializedModel`] until [`Network::init_weights`] runs.
#[derive(Debug, Clone)]
pub struct Network {
    config: ArchitectureConfig,
    weights: Option<[Matrix; 2]>,
}

/// Per-epoch parameter gradients (same shapes as the weight matrices).
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    layers: [Matrix; 2],
}

impl Gradients {
    /// Gradient for `weight0` (`layer == 0`) or `weight1` (`layer == 1`).
    ///
    /// Panics if `layer > 1`.
    #[inline]
    pub fn layer(&self, layer: usize) -> &Matrix {
        &self.layers[layer]
    }

    pub fn from_matrices(gradient0: Matrix, gradient1: Matrix) -> Self {
        Self {
            layers: [gradient0, gradient1],
        }
    }
}

impl Network {
    pub fn new_with_seed(config: ArchitectureConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(config, &mut rng)
    }

    /// Allocate both weight matrices and fill them with uniform draws in `[0, 1)`.
    ///
    /// `weight0` is drawn first, then `weight1`, each in row-major order.
    pub fn new_with_rng<R: Rng + ?Sized>(config: ArchitectureConfig, rng: &mut R) -> Self {
        let mut network = Self::uninitialized(config);
        network.init_weights(rng);
        network
    }

    /// A network whose weights have not been allocated.
    pub fn uninitialized(config: ArchitectureConfig) -> Self {
        Self {
            config,
            weights: None,
        }
    }

    /// Build a network around explicit weights.
    ///
    /// The weights must have the shapes implied by `config`.
    pub fn from_weights(
        config: ArchitectureConfig,
        weight0: Matrix,
        weight1: Matrix,
    ) -> Result<Self> {
        let expected0 = (config.input_neurons, config.hidden_neurons);
        let expected1 = (config.hidden_neurons, config.output_neurons);
        if weight0.dims() != expected0 {
            return Err(Error::InvalidShape(format!(
                "weight0 is {:?}, expected {expected0:?}",
                weight0.dims()
            )));
        }
        if weight1.dims() != expected1 {
            return Err(Error::InvalidShape(format!(
                "weight1 is {:?}, expected {expected1:?}",
                weight1.dims()
            )));
        }
        Ok(Self {
            config,
            weights: Some([weight0, weight1]),
        })
    }

    /// (Re)allocate the weights with fresh uniform draws from `rng`.
    pub fn init_weights<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let cfg = &self.config;
        let weight0 = Matrix::random_uniform(cfg.input_neurons, cfg.hidden_neurons, rng);
        let weight1 = Matrix::random_uniform(cfg.hidden_neurons, cfg.output_neurons, rng);
        debug!(
            weight0 = ?weight0.dims(),
            weight1 = ?weight1.dims(),
            "initialized weights"
        );
        self.weights = Some([weight0, weight1]);
    }

    #[inline]
    pub fn config(&self) -> &ArchitectureConfig {
        &self.config
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.weights.is_some()
    }

    /// `(weight0, weight1)`, or `None` before initialization.
    #[inline]
    pub fn weights(&self) -> Option<(&Matrix, &Matrix)> {
        self.weights.as_ref().map(|[w0, w1]| (w0, w1))
    }

    fn layers(&self) -> Result<&[Matrix; 2]> {
        self.weights.as_ref().ok_or(Error::UninitializedModel)
    }

    /// `activation(features * weight0)`.
    fn hidden_activation(&self, features: &Matrix, activation: Activation) -> Result<Matrix> {
        let [w0, _] = self.layers()?;
        let pre_activation = features.matmul(w0)?;
        Ok(pre_activation.map(|v| activation.forward(v)))
    }

    /// Training-time forward pass.
    ///
    /// Computes `sigmoid(features * weight0) * weight1`. No activation is applied to the
    /// output layer.
    pub fn forward(&self, features: &Matrix) -> Result<Matrix> {
        let [_, w1] = self.layers()?;
        let hidden = self.hidden_activation(features, Activation::Sigmoid)?;
        hidden.matmul(w1)
    }

    /// Backward pass.
    ///
    /// `output` is the result of [`Network::forward`] on `features` and `label_error` is
    /// `labels - output`. Returns weight-shaped gradients:
    /// - `gradient1 = hidden^T * delta1`
    /// - `gradient0 = features^T * delta0`
    ///
    /// The deltas depend on the configured [`GradientRule`]. With
    /// [`GradientRule::Faithful`]:
    /// - `delta1 = label_error ⊙ sigmoid_prime(output)`
    /// - `delta0 = (delta1 * weight1^T) ⊙ sigmoid_prime(output)`
    ///
    /// so `delta0` only has a shape when `hidden_neurons == output_neurons`; otherwise
    /// the Hadamard product fails with [`Error::InvalidShape`].
    ///
    /// With [`GradientRule::Corrected`]:
    /// - `delta1 = label_error`
    /// - `delta0 = (delta1 * weight1^T) ⊙ sigmoid_prime(hidden)`
    pub fn backward(
        &self,
        features: &Matrix,
        output: &Matrix,
        label_error: &Matrix,
    ) -> Result<Gradients> {
        let [_, w1] = self.layers()?;
        let hidden = self.hidden_activation(features, Activation::Sigmoid)?;

        let (delta1, hidden_slope) = match self.config.gradient_rule {
            GradientRule::Faithful => {
                let output_slope = output.map(sigmoid_prime);
                let delta1 = label_error.hadamard(&output_slope)?;
                // The hidden delta reuses the output-layer slope.
                (delta1, output_slope)
            }
            GradientRule::Corrected => {
                if label_error.dims() != output.dims() {
                    return Err(Error::InvalidShape(format!(
                        "label error is {:?}, output is {:?}",
                        label_error.dims(),
                        output.dims()
                    )));
                }
                (label_error.clone(), hidden.map(sigmoid_prime))
            }
        };

        let propagated = delta1.matmul(&w1.transpose())?;
        let delta0 = propagated.hadamard(&hidden_slope)?;

        let gradient1 = hidden.transpose().matmul(&delta1)?;
        let gradient0 = features.transpose().matmul(&delta0)?;

        Ok(Gradients::from_matrices(gradient0, gradient1))
    }

    /// Apply `weight += learning_rate * gradient` to both layers, in place.
    ///
    /// Since gradients are built from `labels - output`, adding them moves the output
    /// towards the labels.
    pub fn update(&mut self, gradients: &Gradients) -> Result<()> {
        let lr = self.config.learning_rate;
        let weights = self.weights.as_mut().ok_or(Error::UninitializedModel)?;

        // Check both layers first so a mismatch never leaves one layer updated.
        for (w, g) in weights.iter().zip(&gradients.layers) {
            if w.dims() != g.dims() {
                return Err(Error::InvalidShape(format!(
                    "gradient is {:?}, weight is {:?}",
                    g.dims(),
                    w.dims()
                )));
            }
        }

        for (w, g) in weights.iter_mut().zip(&gradients.layers) {
            w.zip_with_in_place(g, |v, grad| lr.mul_add(grad, v))?;
        }
        Ok(())
    }

    /// Inference.
    ///
    /// Computes `act(features * weight0) * weight1`, where `act` is ReLU under the faithful
    /// rule and sigmoid under the corrected rule. Does not touch the weights.
    pub fn predict(&self, features: &Matrix) -> Result<Matrix> {
        let [_, w1] = self.layers()?;
        let activation = self.config.gradient_rule.predict_activation();
        let hidden = self.hidden_activation(features, activation)?;
        hidden.matmul(w1)
    }
}
