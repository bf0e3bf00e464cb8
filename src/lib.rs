//! A one-hidden-layer feed-forward network, trained from scratch.
//!
//! `kango` trains a small fully-connected classifier on tabular features with hand-derived
//! forward and backward passes and full-batch gradient descent. There is no autodiff and no
//! layer abstraction: the model is two weight matrices.
//!
//! # Topology and shapes
//!
//! - `input_neurons -> hidden_neurons -> output_neurons`, no biases.
//! - Samples are rows: features are `(n, input_neurons)`, labels and outputs are
//!   `(n, output_neurons)`.
//! - `weight0` is `(input_neurons, hidden_neurons)`, `weight1` is
//!   `(hidden_neurons, output_neurons)`. Shapes never change after construction.
//! - Training uses a sigmoid hidden activation and a linear output layer.
//!
//! # Gradient rules
//!
//! [`GradientRule::Faithful`] (the default) keeps the legacy formulas exactly, including
//! their known inconsistencies: the sigmoid slope is taken on the unactivated output for
//! both layers, and prediction switches the hidden activation to ReLU. Those formulas only
//! behave while outputs stay inside `(0, 1)`. [`GradientRule::Corrected`] computes the
//! exact squared-error gradient and predicts with the training activation.
//!
//! # Errors
//!
//! Shape mismatches surface as [`Error::InvalidShape`] from the matrix primitives and
//! propagate unchanged. [`Error::UninitializedModel`] is returned by every operation on a
//! network whose weights were never allocated.
//!
//! # Quick start
//!
//! ```rust
//! use kango::{Matrix, NetworkBuilder};
//!
//! # fn main() -> kango::Result<()> {
//! let x = Matrix::from_rows(&[
//!     vec![5.1, 3.5, 1.4, 0.2],
//!     vec![7.0, 3.2, 4.7, 1.4],
//!     vec![6.3, 3.3, 6.0, 2.5],
//! ])?;
//! let y = Matrix::from_rows(&[
//!     vec![1.0, 0.0, 0.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0],
//! ])?;
//!
//! let mut net = NetworkBuilder::new(4)
//!     .hidden(3)
//!     .output(3)
//!     .epochs(50)
//!     .learning_rate(0.01)
//!     .build_with_seed(0)?;
//!
//! let report = net.train(&x, &y)?;
//! assert_eq!(report.epochs, 50);
//!
//! let predictions = net.predict(&x)?;
//! assert_eq!(predictions.dims(), (3, 3));
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod builder;
pub mod config;
pub mod data;
pub mod error;
pub mod loss;
pub(crate) mod matmul;
pub mod matrix;
pub mod metrics;
pub mod network;
pub mod train;

pub use activation::Activation;
pub use builder::NetworkBuilder;
pub use config::{ArchitectureConfig, GradientRule};
pub use data::Dataset;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use network::{Gradients, Network};
pub use train::TrainReport;
