//! Activation functions.
//!
//! The hidden layer computes `features * weight0` and then applies an activation
//! element-wise. Training always uses the sigmoid; prediction uses whichever hidden
//! activation the configured [`crate::GradientRule`] asks for. The output layer is linear.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Element-wise activation function.
pub enum Activation {
    Sigmoid,
    ReLU,
}

impl Activation {
    #[inline]
    pub fn forward(self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => sigmoid(x),
            Activation::ReLU => x.max(0.0),
        }
    }
}

/// Logistic sigmoid `1 / (1 + e^-x)`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    // Numerically stable sigmoid.
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

/// Sigmoid derivative expressed in terms of the sigmoid's output: `y * (1 - y)`.
///
/// The faithful gradient rule also applies this to the unactivated network output.
#[inline]
pub fn sigmoid_prime(y: f64) -> f64 {
    y * (1.0 - y)
}
