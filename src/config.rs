//! Architecture configuration.
//!
//! `ArchitectureConfig` fixes the layer widths and the training hyperparameters of a
//! [`crate::Network`]. It is `Copy` and never mutated once a network is built.
//!
//! The engine does not validate the configuration it is handed; call
//! [`ArchitectureConfig::validate`] (the builder and the CLI do) to reject zero widths or a
//! non-positive learning rate before they turn into shape errors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Activation, Error, Result};

/// How gradients are derived and which hidden activation prediction uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientRule {
    /// Reproduces the legacy formulas exactly.
    ///
    /// - both deltas use `sigmoid_prime` of the raw (unactivated) network output
    /// - prediction uses a ReLU hidden activation while training uses a sigmoid
    ///
    /// These are known inconsistencies: the rule is unstable once outputs leave `(0, 1)`,
    /// and it requires `hidden_neurons == output_neurons`.
    #[default]
    Faithful,
    /// Exact gradient of `0.5 * ||labels - output||^2` for the linear output layer, with a
    /// sigmoid hidden activation for both training and prediction.
    Corrected,
}

impl GradientRule {
    /// Hidden activation used by `Network::predict`.
    #[inline]
    pub fn predict_activation(self) -> Activation {
        match self {
            GradientRule::Faithful => Activation::ReLU,
            GradientRule::Corrected => Activation::Sigmoid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchitectureConfig {
    pub input_neurons: usize,
    pub hidden_neurons: usize,
    pub output_neurons: usize,
    pub num_epochs: usize,
    pub learning_rate: f64,
    pub gradient_rule: GradientRule,
}

impl Default for ArchitectureConfig {
    fn default() -> Self {
        Self {
            input_neurons: 4,
            hidden_neurons: 3,
            output_neurons: 3,
            num_epochs: 5000,
            learning_rate: 0.3,
            gradient_rule: GradientRule::Faithful,
        }
    }
}

impl ArchitectureConfig {
    /// Validate widths and hyperparameters.
    ///
    /// `num_epochs == 0` is rejected here, but [`crate::Network::train`] itself runs a
    /// zero-epoch configuration and leaves the weights untouched.
    pub fn validate(&self) -> Result<()> {
        if self.input_neurons == 0 {
            return Err(Error::InvalidConfig("input_neurons must be > 0".to_owned()));
        }
        if self.hidden_neurons == 0 {
            return Err(Error::InvalidConfig("hidden_neurons must be > 0".to_owned()));
        }
        if self.output_neurons == 0 {
            return Err(Error::InvalidConfig("output_neurons must be > 0".to_owned()));
        }
        if self.num_epochs == 0 {
            return Err(Error::InvalidConfig("num_epochs must be > 0".to_owned()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        if self.gradient_rule == GradientRule::Faithful
            && self.hidden_neurons != self.output_neurons
        {
            return Err(Error::InvalidConfig(format!(
                "the faithful gradient rule needs hidden_neurons == output_neurons, got {} and {}",
                self.hidden_neurons, self.output_neurons
            )));
        }
        Ok(())
    }

    /// Parse a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::InvalidConfig(format!("malformed TOML: {e}")))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }
}
