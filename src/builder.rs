//! Network builder.
//!
//! `NetworkBuilder` is the recommended way to define a network. Unlike the bare
//! constructors on [`Network`], it validates the configuration before allocating weights.
//!
//! ```rust
//! use kango::{GradientRule, NetworkBuilder};
//!
//! # fn main() -> kango::Result<()> {
//! let net = NetworkBuilder::new(4)
//!     .hidden(3)
//!     .output(3)
//!     .epochs(500)
//!     .learning_rate(0.1)
//!     .gradient_rule(GradientRule::Faithful)
//!     .build_with_seed(0)?;
//! assert!(net.is_initialized());
//! # Ok(())
//! # }
//! ```

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{ArchitectureConfig, GradientRule, Network, Result};

#[derive(Debug, Clone, Copy)]
/// Builder for a [`Network`].
pub struct NetworkBuilder {
    config: ArchitectureConfig,
}

impl NetworkBuilder {
    /// Start building a network that accepts `input_neurons` features per sample.
    ///
    /// Every other setting starts at its [`ArchitectureConfig::default`] value.
    pub fn new(input_neurons: usize) -> Self {
        Self {
            config: ArchitectureConfig {
                input_neurons,
                ..ArchitectureConfig::default()
            },
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ArchitectureConfig) -> Self {
        Self { config }
    }

    pub fn hidden(mut self, hidden_neurons: usize) -> Self {
        self.config.hidden_neurons = hidden_neurons;
        self
    }

    pub fn output(mut self, output_neurons: usize) -> Self {
        self.config.output_neurons = output_neurons;
        self
    }

    pub fn epochs(mut self, num_epochs: usize) -> Self {
        self.config.num_epochs = num_epochs;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    pub fn gradient_rule(mut self, rule: GradientRule) -> Self {
        self.config.gradient_rule = rule;
        self
    }

    /// The validated configuration.
    pub fn config(&self) -> Result<ArchitectureConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build using a deterministic seed.
    pub fn build_with_seed(self, seed: u64) -> Result<Network> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build_with_rng(&mut rng)
    }

    /// Build using the provided RNG.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Network> {
        let config = self.config()?;
        Ok(Network::new_with_rng(config, rng))
    }
}
