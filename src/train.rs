use tracing::{debug, trace};

use crate::{Error, Matrix, Network, Result, loss};

/// Outcome of [`Network::train`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainReport {
    /// Number of weight updates applied (one per epoch).
    pub epochs: usize,
}

impl Network {
    /// Full-batch gradient descent for exactly `num_epochs` epochs.
    ///
    /// Each epoch runs `forward`, computes `labels - output`, runs `backward` and applies
    /// `update`. There is no convergence check and no early stop. The first failing
    /// matrix operation aborts training and is returned as-is; weights updated by earlier
    /// epochs are kept.
    ///
    /// `features` is `(n, input_neurons)` and `labels` is `(n, output_neurons)`.
    pub fn train(&mut self, features: &Matrix, labels: &Matrix) -> Result<TrainReport> {
        if !self.is_initialized() {
            return Err(Error::UninitializedModel);
        }

        let cfg = *self.config();
        debug!(
            samples = features.rows(),
            epochs = cfg.num_epochs,
            learning_rate = cfg.learning_rate,
            rule = ?cfg.gradient_rule,
            "training started"
        );

        let mut epochs = 0;
        for epoch in 0..cfg.num_epochs {
            let output = self.forward(features)?;
            let label_error = loss::label_error(labels, &output)?;
            let gradients = self.backward(features, &output, &label_error)?;
            self.update(&gradients)?;

            epochs += 1;
            trace!(epoch, "epoch complete");
        }

        debug!(epochs, "training finished");
        Ok(TrainReport { epochs })
    }
}
