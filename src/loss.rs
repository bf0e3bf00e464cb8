//! Loss helpers.
//!
//! The engine itself only needs the label error `labels - output`. `mse` is a
//! reporting helper for callers; training never computes a loss value.

use crate::{Error, Matrix, Result};

/// Element-wise `labels - output`.
#[inline]
pub fn label_error(labels: &Matrix, output: &Matrix) -> Result<Matrix> {
    labels.sub(output)
}

/// Mean squared error over all entries.
///
/// Returns `0.5 * mean((labels - output)^2)`.
pub fn mse(output: &Matrix, labels: &Matrix) -> Result<f64> {
    if output.dims() != labels.dims() {
        return Err(Error::InvalidShape(format!(
            "output is {:?}, labels are {:?}",
            output.dims(),
            labels.dims()
        )));
    }

    let n = output.as_slice().len();
    if n == 0 {
        return Ok(0.0);
    }

    let sum: f64 = output
        .as_slice()
        .iter()
        .zip(labels.as_slice())
        .map(|(&o, &y)| {
            let d = y - o;
            d * d
        })
        .sum();
    Ok(0.5 * sum / n as f64)
}
