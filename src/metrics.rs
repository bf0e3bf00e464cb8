//! Metrics.
//!
//! Metrics are evaluation helpers (they do not participate in training). Interpreting a
//! network output row as a class is the caller's business; these helpers do it the usual
//! way, by the column of maximum value.

use crate::{Error, Matrix, Result};

/// Index of the maximum entry of each row. The first maximum wins on ties.
pub fn argmax_rows(m: &Matrix) -> Vec<usize> {
    (0..m.rows())
        .map(|r| {
            let row = m.row(r);
            let mut best = 0;
            for (c, &v) in row.iter().enumerate().skip(1) {
                if v > row[best] {
                    best = c;
                }
            }
            best
        })
        .collect()
}

/// Fraction of samples whose label column holds the row maximum of the prediction.
///
/// `labels` is one-hot; the hot column is the first entry equal to `1.0` (column 0 if the
/// row has none). A tie for the maximum counts as a hit.
pub fn accuracy(predictions: &Matrix, labels: &Matrix) -> Result<f64> {
    if predictions.dims() != labels.dims() {
        return Err(Error::InvalidShape(format!(
            "predictions are {:?}, labels are {:?}",
            predictions.dims(),
            labels.dims()
        )));
    }
    if predictions.rows() == 0 {
        return Err(Error::InvalidData("no predictions to score".to_owned()));
    }

    let mut hits = 0_usize;
    for r in 0..predictions.rows() {
        let class = labels
            .row(r)
            .iter()
            .position(|&v| v == 1.0)
            .unwrap_or(0);
        let row = predictions.row(r);
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if row[class] == max {
            hits += 1;
        }
    }

    Ok(hits as f64 / predictions.rows() as f64)
}
