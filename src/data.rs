//! Dataset loading.
//!
//! A `Dataset` pairs a feature matrix (rows = samples, columns = inputs) with a one-hot
//! label matrix (rows = samples, columns = classes). CSV files carry both side by side:
//! the first `input_dim` columns are features, the next `label_dim` columns are labels.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::{Error, Matrix, Result};

#[derive(Debug, Clone)]
pub struct Dataset {
    features: Matrix,
    labels: Matrix,
}

impl Dataset {
    /// Pair a feature matrix with a label matrix. Row counts must match.
    pub fn from_matrices(features: Matrix, labels: Matrix) -> Result<Self> {
        if features.rows() != labels.rows() {
            return Err(Error::InvalidData(format!(
                "features have {} rows, labels have {}",
                features.rows(),
                labels.rows()
            )));
        }
        Ok(Self { features, labels })
    }

    /// Load a CSV file with a header row.
    pub fn from_csv_path<P: AsRef<Path>>(
        path: P,
        input_dim: usize,
        label_dim: usize,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::InvalidData(format!("cannot open {}: {e}", path.display())))?;
        let dataset = Self::from_csv_reader(file, input_dim, label_dim)?;
        debug!(
            path = %path.display(),
            samples = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV records from `reader`. The first record is a header and is skipped.
    ///
    /// Every record must have exactly `input_dim + label_dim` numeric fields.
    pub fn from_csv_reader<R: Read>(reader: R, input_dim: usize, label_dim: usize) -> Result<Self> {
        if input_dim == 0 || label_dim == 0 {
            return Err(Error::InvalidData(format!(
                "input_dim and label_dim must be > 0, got {input_dim} and {label_dim}"
            )));
        }

        let width = input_dim + label_dim;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut features = Vec::new();
        let mut labels = Vec::new();
        let mut samples = 0;

        for (idx, record) in reader.records().enumerate() {
            // Line 1 is the header.
            let line = idx + 2;
            let record =
                record.map_err(|e| Error::InvalidData(format!("record on line {line}: {e}")))?;
            if record.len() != width {
                return Err(Error::InvalidData(format!(
                    "record on line {line} has {} fields, expected {width}",
                    record.len()
                )));
            }

            for (col, field) in record.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| {
                    Error::InvalidData(format!(
                        "record on line {line}, column {col}: {field:?} is not a number"
                    ))
                })?;
                if col < input_dim {
                    features.push(value);
                } else {
                    labels.push(value);
                }
            }
            samples += 1;
        }

        Self::from_matrices(
            Matrix::from_flat(samples, input_dim, features)?,
            Matrix::from_flat(samples, label_dim, labels)?,
        )
    }

    /// Check that every label row holds exactly one `1.0` and zeros elsewhere.
    pub fn validate_one_hot(&self) -> Result<()> {
        for r in 0..self.labels.rows() {
            let row = self.labels.row(r);
            let ones = row.iter().filter(|&&v| v == 1.0).count();
            let zeros = row.iter().filter(|&&v| v == 0.0).count();
            if ones != 1 || ones + zeros != row.len() {
                return Err(Error::InvalidData(format!(
                    "label row {r} is not one-hot: {row:?}"
                )));
            }
        }
        Ok(())
    }

    #[inline]
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.features.rows()
    }

    #[inline]
    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn features(&self) -> &Matrix {
        &self.features
    }

    #[inline]
    pub fn labels(&self) -> &Matrix {
        &self.labels
    }
}
