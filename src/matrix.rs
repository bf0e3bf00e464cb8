//! Dense row-major matrices.
//!
//! `Matrix` is the only numeric container the engine uses. It exposes the handful of
//! operations the forward/backward passes need: matrix product, element-wise apply,
//! element-wise combine and transpose. Shape mismatches are reported as
//! [`Error::InvalidShape`] and never panic.

use rand::Rng;

use crate::matmul::gemm_f64;
use crate::{Error, Result};

/// A dense `f64` matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// A `(rows, cols)` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidShape(format!(
                "buffer length {} does not match {rows}x{cols}",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from per-row vectors (copied into contiguous storage).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidShape(format!(
                    "row {i} has len {}, expected {cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// A `(rows, cols)` matrix whose entries are independent uniform draws in `[0, 1)`.
    ///
    /// Entries are drawn in row-major order, so a seeded RNG gives a reproducible fill.
    pub fn random_uniform<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..rows * cols).map(|_| rng.gen_range(0.0..1.0)).collect();
        Self { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Entry at `(row, col)`.
    ///
    /// Panics if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// The `row`-th row as a slice.
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Matrix product `self * rhs`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(Error::InvalidShape(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        if self.rows == 0 || rhs.cols == 0 || self.cols == 0 {
            return Ok(out);
        }

        gemm_f64(
            self.rows,
            rhs.cols,
            self.cols,
            1.0,
            &self.data,
            self.cols,
            1,
            &rhs.data,
            rhs.cols,
            1,
            0.0,
            &mut out.data,
            rhs.cols,
            1,
        );
        Ok(out)
    }

    /// Element-wise apply.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Element-wise combine of two same-shaped matrices.
    pub fn zip_with(&self, rhs: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        self.check_same_shape(rhs, "combine")?;
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Element-wise combine writing the result back into `self`.
    pub fn zip_with_in_place(&mut self, rhs: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<()> {
        self.check_same_shape(rhs, "combine")?;
        for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
            *a = f(*a, b);
        }
        Ok(())
    }

    /// Element-wise (Hadamard) product.
    #[inline]
    pub fn hadamard(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Element-wise difference `self - rhs`.
    #[inline]
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix> {
        self.zip_with(rhs, |a, b| a - b)
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                data[c * self.rows + r] = self.data[r * self.cols + c];
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    fn check_same_shape(&self, rhs: &Matrix, op: &str) -> Result<()> {
        if self.dims() != rhs.dims() {
            return Err(Error::InvalidShape(format!(
                "cannot {op} {}x{} with {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(&rows.iter().map(|r| r.to_vec()).collect::<Vec<_>>()).unwrap()
    }

    #[test]
    fn from_flat_validates_length() {
        assert!(Matrix::from_flat(2, 2, vec![1.0; 4]).is_ok());
        assert!(matches!(
            Matrix::from_flat(2, 2, vec![1.0; 3]),
            Err(Error::InvalidShape(_))
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(err, Err(Error::InvalidShape(_))));
    }

    #[test]
    fn matmul_multiplies_and_checks_inner_dims() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let b = m(&[&[1.0, 0.0], &[0.0, 1.0], &[1.0, 1.0]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c, m(&[&[4.0, 5.0], &[10.0, 11.0]]));

        assert!(matches!(a.matmul(&a), Err(Error::InvalidShape(_))));
    }

    #[test]
    fn matmul_with_empty_rows_yields_empty_result() {
        let a = Matrix::zeros(0, 3);
        let b = Matrix::zeros(3, 2);
        assert_eq!(a.matmul(&b).unwrap().dims(), (0, 2));
    }

    #[test]
    fn transpose_swaps_dims_and_entries() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn element_wise_ops_check_shapes() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[2.0, 2.0], &[0.5, -1.0]]);
        assert_eq!(a.hadamard(&b).unwrap(), m(&[&[2.0, 4.0], &[1.5, -4.0]]));
        assert_eq!(a.sub(&b).unwrap(), m(&[&[-1.0, 0.0], &[2.5, 5.0]]));
        assert_eq!(a.map(|v| v * 10.0), m(&[&[10.0, 20.0], &[30.0, 40.0]]));

        let c = Matrix::zeros(1, 2);
        assert!(matches!(a.hadamard(&c), Err(Error::InvalidShape(_))));

        let mut d = a.clone();
        d.zip_with_in_place(&b, |x, y| x + y).unwrap();
        assert_eq!(d, m(&[&[3.0, 4.0], &[3.5, 3.0]]));
        assert!(d.zip_with_in_place(&c, |x, _| x).is_err());
    }

    #[test]
    fn random_uniform_is_seeded_and_in_unit_interval() {
        let a = Matrix::random_uniform(4, 3, &mut StdRng::seed_from_u64(7));
        let b = Matrix::random_uniform(4, 3, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.dims(), (4, 3));
        assert!(a.as_slice().iter().all(|v| (0.0..1.0).contains(v)));
    }
}
