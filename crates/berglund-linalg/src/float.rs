//! Conventional floating-point linear algebra.
//!
//! Used only where exactness is not required; the weight and symmetry
//! computations all go through the fraction-free kernel instead.

use crate::dense::{ExactMatrix, MatrixError};

/// Pivots smaller than this are treated as zero.
const PIVOT_EPSILON: f64 = 1e-12;

impl ExactMatrix {
    fn float_entries(&self) -> Result<Vec<f64>, MatrixError> {
        self.cells()
            .iter()
            .map(|cell| cell.to_f64().map_err(MatrixError::from))
            .collect()
    }

    /// Computes the determinant numerically by LU elimination with partial
    /// pivoting.
    ///
    /// # Errors
    ///
    /// Propagates `CellError::InvalidValueKind` for cyclotomic entries.
    ///
    /// # Panics
    ///
    /// Panics when the matrix is not square.
    pub fn float_determinant(&self) -> Result<f64, MatrixError> {
        assert!(self.is_square(), "determinant requires a square matrix");
        let n = self.num_rows();
        let mut m = self.float_entries()?;
        let mut det = 1.0;
        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&a, &b| {
                    m[a * n + col]
                        .abs()
                        .partial_cmp(&m[b * n + col].abs())
                        .expect("matrix entries are finite")
                })
                .expect("column range is non-empty");
            if m[pivot_row * n + col].abs() < PIVOT_EPSILON {
                return Ok(0.0);
            }
            if pivot_row != col {
                for k in 0..n {
                    m.swap(col * n + k, pivot_row * n + k);
                }
                det = -det;
            }
            let pivot = m[col * n + col];
            det *= pivot;
            for row in col + 1..n {
                let factor = m[row * n + col] / pivot;
                for k in col..n {
                    m[row * n + k] -= factor * m[col * n + k];
                }
            }
        }
        Ok(det)
    }

    /// Computes the inverse numerically by Gauss-Jordan elimination on the
    /// augmented matrix `[A | I]`.
    ///
    /// # Errors
    ///
    /// `MatrixError::SingularMatrix` when a pivot vanishes; cyclotomic
    /// entries propagate `CellError::InvalidValueKind`.
    ///
    /// # Panics
    ///
    /// Panics when the matrix is not square.
    pub fn float_inverse(&self) -> Result<Vec<Vec<f64>>, MatrixError> {
        assert!(self.is_square(), "inverse requires a square matrix");
        let n = self.num_rows();
        let entries = self.float_entries()?;
        let width = 2 * n;
        let mut aug = vec![0.0; n * width];
        for i in 0..n {
            for j in 0..n {
                aug[i * width + j] = entries[i * n + j];
            }
            aug[i * width + n + i] = 1.0;
        }
        gauss_jordan(&mut aug, n, width)?;
        Ok((0..n)
            .map(|i| (0..n).map(|j| aug[i * width + n + j]).collect())
            .collect())
    }

    /// Solves the linear system `A x = b` numerically.
    ///
    /// # Errors
    ///
    /// `MatrixError::ShapeMismatch` when `b` has the wrong length;
    /// `MatrixError::SingularMatrix` when the system is not uniquely
    /// solvable; cyclotomic entries propagate `CellError::InvalidValueKind`.
    ///
    /// # Panics
    ///
    /// Panics when the matrix is not square.
    pub fn solve(&self, b: &[f64]) -> Result<Vec<f64>, MatrixError> {
        assert!(self.is_square(), "solve requires a square matrix");
        let n = self.num_rows();
        if b.len() != n {
            return Err(MatrixError::ShapeMismatch {
                left_rows: n,
                left_cols: n,
                right_rows: b.len(),
                right_cols: 1,
            });
        }
        let entries = self.float_entries()?;
        let width = n + 1;
        let mut aug = vec![0.0; n * width];
        for i in 0..n {
            for j in 0..n {
                aug[i * width + j] = entries[i * n + j];
            }
            aug[i * width + n] = b[i];
        }
        gauss_jordan(&mut aug, n, width)?;
        Ok((0..n).map(|i| aug[i * width + n]).collect())
    }

    /// The Frobenius norm: the square root of the sum of squared entries.
    ///
    /// # Errors
    ///
    /// Propagates `CellError::InvalidValueKind` for cyclotomic entries.
    pub fn frobenius_norm(&self) -> Result<f64, MatrixError> {
        let entries = self.float_entries()?;
        Ok(entries.iter().map(|x| x * x).sum::<f64>().sqrt())
    }
}

/// Reduces the first `n` columns of an n-row augmented matrix to the
/// identity, carrying the remaining columns along.
fn gauss_jordan(aug: &mut [f64], n: usize, width: usize) -> Result<(), MatrixError> {
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| {
                aug[a * width + col]
                    .abs()
                    .partial_cmp(&aug[b * width + col].abs())
                    .expect("matrix entries are finite")
            })
            .expect("column range is non-empty");
        if aug[pivot_row * width + col].abs() < PIVOT_EPSILON {
            return Err(MatrixError::SingularMatrix);
        }
        if pivot_row != col {
            for k in 0..width {
                aug.swap(col * width + k, pivot_row * width + k);
            }
        }
        let pivot = aug[col * width + col];
        for k in 0..width {
            aug[col * width + k] /= pivot;
        }
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[row * width + col];
            if factor == 0.0 {
                continue;
            }
            for k in 0..width {
                aug[row * width + k] -= factor * aug[col * width + k];
            }
        }
    }
    Ok(())
}
