//! Fraction-free exact linear algebra for integer matrices.
//!
//! The determinant uses Bareiss elimination: every intermediate value is an
//! integer, every division is exact, and no floating error can enter. The
//! exact inverse is the adjoint divided by the determinant, so its entries
//! are rationals with a common denominator.

use dashu::base::{Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;

use berglund_algebra::{AlgebraicCell, CellError};

use crate::dense::{ExactMatrix, MatrixError};

impl ExactMatrix {
    /// Collects the entries as integers.
    ///
    /// # Errors
    ///
    /// `CellError::InvalidValueKind` (wrapped) when an entry is cyclotomic
    /// or a non-integral rational.
    fn integer_entries(&self) -> Result<Vec<IBig>, MatrixError> {
        self.cells()
            .iter()
            .map(|cell| {
                cell.as_integer().ok_or_else(|| {
                    MatrixError::from(CellError::InvalidValueKind {
                        expected: "integer",
                        found: cell.kind(),
                    })
                })
            })
            .collect()
    }

    /// Computes the exact determinant of a square integer matrix by
    /// fraction-free (Bareiss) elimination.
    ///
    /// # Errors
    ///
    /// Propagates `CellError::InvalidValueKind` for non-integer entries.
    ///
    /// # Panics
    ///
    /// Panics when the matrix is not square, or if an elimination step
    /// produces a non-exact division (an internal invariant violation for
    /// integer input, not a user error).
    pub fn exact_determinant(&self) -> Result<IBig, MatrixError> {
        assert!(self.is_square(), "determinant requires a square matrix");
        let entries = self.integer_entries()?;
        Ok(bareiss_determinant(entries, self.num_rows()))
    }

    /// Computes the cofactor matrix: entry (row, col) is `(-1)^(row+col)`
    /// times the determinant of the minor obtained by deleting that row
    /// and column.
    ///
    /// # Errors
    ///
    /// Propagates `CellError::InvalidValueKind` for non-integer entries.
    ///
    /// # Panics
    ///
    /// Panics when the matrix is not square.
    pub fn cofactor_matrix(&self) -> Result<Self, MatrixError> {
        assert!(self.is_square(), "cofactor matrix requires a square matrix");
        let n = self.num_rows();
        let entries = self.integer_entries()?;
        let mut cofactors = Self::zeros(n, n);
        for row in 0..n {
            for col in 0..n {
                let mut minor = Vec::with_capacity((n - 1) * (n - 1));
                for r in 0..n {
                    if r == row {
                        continue;
                    }
                    for c in 0..n {
                        if c == col {
                            continue;
                        }
                        minor.push(entries[r * n + c].clone());
                    }
                }
                let mut det = bareiss_determinant(minor, n - 1);
                if (row + col) % 2 == 1 {
                    det = -det;
                }
                cofactors[(row, col)] = AlgebraicCell::from(det);
            }
        }
        Ok(cofactors)
    }

    /// The adjoint (adjugate): the transpose of the cofactor matrix.
    ///
    /// # Errors
    ///
    /// Propagates `CellError::InvalidValueKind` for non-integer entries.
    pub fn adjoint(&self) -> Result<Self, MatrixError> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Computes the exact rational inverse: the adjoint divided entrywise
    /// by the exact determinant.
    ///
    /// # Errors
    ///
    /// `MatrixError::SingularMatrix` when the determinant is zero;
    /// `CellError::InvalidValueKind` propagates for non-integer entries.
    pub fn exact_inverse(&self) -> Result<Self, MatrixError> {
        let det = self.exact_determinant()?;
        if det == IBig::ZERO {
            return Err(MatrixError::SingularMatrix);
        }
        let negative = det.is_negative();
        let denominator = det.unsigned_abs();
        let adjoint = self.adjoint()?;
        let n = adjoint.num_rows();
        let mut inverse = Self::zeros(n, n);
        for row in 0..n {
            for col in 0..n {
                let numerator = match adjoint[(row, col)].as_integer() {
                    Some(value) if negative => -value,
                    Some(value) => value,
                    None => unreachable!("adjoint entries are integers"),
                };
                inverse[(row, col)] =
                    AlgebraicCell::from(RBig::from_parts(numerator, denominator.clone()));
            }
        }
        Ok(inverse)
    }
}

/// Bareiss fraction-free determinant over row-major integer entries.
///
/// `prev` holds the previous pivot (initially 1); each elimination step
/// rewrites the trailing submatrix as `(m[j][k]*m[i][i] - m[j][i]*m[i][k]) /
/// prev`, and that division is exact for integer input. The determinant of
/// the empty matrix is 1, the empty product.
fn bareiss_determinant(mut m: Vec<IBig>, n: usize) -> IBig {
    if n == 0 {
        return IBig::ONE;
    }
    let mut negated = false;
    let mut prev = IBig::ONE;
    for i in 0..n - 1 {
        if m[i * n + i] == IBig::ZERO {
            // swap with a lower row holding a nonzero entry in column i
            let Some(swap) = ((i + 1)..n).find(|&j| m[j * n + i] != IBig::ZERO) else {
                return IBig::ZERO;
            };
            for k in 0..n {
                m.swap(i * n + k, swap * n + k);
            }
            negated = !negated;
        }
        for j in (i + 1)..n {
            for k in (i + 1)..n {
                let numerator = &m[j * n + k] * &m[i * n + i] - &m[j * n + i] * &m[i * n + k];
                assert!(
                    &numerator % &prev == IBig::ZERO,
                    "fraction-free elimination requires exact division"
                );
                m[j * n + k] = numerator / &prev;
            }
        }
        prev = m[i * n + i].clone();
    }
    let det = m[n * n - 1].clone();
    if negated {
        -det
    } else {
        det
    }
}
