//! Dense matrices of algebraic cells.
//!
//! Matrices are stored in row-major order. The sizes in play are small
//! (exponent matrices of a handful of variables), so a dense layout with
//! simple access patterns is the right trade.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::One;
use thiserror::Error;

use berglund_algebra::{AlgebraicCell, CellError, CyclotomicElement, RenderMode};

/// Errors raised by matrix construction and algebra.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// The input was not a rectangular, non-empty, two-dimensional array.
    #[error("matrix must be rectangular with at least one row and one column")]
    MalformedShape,
    /// The operand shapes are incompatible for the attempted operation.
    #[error("operand shapes are incompatible: {left_rows}x{left_cols} and {right_rows}x{right_cols}")]
    ShapeMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },
    /// The matrix has determinant zero where invertibility is required.
    #[error("matrix is singular")]
    SingularMatrix,
    /// The finite-order inverse search exhausted its step cap.
    #[error("no inverse found within {0} multiplications")]
    OrderNotFound(usize),
    /// A cell-level operation failed.
    #[error(transparent)]
    Cell(#[from] CellError),
}

/// Dense rectangular matrix of [`AlgebraicCell`] entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExactMatrix {
    /// Entries in row-major order.
    data: Vec<AlgebraicCell>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl ExactMatrix {
    /// Creates a matrix from a 2D vector of cells.
    ///
    /// # Errors
    ///
    /// `MatrixError::MalformedShape` when the input is empty, contains an
    /// empty row, or is not rectangular.
    pub fn from_rows(rows: Vec<Vec<AlgebraicCell>>) -> Result<Self, MatrixError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(MatrixError::MalformedShape);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        if rows.iter().any(|row| row.len() != num_cols) {
            return Err(MatrixError::MalformedShape);
        }
        let data: Vec<AlgebraicCell> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Creates a matrix filled with integer zeros.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is zero.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        assert!(num_rows > 0 && num_cols > 0, "matrix dimensions must be positive");
        Self {
            data: vec![AlgebraicCell::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates the n-by-n integer identity matrix.
    ///
    /// # Panics
    ///
    /// Panics when `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = AlgebraicCell::one();
        }
        m
    }

    /// Creates a square matrix with the given diagonal and integer zeros
    /// elsewhere.
    ///
    /// # Panics
    ///
    /// Panics when `diagonal` is empty.
    #[must_use]
    pub fn diagonal(diagonal: Vec<AlgebraicCell>) -> Self {
        let n = diagonal.len();
        let mut m = Self::zeros(n, n);
        for (i, cell) in diagonal.into_iter().enumerate() {
            m[(i, i)] = cell;
        }
        m
    }

    /// The identity of the multiplicative group of cyclotomic matrices:
    /// the trivial root of unity on the diagonal, integer zeros elsewhere.
    ///
    /// This is the matrix the finite-order inverse search compares against.
    ///
    /// # Panics
    ///
    /// Panics when `n` is zero.
    #[must_use]
    pub fn unit_identity(n: usize) -> Self {
        Self::diagonal(vec![AlgebraicCell::from(CyclotomicElement::one()); n])
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&AlgebraicCell> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns the entries in row-major order.
    pub(crate) fn cells(&self) -> &[AlgebraicCell] {
        &self.data
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[AlgebraicCell] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Elementwise sum of two matrices.
    ///
    /// # Errors
    ///
    /// `MatrixError::ShapeMismatch` unless the shapes are identical; cell
    /// errors propagate for entry pairs outside the cell algebra.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return Err(self.shape_mismatch(other));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a.checked_add(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Matrix product.
    ///
    /// Accumulators start at the integer zero and zero products are
    /// skipped, so a dot product touching a single cyclotomic entry stays
    /// inside the cell algebra.
    ///
    /// # Errors
    ///
    /// `MatrixError::ShapeMismatch` unless `self.num_cols() ==
    /// other.num_rows()`; cell errors propagate.
    pub fn mm(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.num_cols != other.num_rows {
            return Err(self.shape_mismatch(other));
        }
        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = AlgebraicCell::zero();
                for k in 0..self.num_cols {
                    let a = &self[(i, k)];
                    let b = &other[(k, j)];
                    if a.is_zero() || b.is_zero() {
                        continue;
                    }
                    let product = a.checked_mul(b)?;
                    sum = sum.checked_add(&product)?;
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// Entrywise scalar product.
    ///
    /// # Errors
    ///
    /// Cell errors propagate for entries outside the cell algebra.
    pub fn scale(&self, scalar: &AlgebraicCell) -> Result<Self, MatrixError> {
        let data = self
            .data
            .iter()
            .map(|cell| cell.checked_mul(scalar))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        })
    }

    /// Raises a square matrix to a positive power by `k - 1` repeated
    /// multiplications.
    ///
    /// Deliberately O(k): the expected exponents are small finite group
    /// orders, and repeated products keep every intermediate power exact.
    ///
    /// # Errors
    ///
    /// Shape and cell errors propagate from the underlying products.
    ///
    /// # Panics
    ///
    /// Panics when `k` is zero.
    pub fn power(&self, k: u32) -> Result<Self, MatrixError> {
        assert!(k >= 1, "power requires a positive exponent");
        let mut result = self.clone();
        for _ in 1..k {
            result = result.mm(self)?;
        }
        Ok(result)
    }

    /// Renders the matrix with every entry centered to a common width,
    /// one row per line.
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        let rendered: Vec<String> = self.data.iter().map(|cell| cell.render(mode)).collect();
        let width = rendered.iter().map(String::len).max().unwrap_or(0) + 2;
        let mut out = String::new();
        for i in 0..self.num_rows {
            out.push('|');
            for j in 0..self.num_cols {
                if j > 0 {
                    out.push(' ');
                }
                let entry = &rendered[i * self.num_cols + j];
                out.push_str(&format!("{entry:^width$}"));
            }
            out.push('|');
            if i < self.num_rows - 1 {
                out.push('\n');
            }
        }
        out
    }

    fn shape_mismatch(&self, other: &Self) -> MatrixError {
        MatrixError::ShapeMismatch {
            left_rows: self.num_rows,
            left_cols: self.num_cols,
            right_rows: other.num_rows,
            right_cols: other.num_cols,
        }
    }
}

impl Index<(usize, usize)> for ExactMatrix {
    type Output = AlgebraicCell;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl IndexMut<(usize, usize)> for ExactMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl fmt::Display for ExactMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderMode::Additive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_rows(rows: &[&[i64]]) -> ExactMatrix {
        ExactMatrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&n| AlgebraicCell::from(n)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_malformed_shapes() {
        assert_eq!(
            ExactMatrix::from_rows(vec![]).unwrap_err(),
            MatrixError::MalformedShape
        );
        assert_eq!(
            ExactMatrix::from_rows(vec![vec![]]).unwrap_err(),
            MatrixError::MalformedShape
        );
        let ragged = vec![
            vec![AlgebraicCell::from(1)],
            vec![AlgebraicCell::from(1), AlgebraicCell::from(2)],
        ];
        assert_eq!(
            ExactMatrix::from_rows(ragged).unwrap_err(),
            MatrixError::MalformedShape
        );
    }

    #[test]
    fn test_add_shape_check() {
        let a = int_rows(&[&[1, 2], &[3, 4]]);
        let b = int_rows(&[&[1, 2, 3], &[4, 5, 6]]);
        assert!(matches!(
            a.checked_add(&b).unwrap_err(),
            MatrixError::ShapeMismatch { .. }
        ));
        let sum = a.checked_add(&a).unwrap();
        assert_eq!(sum, int_rows(&[&[2, 4], &[6, 8]]));
    }

    #[test]
    fn test_mm() {
        let a = int_rows(&[&[1, 2], &[3, 4]]);
        let b = int_rows(&[&[5, 6], &[7, 8]]);
        let c = a.mm(&b).unwrap();
        assert_eq!(c, int_rows(&[&[19, 22], &[43, 50]]));

        let row = int_rows(&[&[1, 2, 3]]);
        assert!(matches!(
            row.mm(&a).unwrap_err(),
            MatrixError::ShapeMismatch { .. }
        ));
    }

    #[test]
    fn test_mm_carries_cyclotomic_entries() {
        // A generalized permutation matrix times itself stays inside the
        // cell algebra: every dot product sees at most one nonzero term.
        let c = AlgebraicCell::from(CyclotomicElement::from_ratio(1, 4));
        let m = ExactMatrix::from_rows(vec![
            vec![AlgebraicCell::zero(), c.clone()],
            vec![c.clone(), AlgebraicCell::zero()],
        ])
        .unwrap();
        let square = m.mm(&m).unwrap();
        let half = AlgebraicCell::from(CyclotomicElement::from_ratio(1, 2));
        assert_eq!(square, ExactMatrix::diagonal(vec![half.clone(), half]));
    }

    #[test]
    fn test_power_is_repeated_product() {
        let a = int_rows(&[&[2, 0], &[0, 3]]);
        assert_eq!(a.power(1).unwrap(), a);
        assert_eq!(a.power(3).unwrap(), int_rows(&[&[8, 0], &[0, 27]]));
    }

    #[test]
    fn test_scale() {
        let a = int_rows(&[&[1, 2], &[3, 4]]);
        let doubled = a.scale(&AlgebraicCell::from(2)).unwrap();
        assert_eq!(doubled, int_rows(&[&[2, 4], &[6, 8]]));
    }

    #[test]
    fn test_transpose() {
        let a = int_rows(&[&[1, 2, 3], &[4, 5, 6]]);
        let t = a.transpose();
        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.num_cols(), 2);
        assert_eq!(t, int_rows(&[&[1, 4], &[2, 5], &[3, 6]]));
    }

    #[test]
    fn test_display_centers_entries() {
        let a = int_rows(&[&[1, 10], &[100, 2]]);
        let text = a.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        // widest entry is "100", so every column is 5 wide
        assert_eq!(lines[0], "|  1    10  |");
        assert_eq!(lines[1], "| 100    2  |");
    }

    #[test]
    fn test_unit_identity() {
        let id = ExactMatrix::unit_identity(2);
        assert_eq!(
            id[(0, 0)],
            AlgebraicCell::from(CyclotomicElement::one())
        );
        assert!(id[(0, 1)].is_zero());
    }
}
