//! Invertible quasihomogeneous polynomials and their derived invariants.

use std::fmt;

use dashu::rational::RBig;

use berglund_algebra::{AlgebraicCell, CellError};
use berglund_linalg::{ExactMatrix, MatrixError};

use crate::block::{AtomicBlock, PolynomialError};

/// An invertible quasihomogeneous polynomial built from atomic blocks.
///
/// All derived invariants are computed once at construction: the exponent
/// matrix and its transpose, the exact rational inverse, the weight system,
/// and the cyclotomic inverse matrix (with transpose) whose entries
/// generate the polynomial's diagonal symmetry group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuasihomogeneousPolynomial {
    blocks: Vec<AtomicBlock>,
    exponent_matrix: ExactMatrix,
    exponent_transpose: ExactMatrix,
    inverse_matrix: ExactMatrix,
    weights: Vec<RBig>,
    cyclotomic_inverse: ExactMatrix,
    cyclotomic_inverse_transpose: ExactMatrix,
}

impl QuasihomogeneousPolynomial {
    /// Builds a polynomial from an ordered sequence of atomic blocks.
    ///
    /// The monomials of the blocks are laid out consecutively, so block
    /// order fixes the variable numbering.
    ///
    /// # Errors
    ///
    /// `PolynomialError::InvalidBlockArity` / `InvalidExponent` when a
    /// block violates the arity or exponent rules;
    /// `MatrixError::MalformedShape` (wrapped) when no monomials are
    /// supplied; `MatrixError::SingularMatrix` (wrapped) when the exponent
    /// matrix is not invertible.
    pub fn new(blocks: Vec<AtomicBlock>) -> Result<Self, PolynomialError> {
        for block in &blocks {
            block.validate()?;
        }
        let size: usize = blocks.iter().map(AtomicBlock::arity).sum();
        if size == 0 {
            return Err(PolynomialError::Matrix(MatrixError::MalformedShape));
        }

        let exponent_matrix = build_exponent_matrix(&blocks, size);
        let exponent_transpose = exponent_matrix.transpose();
        let inverse_matrix = exponent_matrix.exact_inverse()?;
        let weights = derive_weights(&inverse_matrix)?;
        let cyclotomic_inverse = cast_to_cyclotomic(&inverse_matrix)?;
        let cyclotomic_inverse_transpose = cyclotomic_inverse.transpose();

        Ok(Self {
            blocks,
            exponent_matrix,
            exponent_transpose,
            inverse_matrix,
            weights,
            cyclotomic_inverse,
            cyclotomic_inverse_transpose,
        })
    }

    /// The blocks this polynomial was built from.
    #[must_use]
    pub fn blocks(&self) -> &[AtomicBlock] {
        &self.blocks
    }

    /// The number of monomials (equivalently, variables).
    #[must_use]
    pub fn num_variables(&self) -> usize {
        self.exponent_matrix.num_rows()
    }

    /// The integer exponent matrix: entry (row, col) is the exponent of
    /// variable `col` in monomial `row`.
    #[must_use]
    pub fn exponent_matrix(&self) -> &ExactMatrix {
        &self.exponent_matrix
    }

    /// The transpose of the exponent matrix, the exponent matrix of the
    /// dual polynomial in mirror constructions.
    #[must_use]
    pub fn exponent_transpose(&self) -> &ExactMatrix {
        &self.exponent_transpose
    }

    /// The exact rational inverse of the exponent matrix.
    #[must_use]
    pub fn inverse_matrix(&self) -> &ExactMatrix {
        &self.inverse_matrix
    }

    /// The weight system: the unique rational solution of `E w = (1,..,1)`,
    /// giving every monomial weighted degree 1.
    #[must_use]
    pub fn weights(&self) -> &[RBig] {
        &self.weights
    }

    /// The inverse exponent matrix with every entry read as a root of
    /// unity `e^(2πi·r)`; its entries generate the polynomial's diagonal
    /// symmetry group.
    #[must_use]
    pub fn cyclotomic_inverse(&self) -> &ExactMatrix {
        &self.cyclotomic_inverse
    }

    /// The transpose of the cyclotomic inverse matrix.
    #[must_use]
    pub fn cyclotomic_inverse_transpose(&self) -> &ExactMatrix {
        &self.cyclotomic_inverse_transpose
    }

    /// Renders the polynomial as a sum of monomials, one parenthesized
    /// term per row of the exponent matrix.
    #[must_use]
    pub fn w_string(&self) -> String {
        format!("W = {}", monomial_sum(&self.exponent_matrix))
    }

    /// Renders the dual polynomial, read off the transposed exponent
    /// matrix.
    #[must_use]
    pub fn w_transpose_string(&self) -> String {
        format!("W^T = {}", monomial_sum(&self.exponent_transpose))
    }
}

impl fmt::Display for QuasihomogeneousPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.w_string())
    }
}

/// Lays the blocks out along the diagonal of an `size`-by-`size` integer
/// matrix, walking a monomial cursor.
fn build_exponent_matrix(blocks: &[AtomicBlock], size: usize) -> ExactMatrix {
    let mut matrix = ExactMatrix::zeros(size, size);
    let mut cursor = 0;
    for block in blocks {
        match block {
            AtomicBlock::Fermat(exponent) => {
                matrix[(cursor, cursor)] = AlgebraicCell::from(i64::from(*exponent));
                cursor += 1;
            }
            AtomicBlock::Chain(exponents) => {
                for (i, &exponent) in exponents.iter().enumerate() {
                    matrix[(cursor + i, cursor + i)] = AlgebraicCell::from(i64::from(exponent));
                    if i < exponents.len() - 1 {
                        matrix[(cursor + i, cursor + i + 1)] = AlgebraicCell::one();
                    }
                }
                cursor += exponents.len();
            }
            AtomicBlock::Loop(exponents) => {
                let arity = exponents.len();
                for (i, &exponent) in exponents.iter().enumerate() {
                    matrix[(cursor + i, cursor + i)] = AlgebraicCell::from(i64::from(exponent));
                    if i < arity - 1 {
                        matrix[(cursor + i, cursor + i + 1)] = AlgebraicCell::one();
                    } else {
                        // the last monomial couples back to the block's first
                        matrix[(cursor + i, cursor)] = AlgebraicCell::one();
                    }
                }
                cursor += arity;
            }
        }
    }
    matrix
}

fn derive_weights(inverse: &ExactMatrix) -> Result<Vec<RBig>, PolynomialError> {
    let size = inverse.num_rows();
    let ones = ExactMatrix::from_rows(vec![vec![AlgebraicCell::one()]; size])?;
    let column = inverse.mm(&ones)?;
    (0..size)
        .map(|row| {
            column[(row, 0)].as_rational().ok_or_else(|| {
                PolynomialError::Matrix(MatrixError::from(CellError::InvalidValueKind {
                    expected: "rational",
                    found: column[(row, 0)].kind(),
                }))
            })
        })
        .collect()
}

fn cast_to_cyclotomic(inverse: &ExactMatrix) -> Result<ExactMatrix, PolynomialError> {
    let mut matrix = ExactMatrix::zeros(inverse.num_rows(), inverse.num_cols());
    for row in 0..inverse.num_rows() {
        for col in 0..inverse.num_cols() {
            let root = inverse[(row, col)]
                .to_cyclotomic()
                .map_err(MatrixError::from)?;
            matrix[(row, col)] = AlgebraicCell::from(root);
        }
    }
    Ok(matrix)
}

fn monomial_sum(matrix: &ExactMatrix) -> String {
    let mut terms = Vec::with_capacity(matrix.num_rows());
    for row in 0..matrix.num_rows() {
        let mut factors = Vec::new();
        for col in 0..matrix.num_cols() {
            let cell = &matrix[(row, col)];
            if cell.is_zero() {
                continue;
            }
            if row == col {
                factors.push(format!("x_{}^{}", col + 1, cell));
            } else {
                factors.push(format!("x_{}", col + 1));
            }
        }
        terms.push(format!("({})", factors.join(" * ")));
    }
    terms.join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use berglund_algebra::CyclotomicElement;

    fn rational(num: i64, den: i64) -> RBig {
        use dashu::base::UnsignedAbs;
        use dashu::integer::IBig;
        RBig::from_parts(IBig::from(num), IBig::from(den).unsigned_abs())
    }

    fn int_rows(rows: &[&[i64]]) -> ExactMatrix {
        ExactMatrix::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&n| AlgebraicCell::from(n)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_fermat_polynomial() {
        let poly = QuasihomogeneousPolynomial::new(vec![AtomicBlock::fermat(4).unwrap()]).unwrap();
        assert_eq!(poly.exponent_matrix(), &int_rows(&[&[4]]));
        assert_eq!(poly.weights(), &[rational(1, 4)]);
        assert_eq!(
            poly.cyclotomic_inverse()[(0, 0)],
            AlgebraicCell::from(CyclotomicElement::from_ratio(1, 4))
        );
    }

    #[test]
    fn test_chain_polynomial() {
        let poly =
            QuasihomogeneousPolynomial::new(vec![AtomicBlock::chain(vec![2, 2]).unwrap()]).unwrap();
        assert_eq!(poly.exponent_matrix(), &int_rows(&[&[2, 1], &[0, 2]]));
        assert_eq!(poly.weights(), &[rational(1, 4), rational(1, 2)]);
    }

    #[test]
    fn test_loop_polynomial() {
        let poly =
            QuasihomogeneousPolynomial::new(vec![AtomicBlock::loop_(vec![3, 3]).unwrap()]).unwrap();
        assert_eq!(poly.exponent_matrix(), &int_rows(&[&[3, 1], &[1, 3]]));
        assert_eq!(
            poly.exponent_matrix().exact_determinant().unwrap(),
            dashu::integer::IBig::from(8)
        );
        assert_eq!(poly.weights(), &[rational(1, 4), rational(1, 4)]);
    }

    #[test]
    fn test_mixed_blocks_layout() {
        let poly = QuasihomogeneousPolynomial::new(vec![
            AtomicBlock::fermat(3).unwrap(),
            AtomicBlock::chain(vec![2, 2]).unwrap(),
            AtomicBlock::loop_(vec![2, 2]).unwrap(),
        ])
        .unwrap();
        assert_eq!(poly.num_variables(), 5);
        assert_eq!(
            poly.exponent_matrix(),
            &int_rows(&[
                &[3, 0, 0, 0, 0],
                &[0, 2, 1, 0, 0],
                &[0, 0, 2, 0, 0],
                &[0, 0, 0, 2, 1],
                &[0, 0, 0, 1, 2],
            ])
        );
    }

    #[test]
    fn test_weights_give_degree_one() {
        // E * w = (1, ..., 1) for every block mix
        let poly = QuasihomogeneousPolynomial::new(vec![
            AtomicBlock::loop_(vec![2, 3, 2]).unwrap(),
            AtomicBlock::fermat(5).unwrap(),
        ])
        .unwrap();
        let weights = ExactMatrix::from_rows(
            poly.weights()
                .iter()
                .map(|w| vec![AlgebraicCell::from(w.clone())])
                .collect(),
        )
        .unwrap();
        let degrees = poly.exponent_matrix().mm(&weights).unwrap();
        for row in 0..poly.num_variables() {
            assert!(degrees[(row, 0)].is_one());
        }
    }

    #[test]
    fn test_symmetry_generator_has_finite_order() {
        // the rows of the cyclotomic inverse act diagonally; the diagonal
        // matrix of any row is a symmetry of the polynomial and has finite
        // order, so the power walk finds its inverse
        let poly =
            QuasihomogeneousPolynomial::new(vec![AtomicBlock::chain(vec![2, 3]).unwrap()]).unwrap();
        let generator = ExactMatrix::diagonal(poly.cyclotomic_inverse().row(0).to_vec());
        let inverse = generator.unit_inverse(Some(64)).unwrap();
        assert_eq!(
            generator.mm(&inverse).unwrap(),
            ExactMatrix::unit_identity(2)
        );
    }

    #[test]
    fn test_empty_polynomial_rejected() {
        assert!(matches!(
            QuasihomogeneousPolynomial::new(vec![]).unwrap_err(),
            PolynomialError::Matrix(MatrixError::MalformedShape)
        ));
    }

    #[test]
    fn test_invalid_block_rejected() {
        assert_eq!(
            QuasihomogeneousPolynomial::new(vec![AtomicBlock::Fermat(1)]).unwrap_err(),
            PolynomialError::InvalidExponent(1)
        );
        assert_eq!(
            QuasihomogeneousPolynomial::new(vec![AtomicBlock::Loop(vec![2])]).unwrap_err(),
            PolynomialError::InvalidBlockArity {
                kind: "loop",
                minimum: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_renderings() {
        let poly = QuasihomogeneousPolynomial::new(vec![
            AtomicBlock::chain(vec![2, 2]).unwrap(),
            AtomicBlock::fermat(3).unwrap(),
        ])
        .unwrap();
        assert_eq!(
            poly.w_string(),
            "W = (x_1^2 * x_2) + (x_2^2) + (x_3^3)"
        );
        assert_eq!(
            poly.w_transpose_string(),
            "W^T = (x_1^2) + (x_1 * x_2^2) + (x_3^3)"
        );
        assert_eq!(poly.to_string(), poly.w_string());
    }

    #[test]
    fn test_cyclotomic_inverse_entries_are_normalized() {
        // a loop inverse has negative rational entries; the cast must land
        // them in [0, 1)
        let poly =
            QuasihomogeneousPolynomial::new(vec![AtomicBlock::loop_(vec![3, 3]).unwrap()]).unwrap();
        // E^-1 = 1/8 * [[3, -1], [-1, 3]]
        assert_eq!(poly.inverse_matrix()[(0, 1)], AlgebraicCell::from(rational(-1, 8)));
        assert_eq!(
            poly.cyclotomic_inverse()[(0, 1)],
            AlgebraicCell::from(CyclotomicElement::from_ratio(7, 8))
        );
    }
}
