//! # Berglund
//!
//! Exact algebraic invariants of invertible quasihomogeneous polynomials.
//!
//! The workspace computes the objects singularity theory and mirror
//! symmetry ask of such a polynomial:
//!
//! - the integer exponent matrix of its atomic blocks (Fermat, Chain, Loop)
//! - the exact rational weight system making every monomial weighted
//!   degree 1
//! - the cyclotomic inverse matrix whose entries generate the diagonal
//!   symmetry group
//! - permutations of the variables encoded over the same cell algebra
//!
//! All linear algebra is exact: fraction-free determinants over arbitrary
//! precision integers, rational inverses, and a closed algebra of roots of
//! unity.
//!
//! ## Quick Start
//!
//! ```rust
//! use berglund::prelude::*;
//!
//! let poly = QuasihomogeneousPolynomial::new(vec![
//!     AtomicBlock::loop_(vec![3, 3])?,
//! ])?;
//! assert_eq!(poly.w_string(), "W = (x_1^3 * x_2) + (x_1 * x_2^3)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use berglund_algebra as algebra;
pub use berglund_linalg as linalg;
pub use berglund_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use berglund_algebra::{AlgebraicCell, CellError, CyclotomicElement, RenderMode};
    pub use berglund_linalg::{ExactMatrix, MatrixError};
    pub use berglund_poly::{
        AtomicBlock, Permutation, PermutationError, PolynomialError, QuasihomogeneousPolynomial,
    };
}
