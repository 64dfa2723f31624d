//! # berglund-poly
//!
//! Invertible quasihomogeneous polynomials and their invariants.
//!
//! A polynomial is assembled from atomic blocks (Fermat, Chain, Loop) into
//! an integer exponent matrix; from there the crate derives the exact
//! rational weight system and the cyclotomic matrix whose entries generate
//! the polynomial's diagonal symmetry group. Permutations of the variables
//! are encoded as matrices over the same cell algebra so that both families
//! can feed a group-closure computation downstream.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod block;
pub mod permutation;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use block::{AtomicBlock, PolynomialError};
pub use permutation::{Permutation, PermutationError};
pub use polynomial::QuasihomogeneousPolynomial;
