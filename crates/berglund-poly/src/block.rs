//! Atomic building blocks of invertible quasihomogeneous polynomials.
//!
//! Every invertible quasihomogeneous polynomial is a sum of three kinds of
//! atomic pieces:
//!
//! - Fermat: `x^a`
//! - Chain: `x_1^{a_1} x_2 + x_2^{a_2} x_3 + ... + x_m^{a_m}`
//! - Loop: `x_1^{a_1} x_2 + ... + x_m^{a_m} x_1`

use thiserror::Error;

use berglund_linalg::MatrixError;

/// Errors raised while building a polynomial from blocks.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PolynomialError {
    /// A block was given the wrong number of exponents.
    #[error("{kind} blocks require at least {minimum} exponents, got {got}")]
    InvalidBlockArity {
        /// The block kind.
        kind: &'static str,
        /// The smallest admissible arity.
        minimum: usize,
        /// The arity that was supplied.
        got: usize,
    },
    /// An exponent was below 2.
    #[error("exponents must be at least 2, got {0}")]
    InvalidExponent(u32),
    /// A matrix-level operation failed while deriving the invariants.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// One atomic summand of an invertible quasihomogeneous polynomial.
///
/// A Fermat block carries exactly one exponent by construction; Chain and
/// Loop blocks carry their exponents in monomial order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AtomicBlock {
    /// `x^a`
    Fermat(u32),
    /// `x_1^{a_1} x_2 + ... + x_m^{a_m}`
    Chain(Vec<u32>),
    /// `x_1^{a_1} x_2 + ... + x_m^{a_m} x_1`
    Loop(Vec<u32>),
}

impl AtomicBlock {
    /// Creates a validated Fermat block.
    ///
    /// # Errors
    ///
    /// `PolynomialError::InvalidExponent` when the exponent is below 2.
    pub fn fermat(exponent: u32) -> Result<Self, PolynomialError> {
        let block = Self::Fermat(exponent);
        block.validate()?;
        Ok(block)
    }

    /// Creates a validated Chain block.
    ///
    /// # Errors
    ///
    /// `PolynomialError::InvalidBlockArity` when no exponents are given;
    /// `PolynomialError::InvalidExponent` when one is below 2.
    pub fn chain(exponents: Vec<u32>) -> Result<Self, PolynomialError> {
        let block = Self::Chain(exponents);
        block.validate()?;
        Ok(block)
    }

    /// Creates a validated Loop block.
    ///
    /// # Errors
    ///
    /// `PolynomialError::InvalidBlockArity` when fewer than two exponents
    /// are given; `PolynomialError::InvalidExponent` when one is below 2.
    pub fn loop_(exponents: Vec<u32>) -> Result<Self, PolynomialError> {
        let block = Self::Loop(exponents);
        block.validate()?;
        Ok(block)
    }

    /// Checks the arity and exponent rules for this block.
    ///
    /// # Errors
    ///
    /// `PolynomialError::InvalidBlockArity` or
    /// `PolynomialError::InvalidExponent` as for the constructors.
    pub fn validate(&self) -> Result<(), PolynomialError> {
        match self {
            Self::Fermat(exponent) => check_exponents(std::slice::from_ref(exponent)),
            Self::Chain(exponents) => {
                if exponents.is_empty() {
                    return Err(PolynomialError::InvalidBlockArity {
                        kind: "chain",
                        minimum: 1,
                        got: exponents.len(),
                    });
                }
                check_exponents(exponents)
            }
            Self::Loop(exponents) => {
                if exponents.len() < 2 {
                    return Err(PolynomialError::InvalidBlockArity {
                        kind: "loop",
                        minimum: 2,
                        got: exponents.len(),
                    });
                }
                check_exponents(exponents)
            }
        }
    }

    /// The number of monomials (and variables) this block contributes.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Fermat(_) => 1,
            Self::Chain(exponents) | Self::Loop(exponents) => exponents.len(),
        }
    }
}

fn check_exponents(exponents: &[u32]) -> Result<(), PolynomialError> {
    for &exponent in exponents {
        if exponent < 2 {
            return Err(PolynomialError::InvalidExponent(exponent));
        }
    }
    Ok(())
}
