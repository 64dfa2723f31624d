//! The closed cell algebra.
//!
//! An `AlgebraicCell` is the entry type of an exact matrix: an arbitrary
//! precision integer, a rational, or a root of unity. Addition and
//! multiplication are defined by an explicit total table across the variant
//! pairs; pairings outside the table fail with [`CellError`].

use dashu::integer::IBig;
use dashu::rational::RBig;
use std::fmt;
use thiserror::Error;

use crate::cyclotomic::{CyclotomicElement, RenderMode};

/// Errors raised by cell arithmetic and casts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CellError {
    /// The operation is not defined for this pair of cell kinds.
    #[error("unsupported operand kinds for {op}: {left} and {right}")]
    UnsupportedOperand {
        /// Name of the attempted operation.
        op: &'static str,
        /// Kind of the left operand.
        left: &'static str,
        /// Kind of the right operand.
        right: &'static str,
    },
    /// A cast was applied to a cell of the wrong kind.
    #[error("expected a {expected} value, found {found}")]
    InvalidValueKind {
        /// The kind the cast requires.
        expected: &'static str,
        /// The kind that was found.
        found: &'static str,
    },
}

/// A single matrix entry: integer, rational, or root of unity.
#[derive(Clone, Debug)]
pub enum AlgebraicCell {
    /// An arbitrary precision integer.
    Integer(IBig),
    /// An arbitrary precision rational.
    Rational(RBig),
    /// A root of unity.
    Cyclotomic(CyclotomicElement),
}

impl AlgebraicCell {
    /// The integer zero cell.
    #[must_use]
    pub fn zero() -> Self {
        Self::Integer(IBig::ZERO)
    }

    /// The integer one cell.
    #[must_use]
    pub fn one() -> Self {
        Self::Integer(IBig::ONE)
    }

    /// The kind of this cell, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Rational(_) => "rational",
            Self::Cyclotomic(_) => "cyclotomic",
        }
    }

    /// True if this cell is the numeric zero.
    ///
    /// A cyclotomic cell is never zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => n == &IBig::ZERO,
            Self::Rational(r) => r == &RBig::ZERO,
            Self::Cyclotomic(_) => false,
        }
    }

    /// True if this cell is the numeric one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Integer(n) => n == &IBig::ONE,
            Self::Rational(r) => r == &RBig::ONE,
            Self::Cyclotomic(_) => false,
        }
    }

    /// Adds two cells.
    ///
    /// Numeric kinds add freely, promoting to rational when either side is
    /// rational. A cyclotomic admits only the numeric zero as the other
    /// summand and passes through unchanged; this is what lets a matrix
    /// product fold a cyclotomic entry into an integer-zero accumulator.
    ///
    /// # Errors
    ///
    /// `CellError::UnsupportedOperand` for any other pairing.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, CellError> {
        use AlgebraicCell::{Cyclotomic, Integer, Rational};
        match (self, rhs) {
            (Integer(a), Integer(b)) => Ok(Integer(a + b)),
            (Integer(a), Rational(b)) | (Rational(b), Integer(a)) => {
                Ok(Rational(RBig::from(a.clone()) + b))
            }
            (Rational(a), Rational(b)) => Ok(Rational(a + b)),
            (Cyclotomic(c), other) | (other, Cyclotomic(c)) if other.is_zero() => {
                Ok(Cyclotomic(c.clone()))
            }
            (left, right) => Err(CellError::UnsupportedOperand {
                op: "add",
                left: left.kind(),
                right: right.kind(),
            }),
        }
    }

    /// Multiplies two cells.
    ///
    /// Numeric kinds multiply freely, promoting to rational when either
    /// side is rational. Cyclotomic times cyclotomic adds exponents mod 1;
    /// the numeric zero annihilates a cyclotomic and the numeric one leaves
    /// it unchanged.
    ///
    /// # Errors
    ///
    /// `CellError::UnsupportedOperand` for any other pairing.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, CellError> {
        use AlgebraicCell::{Cyclotomic, Integer, Rational};
        match (self, rhs) {
            (Integer(a), Integer(b)) => Ok(Integer(a * b)),
            (Integer(a), Rational(b)) | (Rational(b), Integer(a)) => {
                Ok(Rational(RBig::from(a.clone()) * b))
            }
            (Rational(a), Rational(b)) => Ok(Rational(a * b)),
            (Cyclotomic(a), Cyclotomic(b)) => Ok(Cyclotomic(a * b)),
            (Cyclotomic(_), other) | (other, Cyclotomic(_)) if other.is_zero() => Ok(Self::zero()),
            (Cyclotomic(c), other) | (other, Cyclotomic(c)) if other.is_one() => {
                Ok(Cyclotomic(c.clone()))
            }
            (left, right) => Err(CellError::UnsupportedOperand {
                op: "multiply",
                left: left.kind(),
                right: right.kind(),
            }),
        }
    }

    /// The cell as a rational number, if it is numeric.
    #[must_use]
    pub fn as_rational(&self) -> Option<RBig> {
        match self {
            Self::Integer(n) => Some(RBig::from(n.clone())),
            Self::Rational(r) => Some(r.clone()),
            Self::Cyclotomic(_) => None,
        }
    }

    /// The cell as an integer, if it is an integer or an integral rational.
    #[must_use]
    pub fn as_integer(&self) -> Option<IBig> {
        match self {
            Self::Integer(n) => Some(n.clone()),
            Self::Rational(r) => {
                if IBig::from(r.denominator().clone()) == IBig::ONE {
                    Some(r.numerator().clone())
                } else {
                    None
                }
            }
            Self::Cyclotomic(_) => None,
        }
    }

    /// Converts a numeric cell to `f64`.
    ///
    /// # Errors
    ///
    /// `CellError::InvalidValueKind` for a cyclotomic cell.
    pub fn to_f64(&self) -> Result<f64, CellError> {
        self.as_rational()
            .map(|r| r.to_f64().value())
            .ok_or(CellError::InvalidValueKind {
                expected: "numeric",
                found: self.kind(),
            })
    }

    /// Casts a rational-valued cell into a root of unity, reading the value
    /// as an exponent of `e^(2πi·r)`.
    ///
    /// # Errors
    ///
    /// `CellError::InvalidValueKind` when the cell is not a rational number.
    pub fn to_cyclotomic(&self) -> Result<CyclotomicElement, CellError> {
        self.as_rational()
            .map(CyclotomicElement::new)
            .ok_or(CellError::InvalidValueKind {
                expected: "rational",
                found: self.kind(),
            })
    }

    /// Renders the cell in the requested mode.
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Rational(r) => {
                if IBig::from(r.denominator().clone()) == IBig::ONE {
                    r.numerator().to_string()
                } else {
                    format!("{}/{}", r.numerator(), r.denominator())
                }
            }
            Self::Cyclotomic(c) => c.render(mode),
        }
    }
}

impl PartialEq for AlgebraicCell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Cyclotomic(a), Self::Cyclotomic(b)) => a == b,
            (Self::Cyclotomic(_), _) | (_, Self::Cyclotomic(_)) => false,
            // Numeric kinds compare by value, so integer 0 equals rational 0.
            _ => self.as_rational() == other.as_rational(),
        }
    }
}

impl Eq for AlgebraicCell {}

impl From<i64> for AlgebraicCell {
    fn from(value: i64) -> Self {
        Self::Integer(IBig::from(value))
    }
}

impl From<IBig> for AlgebraicCell {
    fn from(value: IBig) -> Self {
        Self::Integer(value)
    }
}

impl From<RBig> for AlgebraicCell {
    fn from(value: RBig) -> Self {
        Self::Rational(value)
    }
}

impl From<CyclotomicElement> for AlgebraicCell {
    fn from(value: CyclotomicElement) -> Self {
        Self::Cyclotomic(value)
    }
}

impl fmt::Display for AlgebraicCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderMode::Additive))
    }
}
