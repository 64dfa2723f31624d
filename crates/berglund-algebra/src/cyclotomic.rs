//! Roots of unity as normalized rational exponents.
//!
//! A `CyclotomicElement` with exponent `r` stands for `e^(2πi·r)`. The
//! group operation is multiplicative on the elements and therefore additive
//! on the exponents, taken modulo 1.

use dashu::base::{Signed as DashuSigned, UnsignedAbs};
use dashu::integer::IBig;
use dashu::rational::RBig;
use num_traits::One;
use std::fmt;
use std::ops::Mul;

/// How a cyclotomic value is rendered as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// The raw exponent fraction; the identity renders as `1`.
    #[default]
    Additive,
    /// Explicit exponential notation, `e^(2πi·r)`.
    Multiplicative,
}

/// A root of unity `e^(2πi·r)` for rational `r`.
///
/// The exponent is always stored reduced and normalized into `[0, 1)`, so
/// structural equality of exponents is equality of the represented values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CyclotomicElement(RBig);

impl CyclotomicElement {
    /// Creates a root of unity from an exponent, normalizing it mod 1.
    #[must_use]
    pub fn new(exponent: RBig) -> Self {
        let den = exponent.denominator().clone();
        let den_signed = IBig::from(den.clone());
        let mut num = exponent.numerator().clone() % &den_signed;
        if num.is_negative() {
            num = num + &den_signed;
        }
        Self(RBig::from_parts(num, den))
    }

    /// Creates a root of unity from an `i64` exponent fraction.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_ratio(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "denominator cannot be zero");
        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        Self::new(RBig::from_parts(
            IBig::from(numerator),
            IBig::from(denominator).unsigned_abs(),
        ))
    }

    /// The normalized exponent, in `[0, 1)`.
    #[must_use]
    pub fn exponent(&self) -> &RBig {
        &self.0
    }

    /// The multiplicative inverse, `e^(-2πi·r)`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(-self.0.clone())
    }

    /// The multiplicative order: the smallest `k > 0` with `self^k == 1`.
    ///
    /// For a reduced exponent `p/q` this is `q`.
    #[must_use]
    pub fn order(&self) -> usize {
        usize::try_from(self.0.denominator().clone()).unwrap_or(usize::MAX)
    }

    /// Renders the element in the requested mode.
    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        let fraction = if self.0 == RBig::ZERO {
            "0".to_string()
        } else {
            format!("{}/{}", self.0.numerator(), self.0.denominator())
        };
        match mode {
            RenderMode::Additive => {
                if self.0 == RBig::ZERO {
                    "1".to_string()
                } else {
                    fraction
                }
            }
            RenderMode::Multiplicative => format!("e^(2\u{3c0}i\u{b7}{fraction})"),
        }
    }
}

impl Mul for CyclotomicElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl Mul<&CyclotomicElement> for CyclotomicElement {
    type Output = Self;

    fn mul(self, rhs: &CyclotomicElement) -> Self::Output {
        Self::new(self.0 + &rhs.0)
    }
}

impl Mul for &CyclotomicElement {
    type Output = CyclotomicElement;

    fn mul(self, rhs: Self) -> Self::Output {
        CyclotomicElement::new(&self.0 + &rhs.0)
    }
}

impl One for CyclotomicElement {
    fn one() -> Self {
        Self(RBig::ZERO)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ZERO
    }
}

impl fmt::Debug for CyclotomicElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CyclotomicElement({})", self.0)
    }
}

impl fmt::Display for CyclotomicElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(RenderMode::Additive))
    }
}
