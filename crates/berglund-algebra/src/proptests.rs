//! Property-based tests for the scalar layer.

#[cfg(test)]
mod tests {
    use dashu::rational::RBig;
    use num_traits::One;
    use proptest::prelude::*;

    use crate::{AlgebraicCell, CyclotomicElement};

    // Strategy for generating roots of unity with small exponents
    fn root_of_unity() -> impl Strategy<Value = CyclotomicElement> {
        (-60i64..60i64, 1i64..24i64).prop_map(|(num, den)| CyclotomicElement::from_ratio(num, den))
    }

    fn small_int() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-100i64..=-1i64), (1i64..=100i64)]
    }

    proptest! {
        // Group laws for roots of unity

        #[test]
        fn cyclotomic_mul_commutative(a in root_of_unity(), b in root_of_unity()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn cyclotomic_mul_associative(a in root_of_unity(), b in root_of_unity(), c in root_of_unity()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn cyclotomic_mul_identity(a in root_of_unity()) {
            prop_assert_eq!(a.clone() * CyclotomicElement::one(), a.clone());
            prop_assert_eq!(CyclotomicElement::one() * a.clone(), a);
        }

        #[test]
        fn cyclotomic_inverse_cancels(a in root_of_unity()) {
            prop_assert!((a.clone() * a.inverse()).is_one());
        }

        #[test]
        fn cyclotomic_exponent_normalized(a in root_of_unity()) {
            prop_assert!(a.exponent() >= &RBig::ZERO);
            prop_assert!(a.exponent() < &RBig::ONE);
        }

        #[test]
        fn cyclotomic_order_is_period(a in root_of_unity()) {
            let k = a.order();
            prop_assert!(k >= 1);
            let mut power = CyclotomicElement::one();
            for _ in 0..k {
                power = power * a.clone();
            }
            prop_assert!(power.is_one());
        }

        // Cell table laws

        #[test]
        fn cell_add_commutative_numeric(a in small_int(), b in small_int()) {
            let a = AlgebraicCell::from(a);
            let b = AlgebraicCell::from(b);
            prop_assert_eq!(
                a.checked_add(&b).unwrap(),
                b.checked_add(&a).unwrap()
            );
        }

        #[test]
        fn cell_mul_commutative_numeric(a in small_int(), b in small_int()) {
            let a = AlgebraicCell::from(a);
            let b = AlgebraicCell::from(b);
            prop_assert_eq!(
                a.checked_mul(&b).unwrap(),
                b.checked_mul(&a).unwrap()
            );
        }

        #[test]
        fn cell_zero_passes_through_cyclotomic(a in root_of_unity()) {
            let cell = AlgebraicCell::from(a);
            let sum = cell.checked_add(&AlgebraicCell::zero()).unwrap();
            prop_assert_eq!(sum, cell);
        }

        #[test]
        fn cell_nonzero_add_to_cyclotomic_fails(a in root_of_unity(), n in non_zero_int()) {
            let cell = AlgebraicCell::from(a);
            prop_assert!(cell.checked_add(&AlgebraicCell::from(n)).is_err());
        }

        #[test]
        fn cell_cyclotomic_cast_round_trip(num in -60i64..60, den in 1i64..24) {
            let root = CyclotomicElement::from_ratio(num, den);
            let cell = AlgebraicCell::from(root.exponent().clone());
            prop_assert_eq!(cell.to_cyclotomic().unwrap(), root);
        }
    }
}
