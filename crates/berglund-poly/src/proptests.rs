//! Property-based tests for polynomial invariants.

#[cfg(test)]
mod tests {
    use dashu::rational::RBig;
    use proptest::prelude::*;

    use berglund_algebra::AlgebraicCell;
    use berglund_linalg::ExactMatrix;

    use crate::{AtomicBlock, Permutation, QuasihomogeneousPolynomial};

    fn block() -> impl Strategy<Value = AtomicBlock> {
        prop_oneof![
            (2u32..7u32).prop_map(AtomicBlock::Fermat),
            proptest::collection::vec(2u32..7u32, 1..4).prop_map(AtomicBlock::Chain),
            proptest::collection::vec(2u32..7u32, 2..4).prop_map(AtomicBlock::Loop),
        ]
    }

    fn blocks() -> impl Strategy<Value = Vec<AtomicBlock>> {
        proptest::collection::vec(block(), 1..4)
    }

    proptest! {
        #[test]
        fn weights_solve_the_degree_system(blocks in blocks()) {
            let poly = QuasihomogeneousPolynomial::new(blocks).unwrap();
            let weights = ExactMatrix::from_rows(
                poly.weights()
                    .iter()
                    .map(|w| vec![AlgebraicCell::from(w.clone())])
                    .collect(),
            )
            .unwrap();
            let degrees = poly.exponent_matrix().mm(&weights).unwrap();
            for row in 0..poly.num_variables() {
                prop_assert!(degrees[(row, 0)].is_one());
            }
        }

        #[test]
        fn inverse_round_trips_through_exponent_matrix(blocks in blocks()) {
            let poly = QuasihomogeneousPolynomial::new(blocks).unwrap();
            let n = poly.num_variables();
            let product = poly.inverse_matrix().mm(poly.exponent_matrix()).unwrap();
            prop_assert_eq!(product, ExactMatrix::identity(n));
        }

        #[test]
        fn cyclotomic_entries_are_normalized(blocks in blocks()) {
            let poly = QuasihomogeneousPolynomial::new(blocks).unwrap();
            let matrix = poly.cyclotomic_inverse();
            for row in 0..matrix.num_rows() {
                for col in 0..matrix.num_cols() {
                    match &matrix[(row, col)] {
                        AlgebraicCell::Cyclotomic(root) => {
                            prop_assert!(root.exponent() >= &RBig::ZERO);
                            prop_assert!(root.exponent() < &RBig::ONE);
                        }
                        other => prop_assert!(
                            false,
                            "expected a cyclotomic entry, found {}",
                            other.kind()
                        ),
                    }
                }
            }
        }

        #[test]
        fn permutation_matrix_powers_back_to_identity(
            extra in 0usize..3usize,
            len in 2usize..5usize,
        ) {
            // a single len-cycle on a possibly larger domain has order len
            let cycle: Vec<u32> = (1..=u32::try_from(len).unwrap()).collect();
            let domain = len + extra;
            let perm = Permutation::new(vec![cycle], Some(domain)).unwrap();
            let power = perm.matrix().power(u32::try_from(len).unwrap()).unwrap();
            prop_assert_eq!(power, ExactMatrix::unit_identity(domain));
        }
    }
}
