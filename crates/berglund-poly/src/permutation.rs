//! Permutations of variables in cycle notation, encoded as matrices.

use std::collections::BTreeSet;
use std::fmt;

use num_traits::One;
use thiserror::Error;

use berglund_algebra::{AlgebraicCell, CyclotomicElement};
use berglund_linalg::ExactMatrix;

/// Errors raised while building a permutation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PermutationError {
    /// The cycle notation was structurally invalid.
    #[error("malformed cycle: {0}")]
    MalformedCycle(String),
    /// The requested domain does not cover every referenced point.
    #[error("a domain of size {domain_size} cannot cover point {largest}")]
    DomainTooSmall {
        /// The domain size that was requested.
        domain_size: usize,
        /// The largest point the cycles reference.
        largest: usize,
    },
}

/// A permutation of `[1, n]` given as disjoint cycles.
///
/// Points of the domain not mentioned in any cycle are fixed: construction
/// appends a singleton cycle for each of them, so the stored notation is
/// total over the domain. The derived matrix marks entry (i, j) with the
/// trivial root of unity when the permutation maps point `j + 1` to point
/// `i + 1`, making it composable with the cyclotomic symmetry generators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    cycles: Vec<Vec<u32>>,
    domain_size: usize,
    matrix: ExactMatrix,
}

impl Permutation {
    /// Builds a permutation from cycle notation.
    ///
    /// When `domain_size` is omitted it defaults to the largest referenced
    /// point.
    ///
    /// # Errors
    ///
    /// `PermutationError::MalformedCycle` when a cycle is empty, references
    /// point 0, repeats a point, or when no cycles are given and no
    /// `domain_size` fixes the domain; `PermutationError::DomainTooSmall`
    /// when the given domain does not cover every referenced point.
    pub fn new(
        cycles: Vec<Vec<u32>>,
        domain_size: Option<usize>,
    ) -> Result<Self, PermutationError> {
        let mut seen = BTreeSet::new();
        let mut largest = 0u32;
        for cycle in &cycles {
            if cycle.is_empty() {
                return Err(PermutationError::MalformedCycle(
                    "a cycle must reference at least one point".to_string(),
                ));
            }
            for &point in cycle {
                if point == 0 {
                    return Err(PermutationError::MalformedCycle(
                        "points are numbered from 1".to_string(),
                    ));
                }
                if !seen.insert(point) {
                    return Err(PermutationError::MalformedCycle(format!(
                        "point {point} appears more than once"
                    )));
                }
                largest = largest.max(point);
            }
        }

        let domain_size = match domain_size {
            Some(size) => {
                if size < largest as usize {
                    return Err(PermutationError::DomainTooSmall {
                        domain_size: size,
                        largest: largest as usize,
                    });
                }
                if size == 0 {
                    return Err(PermutationError::DomainTooSmall {
                        domain_size: 0,
                        largest: 1,
                    });
                }
                size
            }
            None => {
                if largest == 0 {
                    return Err(PermutationError::MalformedCycle(
                        "cannot infer the domain of an empty permutation".to_string(),
                    ));
                }
                largest as usize
            }
        };

        // append singleton cycles for the fixed points
        let mut cycles = cycles;
        for point in 1..=u32::try_from(domain_size).unwrap_or(u32::MAX) {
            if !seen.contains(&point) {
                cycles.push(vec![point]);
            }
        }

        let matrix = build_matrix(&cycles, domain_size);
        Ok(Self {
            cycles,
            domain_size,
            matrix,
        })
    }

    /// The completed cycle notation, singleton cycles included.
    #[must_use]
    pub fn cycles(&self) -> &[Vec<u32>] {
        &self.cycles
    }

    /// The size of the domain the permutation acts on.
    #[must_use]
    pub fn domain_size(&self) -> usize {
        self.domain_size
    }

    /// The permutation encoded as a matrix of trivial roots of unity.
    #[must_use]
    pub fn matrix(&self) -> &ExactMatrix {
        &self.matrix
    }
}

fn build_matrix(cycles: &[Vec<u32>], domain_size: usize) -> ExactMatrix {
    let mut matrix = ExactMatrix::zeros(domain_size, domain_size);
    for cycle in cycles {
        let len = cycle.len();
        for i in 0..len {
            let row = cycle[i] as usize - 1;
            let col = cycle[(i + 1) % len] as usize - 1;
            matrix[(row, col)] = AlgebraicCell::from(CyclotomicElement::one());
        }
    }
    matrix.transpose()
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // space the points only when a two-digit point makes the compact
        // form ambiguous
        let spaced = self.cycles.iter().flatten().any(|&point| point > 9);
        for cycle in &self.cycles {
            write!(f, "(")?;
            for (i, point) in cycle.iter().enumerate() {
                if spaced && i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{point}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
