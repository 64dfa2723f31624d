//! Finite-order inverse search for matrices of roots of unity.

use crate::dense::{ExactMatrix, MatrixError};

impl ExactMatrix {
    /// Finds the inverse of a matrix whose entries are all zero or roots
    /// of unity by walking its powers.
    ///
    /// Such a matrix generates a cyclic group; when that group is finite,
    /// some power of the matrix is its inverse (Lagrange), so the search
    /// multiplies `power` by `self` until `power * self` is the
    /// [`unit identity`](ExactMatrix::unit_identity) and returns `power`.
    ///
    /// The finite-order precondition must be established by the caller; it
    /// is not checked here. With `max_steps: None` an input without finite
    /// order makes the loop run forever. Passing a cap bounds the walk and
    /// turns exhaustion into [`MatrixError::OrderNotFound`].
    ///
    /// # Errors
    ///
    /// `MatrixError::OrderNotFound` when `max_steps` is exhausted; cell
    /// errors propagate if a product leaves the cell algebra.
    ///
    /// # Panics
    ///
    /// Panics when the matrix is not square.
    pub fn unit_inverse(&self, max_steps: Option<usize>) -> Result<Self, MatrixError> {
        assert!(self.is_square(), "inverse requires a square matrix");
        let identity = Self::unit_identity(self.num_rows());
        let mut power = self.clone();
        let mut steps = 0usize;
        loop {
            power = power.mm(self)?;
            steps += 1;
            if power.mm(self)? == identity {
                return Ok(power);
            }
            if let Some(cap) = max_steps {
                if steps >= cap {
                    return Err(MatrixError::OrderNotFound(cap));
                }
            }
        }
    }
}
