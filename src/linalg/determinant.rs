//! Determinant by reduction to upper-triangular form.

use super::elimination::{eliminate, Reduction};
use crate::config::Tolerance;
use crate::error::{MatrixError, Result};
use crate::primitives::Matrix;

/// Running signed product of the pivots.
struct PivotProduct {
    det: f32,
}

impl Reduction for PivotProduct {
    fn on_swap(&mut self, _i: usize, _k: usize) {
        self.det = -self.det;
    }

    fn reduce(&mut self, work: &mut Matrix, i: usize) {
        let pivot = work.get_or_zero(i, i);
        self.det *= pivot;
        for k in (i + 1)..work.n_rows() {
            let factor = work.get_or_zero(k, i) / pivot;
            work.subtract_scaled_row(k, i, factor);
        }
    }
}

impl Matrix {
    /// Determinant using [`Tolerance::DEFAULT`] for pivot detection.
    ///
    /// # Errors
    ///
    /// See [`Matrix::determinant_with`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fmatrix::Matrix;
    ///
    /// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).expect("2*2=4 elements");
    /// let det = m.determinant().expect("square matrix");
    /// assert!((det + 2.0).abs() < 1e-5);
    /// ```
    pub fn determinant(&self) -> Result<f32> {
        self.determinant_with(Tolerance::DEFAULT)
    }

    /// Determinant via Gaussian elimination with partial pivoting.
    ///
    /// Works on a private copy; `self` is never modified. A column with no
    /// pivot above `tol` makes the matrix singular and yields `Ok(0.0)`.
    /// The empty `0x0` matrix has determinant `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix, or
    /// [`MatrixError::AllocationFailure`] if the working copy cannot be
    /// allocated.
    pub fn determinant_with(&self, tol: Tolerance) -> Result<f32> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op: "determinant",
                shape: self.shape(),
            });
        }

        let mut work = self.try_clone()?;
        let mut product = PivotProduct { det: 1.0 };
        match eliminate(&mut work, tol, &mut product) {
            Ok(()) => Ok(product.det),
            Err(_) => Ok(0.0),
        }
    }
}
