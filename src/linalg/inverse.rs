//! Matrix inverse by Gauss-Jordan elimination on an augmented identity.

use super::elimination::{eliminate, Reduction, SingularColumn};
use crate::config::Tolerance;
use crate::error::{MatrixError, Result};
use crate::primitives::Matrix;

/// Accumulator that receives every row operation applied to the working copy.
struct GaussJordan {
    inverse: Matrix,
}

impl Reduction for GaussJordan {
    fn on_swap(&mut self, i: usize, k: usize) {
        self.inverse.swap_rows(i, k);
    }

    fn reduce(&mut self, work: &mut Matrix, i: usize) {
        // pivot read after any swap
        let scale = 1.0 / work.get_or_zero(i, i);
        work.scale_row(i, scale);
        self.inverse.scale_row(i, scale);

        for k in 0..work.n_rows() {
            if k == i {
                continue;
            }
            let factor = work.get_or_zero(k, i);
            work.subtract_scaled_row(k, i, factor);
            self.inverse.subtract_scaled_row(k, i, factor);
        }
    }
}

impl Matrix {
    /// Inverse using [`Tolerance::DEFAULT`] for pivot detection.
    ///
    /// # Errors
    ///
    /// See [`Matrix::inverse_with`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fmatrix::Matrix;
    ///
    /// let m = Matrix::from_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]).expect("2*2=4 elements");
    /// let inv = m.inverse().expect("invertible");
    /// let eye = m.matmul(&inv).expect("2x2 * 2x2");
    /// assert!(eye.approx_eq(&Matrix::identity(2).expect("2x2 allocation")));
    ///
    /// let singular = Matrix::from_slice(2, 2, &[2.0, 4.0, 1.0, 2.0]).expect("2*2=4 elements");
    /// assert!(singular.inverse().is_err());
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(Tolerance::DEFAULT)
    }

    /// Inverse via Gauss-Jordan elimination with partial pivoting.
    ///
    /// `self` is copied into a working matrix that is reduced to the
    /// identity while the same row operations turn an identity accumulator
    /// into the inverse.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::NotSquare`] for a non-square matrix
    /// - [`MatrixError::Singular`] if some column has no pivot above `tol`
    /// - [`MatrixError::AllocationFailure`] if the working buffers cannot be
    ///   allocated
    pub fn inverse_with(&self, tol: Tolerance) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op: "inverse",
                shape: self.shape(),
            });
        }

        let mut work = self.try_clone()?;
        let mut reduction = GaussJordan {
            inverse: Self::identity(self.n_rows())?,
        };
        eliminate(&mut work, tol, &mut reduction)
            .map_err(|SingularColumn(column)| MatrixError::Singular { column })?;
        Ok(reduction.inverse)
    }
}

#[cfg(test)]
#[path = "inverse_tests.rs"]
mod tests;
