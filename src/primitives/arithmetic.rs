//! Element-wise arithmetic, products and reductions.

use super::matrix::zeroed_buffer;
use super::Matrix;
use crate::config::Tolerance;
use crate::error::{MatrixError, Result};

impl Matrix {
    fn zip_with(
        &self,
        other: &Self,
        op: &'static str,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrixError::dimension_mismatch(op, self.shape(), other.shape()));
        }
        let mut data = zeroed_buffer(self.n_rows(), self.n_cols())?;
        for (out, (&a, &b)) in data
            .iter_mut()
            .zip(self.as_slice().iter().zip(other.as_slice()))
        {
            *out = f(a, b);
        }
        Self::from_vec(self.n_rows(), self.n_cols(), data)
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// Companion to [`Matrix::add`] with the same shape rule.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Multiplies each element by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::AllocationFailure`] if the result cannot be
    /// allocated.
    pub fn scalar_mul(&self, scalar: f32) -> Result<Self> {
        let mut data = zeroed_buffer(self.n_rows(), self.n_cols())?;
        for (out, &x) in data.iter_mut().zip(self.as_slice()) {
            *out = scalar * x;
        }
        Self::from_vec(self.n_rows(), self.n_cols(), data)
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each output element is a dot product accumulated in `f32`.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.n_cols() != other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrixError::dimension_mismatch(
                "matmul",
                self.shape(),
                other.shape(),
            ));
        }

        let mut result = Self::zeros(self.n_rows(), other.n_cols())?;
        for i in 0..self.n_rows() {
            for j in 0..other.n_cols() {
                let mut sum = 0.0;
                for k in 0..self.n_cols() {
                    sum += self.get_or_zero(i, k) * other.get_or_zero(k, j);
                }
                result.set(i, j, sum);
            }
        }
        Ok(result)
    }

    /// Sum of the diagonal elements.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn trace(&self) -> Result<f32> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                op: "trace",
                shape: self.shape(),
            });
        }
        Ok((0..self.n_rows()).map(|i| self.get_or_zero(i, i)).sum())
    }

    /// Frobenius norm: square root of the sum of squared elements.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.as_slice().iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    /// Approximate equality using [`Tolerance::DEFAULT`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::DEFAULT)
    }

    /// Returns `true` if shapes match and every pair of elements differs by
    /// at most `tol`. A shape mismatch compares unequal.
    #[must_use]
    pub fn approx_eq_with(&self, other: &Self, tol: Tolerance) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= tol.value())
    }
}

#[cfg(test)]
#[path = "arithmetic_tests.rs"]
mod tests;
