//! Numerical tolerance used for pivot detection and approximate comparison.

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// Absolute tolerance below which a value counts as zero.
///
/// Threaded explicitly through [`Matrix::determinant_with`],
/// [`Matrix::inverse_with`] and [`Matrix::approx_eq_with`]; the plain
/// variants use [`Tolerance::DEFAULT`].
///
/// [`Matrix::determinant_with`]: crate::Matrix::determinant_with
/// [`Matrix::inverse_with`]: crate::Matrix::inverse_with
/// [`Matrix::approx_eq_with`]: crate::Matrix::approx_eq_with
///
/// # Examples
///
/// ```
/// use fmatrix::Tolerance;
///
/// let tol = Tolerance::new(1e-5).expect("finite and non-negative");
/// assert!((tol.value() - 1e-5).abs() < f32::EPSILON);
/// assert!(Tolerance::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Tolerance(f32);

impl Tolerance {
    /// `0.001`, the tolerance used when none is given.
    pub const DEFAULT: Self = Self(0.001);

    /// Creates a tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidTolerance`] if `value` is negative,
    /// NaN or infinite.
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(MatrixError::InvalidTolerance { value });
        }
        Ok(Self(value))
    }

    /// Returns the raw tolerance.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// `true` when `|x| < tolerance`.
    #[must_use]
    pub(crate) fn is_negligible(self, x: f32) -> bool {
        x.abs() < self.0
    }

    /// `true` when `|x| > tolerance`.
    #[must_use]
    pub(crate) fn is_significant(self, x: f32) -> bool {
        x.abs() > self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for Tolerance {
    type Error = MatrixError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Tolerance> for f32 {
    fn from(tol: Tolerance) -> Self {
        tol.0
    }
}
