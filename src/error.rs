//! Error types for matrix operations.
//!
//! Every fallible operation returns [`Result`], so callers can tell a
//! structurally invalid request apart from a value that is legitimately zero.

use thiserror::Error;

/// Main error type for `fmatrix` operations.
///
/// # Examples
///
/// ```
/// use fmatrix::error::MatrixError;
///
/// let err = MatrixError::NotSquare {
///     op: "trace",
///     shape: (2, 3),
/// };
/// assert!(err.to_string().contains("square"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The element buffer could not be allocated.
    #[error("Allocation failure: cannot allocate {rows}x{cols} matrix")]
    AllocationFailure {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Supplied data does not fill the requested shape.
    #[error("Data length mismatch: expected {expected} elements, got {actual}")]
    DataLengthMismatch {
        /// rows * cols
        expected: usize,
        /// Elements supplied
        actual: usize,
    },

    /// Operand shapes are incompatible for the operation.
    #[error("Matrix dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// Operation name
        op: &'static str,
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// A row or column index lies outside the matrix.
    #[error("Index ({row}, {col}) out of range for shape {shape:?}")]
    IndexOutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Shape of the indexed matrix
        shape: (usize, usize),
    },

    /// The operation is only defined for square matrices.
    #[error("{op} requires a square matrix, got shape {shape:?}")]
    NotSquare {
        /// Operation name
        op: &'static str,
        /// Shape of the offending matrix
        shape: (usize, usize),
    },

    /// No usable pivot was found while inverting.
    #[error("Singular matrix: no usable pivot in column {column}, cannot invert")]
    Singular {
        /// Column where elimination stopped
        column: usize,
    },

    /// A tolerance was negative or not finite.
    #[error("Invalid tolerance: {value}, expected a finite value >= 0")]
    InvalidTolerance {
        /// Rejected value
        value: f32,
    },
}

impl MatrixError {
    /// Create a dimension mismatch error from two operand shapes
    #[must_use]
    pub fn dimension_mismatch(
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        Self::DimensionMismatch { op, left, right }
    }

    /// Returns `true` for errors caused by a failed allocation.
    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrixError>;
