//! Matrix type for dense single-precision data.

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// A dense 2D matrix of `f32` values (row-major storage).
///
/// The buffer always holds exactly `rows * cols` elements. A matrix with zero
/// rows or zero columns is valid and empty.
///
/// # Examples
///
/// ```
/// use fmatrix::Matrix;
///
/// let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), Some(6.0));
/// assert_eq!(m.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

/// Unvalidated mirror of [`Matrix`] used while deserializing.
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Self::from_vec(raw.rows, raw.cols, raw.data)
    }
}

/// Reserves a zero-filled buffer for a `rows x cols` matrix.
pub(crate) fn zeroed_buffer(rows: usize, cols: usize) -> Result<Vec<f32>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MatrixError::AllocationFailure { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::AllocationFailure { rows, cols })?;
    data.resize(len, 0.0);
    Ok(data)
}

impl Matrix {
    /// Creates a matrix, copying `data` if given and zero-filling otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be allocated or `data` does not
    /// hold exactly `rows * cols` values.
    pub fn new(rows: usize, cols: usize, data: Option<&[f32]>) -> Result<Self> {
        match data {
            Some(values) => Self::from_slice(rows, cols, values),
            None => Self::zeros(rows, cols),
        }
    }

    /// Creates a matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::AllocationFailure`] if the buffer cannot be
    /// allocated.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            data: zeroed_buffer(rows, cols)?,
            rows,
            cols,
        })
    }

    /// Creates a matrix by copying a row-major slice.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols or the
    /// buffer cannot be allocated.
    pub fn from_slice(rows: usize, cols: usize, data: &[f32]) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::AllocationFailure { rows, cols })?;
        if data.len() != expected {
            return Err(MatrixError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(expected)
            .map_err(|_| MatrixError::AllocationFailure { rows, cols })?;
        buf.extend_from_slice(data);
        Ok(Self {
            data: buf,
            rows,
            cols,
        })
    }

    /// Creates a new matrix that takes ownership of a row-major vector.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::AllocationFailure { rows, cols })?;
        if data.len() != expected {
            return Err(MatrixError::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates an `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::AllocationFailure`] if the buffer cannot be
    /// allocated.
    pub fn identity(n: usize) -> Result<Self> {
        let mut data = zeroed_buffer(n, n)?;
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if rows == cols.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns `true` for a degenerate matrix with no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets element at (row, col), or `None` if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Gets element at (row, col), reading `0.0` outside the matrix.
    #[must_use]
    pub fn get_or_zero(&self, row: usize, col: usize) -> f32 {
        self.get(row, col).unwrap_or(0.0)
    }

    /// Returns a row as a slice, or `None` if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Deep copy that reports allocation failure instead of aborting.
    pub(crate) fn try_clone(&self) -> Result<Self> {
        Self::from_slice(self.rows, self.cols, &self.data)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Sets element at (row, col). Out-of-range writes are ignored.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f32) {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Transposes the matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::AllocationFailure`] if the result cannot be
    /// allocated.
    pub fn transpose(&self) -> Result<Self> {
        let mut data = zeroed_buffer(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Ok(Self {
            data,
            rows: self.cols,
            cols: self.rows,
        })
    }

    /// Returns a copy with row `row` and column `col` removed.
    ///
    /// Removing the only row and column of a `1x1` matrix yields `0x0`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `row >= rows` or
    /// `col >= cols`.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Self> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                shape: self.shape(),
            });
        }

        let (rows, cols) = (self.rows - 1, self.cols - 1);
        let mut data = Vec::new();
        data.try_reserve_exact(rows * cols)
            .map_err(|_| MatrixError::AllocationFailure { rows, cols })?;
        for (i, source) in self.data.chunks_exact(self.cols).enumerate() {
            if i == row {
                continue;
            }
            data.extend(
                source
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != col)
                    .map(|(_, &x)| x),
            );
        }

        Ok(Self { data, rows, cols })
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
