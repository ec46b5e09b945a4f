//! Forward elimination with pivot search, shared by the determinant and the
//! Gauss-Jordan inverse.
//!
//! The engine walks the diagonal of a working copy. At each column it makes
//! sure a usable pivot sits on the diagonal (swapping in the first row below
//! whose entry clears the tolerance), then hands the column to a
//! [`Reduction`], which decides what elimination means for its algorithm.

use crate::config::Tolerance;
use crate::primitives::Matrix;

/// Column at which no usable pivot exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SingularColumn(pub(crate) usize);

/// Algorithm-specific side of an elimination pass.
pub(crate) trait Reduction {
    /// Rows `i` and `k` of the working matrix were exchanged.
    fn on_swap(&mut self, i: usize, k: usize);

    /// Eliminates around the usable pivot at `work[i][i]`.
    fn reduce(&mut self, work: &mut Matrix, i: usize);
}

/// Row holding the pivot for column `col`, or `None` if the column is
/// singular from the diagonal down.
///
/// The diagonal entry is kept unless `|work[col][col]| < tol`; otherwise the
/// first row below with `|work[k][col]| > tol` is chosen. An exact zero is
/// never a pivot, even with a zero tolerance.
pub(crate) fn find_pivot_row(work: &Matrix, col: usize, tol: Tolerance) -> Option<usize> {
    let diagonal = work.get_or_zero(col, col);
    if diagonal != 0.0 && !tol.is_negligible(diagonal) {
        return Some(col);
    }
    (col + 1..work.n_rows()).find(|&k| tol.is_significant(work.get_or_zero(k, col)))
}

/// Runs one elimination pass over the square matrix `work`.
///
/// Stops at the first singular column.
pub(crate) fn eliminate<R: Reduction>(
    work: &mut Matrix,
    tol: Tolerance,
    reduction: &mut R,
) -> Result<(), SingularColumn> {
    debug_assert!(work.is_square());
    for i in 0..work.n_rows() {
        let Some(k) = find_pivot_row(work, i, tol) else {
            log::debug!(
                "no pivot above tolerance {} in column {i} of {}x{} matrix",
                tol.value(),
                work.n_rows(),
                work.n_cols()
            );
            return Err(SingularColumn(i));
        };
        if k != i {
            log::trace!("pivot column {i}: swapping rows {i} and {k}");
            work.swap_rows(i, k);
            reduction.on_swap(i, k);
        }
        reduction.reduce(work, i);
    }
    Ok(())
}
