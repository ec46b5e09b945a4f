//! Elementary row operations used by Gaussian elimination.
//!
//! All three work in place and never reallocate. Row indices must be in
//! range; this is checked in debug builds only.

use super::Matrix;

impl Matrix {
    /// Exchanges rows `i` and `j`.
    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        debug_assert!(i < self.n_rows() && j < self.n_rows());
        if i == j {
            return;
        }
        let cols = self.n_cols();
        let (lo, hi) = (i.min(j), i.max(j));
        let (head, tail) = self.as_mut_slice().split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Multiplies every element of row `i` by `factor`.
    pub(crate) fn scale_row(&mut self, i: usize, factor: f32) {
        debug_assert!(i < self.n_rows());
        let cols = self.n_cols();
        for x in &mut self.as_mut_slice()[i * cols..(i + 1) * cols] {
            *x *= factor;
        }
    }

    /// `row[target] -= factor * row[source]`.
    pub(crate) fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: f32) {
        debug_assert!(target < self.n_rows() && source < self.n_rows());
        if target == source {
            // target - factor * target
            self.scale_row(target, 1.0 - factor);
            return;
        }
        let cols = self.n_cols();
        let data = self.as_mut_slice();
        for j in 0..cols {
            let s = data[source * cols + j];
            data[target * cols + j] -= factor * s;
        }
    }
}
