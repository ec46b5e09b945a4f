//! Plain-text rendering of matrices.

use std::fmt;

use super::Matrix;

/// Renders one row per line, values separated by a single space.
///
/// Six decimals are printed unless a precision is given (`{:.2}`).
///
/// ```
/// use fmatrix::Matrix;
///
/// let m = Matrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.5]).expect("2*2=4 elements");
/// assert_eq!(format!("{m:.1}"), "1.0 2.0\n3.0 4.5");
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        for i in 0..self.n_rows() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in self.row(i).unwrap_or_default().iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value:.precision$}")?;
            }
        }
        Ok(())
    }
}
