//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use fmatrix::prelude::*;
//!
//! let eye = Matrix::identity(2).expect("2x2 allocation");
//! assert_eq!(eye.determinant(), Ok(1.0));
//! ```

pub use crate::config::Tolerance;
pub use crate::error::{MatrixError, Result};
pub use crate::primitives::Matrix;
