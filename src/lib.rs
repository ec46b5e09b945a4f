//! fmatrix: dense single-precision matrices in pure Rust.
//!
//! A small matrix library with creation, arithmetic, structural transforms,
//! and Gaussian elimination with partial pivoting for determinants and
//! inverses.
//!
//! # Quick Start
//!
//! ```
//! use fmatrix::prelude::*;
//!
//! let a = Matrix::from_slice(3, 3, &[
//!     4.0, 7.0, 2.0,
//!     -3.0, 6.0, 1.0,
//!     2.0, 5.0, -1.0,
//! ]).expect("3*3=9 elements");
//!
//! let det = a.determinant().expect("square matrix");
//! assert!((det + 105.0).abs() < 1e-2);
//!
//! let inv = a.inverse().expect("non-singular");
//! let eye = a.matmul(&inv).expect("3x3 * 3x3");
//! assert!(eye.approx_eq(&Matrix::identity(3).expect("3x3 allocation")));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the [`Matrix`] type, element access, transforms and arithmetic
//! - [`linalg`]: determinant and inverse by elimination
//! - [`config`]: numerical [`Tolerance`]
//! - [`error`]: [`MatrixError`] and the crate [`Result`] alias
//!
//! Operations that cannot produce a meaningful value return a [`Result`] or
//! an [`Option`] rather than a sentinel zero. Allocation failures surface as
//! [`MatrixError::AllocationFailure`].
//!
//! The crate logs through the [`log`] facade and never installs a logger.

pub mod config;
pub mod error;
pub mod linalg;
pub mod prelude;
pub mod primitives;

pub use config::Tolerance;
pub use error::{MatrixError, Result};
pub use primitives::Matrix;
