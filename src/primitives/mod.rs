//! Core matrix primitive.
//!
//! [`Matrix`] owns its storage; the submodules add arithmetic, row
//! operations and text rendering to it.

mod arithmetic;
mod display;
mod matrix;
mod row_ops;

pub use matrix::Matrix;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
