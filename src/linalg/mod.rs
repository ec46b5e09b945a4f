//! Elimination-based algorithms: determinant and inverse.
//!
//! Both drive one shared pivot-searching elimination engine over a private
//! working copy of the input, so the caller's matrix is never modified.

mod determinant;
mod elimination;
mod inverse;
