//! Dense matrix arithmetic.
//!
//! [`Matrix`] is a rectangular, row-major matrix. Operations never mutate
//! their inputs: every one of them returns a freshly built matrix, or an
//! [`AlgebraError`] when the operands are unsuitable. The [`algebra`] module
//! exposes the same operations as free functions over `f64`.
#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate ark_std;

pub mod algebra;
mod determinant;
mod error;
pub mod matrix;
pub mod ops;
mod row_ops;
mod scalar;

pub use error::{AlgebraError, ErrorKind, Result};
pub use matrix::Matrix;
pub use ops::{Axis, Transpose};
pub use scalar::Scalar;
