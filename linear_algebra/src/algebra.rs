//! Free-function interface over `f64` matrices.
//!
//! Each function is a thin wrapper around the corresponding [`Matrix`]
//! method; inputs are borrowed and a new matrix is returned.
//!
//! ```
//! use dense_algebra::algebra;
//!
//! let a = algebra::ones(2, 2);
//! let b = algebra::sum_scalar(&a, 1.0);
//! let c = algebra::multiply(&a, &b)?;
//! assert_eq!(algebra::determinant(&c)?, 0.0);
//! # Ok::<(), dense_algebra::AlgebraError>(())
//! ```

use crate::{Axis, Matrix, Result, Transpose};
use rand::Rng;

pub fn zeros(n: usize, m: usize) -> Matrix<f64> {
    Matrix::zeros(n, m)
}

pub fn ones(n: usize, m: usize) -> Matrix<f64> {
    Matrix::ones(n, m)
}

pub fn identity(n: usize) -> Matrix<f64> {
    Matrix::identity(n)
}

/// Uniform samples from `[min, max)`, seeded from system entropy.
#[cfg(feature = "std")]
pub fn random(n: usize, m: usize, min: f64, max: f64) -> Result<Matrix<f64>> {
    Matrix::random(n, m, min, max)
}

/// Uniform samples from `[min, max)` drawn from `rng`.
pub fn random_with_rng<RND: Rng + ?Sized>(
    rng: &mut RND,
    n: usize,
    m: usize,
    min: f64,
    max: f64,
) -> Result<Matrix<f64>> {
    Matrix::rand_uniform(rng, n, m, min, max)
}

#[cfg(feature = "std")]
pub fn show(matrix: &Matrix<f64>) {
    matrix.show()
}

pub fn multiply_scalar(matrix: &Matrix<f64>, c: f64) -> Matrix<f64> {
    matrix.scale(c)
}

pub fn multiply(a: &Matrix<f64>, b: &Matrix<f64>) -> Result<Matrix<f64>> {
    a.try_mul(b)
}

pub fn sum_scalar(matrix: &Matrix<f64>, c: f64) -> Matrix<f64> {
    matrix.add_scalar(c)
}

pub fn sum(a: &Matrix<f64>, b: &Matrix<f64>) -> Result<Matrix<f64>> {
    a.try_add(b)
}

pub fn transpose(matrix: &Matrix<f64>) -> Matrix<f64> {
    matrix.transpose()
}

pub fn minor(matrix: &Matrix<f64>, row: usize, col: usize) -> Result<Matrix<f64>> {
    matrix.minor(row, col)
}

/// Axis 0 stacks rows, axis 1 stacks columns. Two empty operands yield an
/// empty matrix whatever the axis.
pub fn concatenate(a: &Matrix<f64>, b: &Matrix<f64>, axis: usize) -> Result<Matrix<f64>> {
    if a.is_empty() && b.is_empty() {
        return Ok(Matrix::empty());
    }
    a.concatenate(b, Axis::try_from(axis)?)
}

pub fn determinant(matrix: &Matrix<f64>) -> Result<f64> {
    matrix.determinant()
}

pub fn inverse(matrix: &Matrix<f64>) -> Result<Matrix<f64>> {
    matrix.inverse()
}

pub fn ero_swap(matrix: &Matrix<f64>, r1: usize, r2: usize) -> Result<Matrix<f64>> {
    matrix.ero_swap(r1, r2)
}

pub fn ero_multiply(matrix: &Matrix<f64>, r: usize, c: f64) -> Result<Matrix<f64>> {
    matrix.ero_multiply(r, c)
}

pub fn ero_sum(matrix: &Matrix<f64>, r1: usize, c: f64, r2: usize) -> Result<Matrix<f64>> {
    matrix.ero_sum(r1, c, r2)
}

pub fn upper_triangular(matrix: &Matrix<f64>) -> Result<Matrix<f64>> {
    matrix.upper_triangular()
}
