use crate::{AlgebraError, Matrix, Result, Scalar};
use ark_std::{
    ops::{Add, AddAssign, Mul, MulAssign, Neg},
    vec::*,
};

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl<R: Clone> Transpose for Vec<Vec<R>> {
    /// Rows are assumed to be of equal length.
    fn transpose(&self) -> Self {
        let ncols = self.first().map_or(0, Vec::len);

        let mut res: Vec<Vec<_>> = (0..ncols).map(|_| Vec::with_capacity(self.len())).collect();

        for row in self {
            for (c, value) in row.iter().enumerate() {
                res[c].push(value.clone());
            }
        }

        res
    }
}

impl<R: Clone> Transpose for Matrix<R> {
    fn transpose(&self) -> Self {
        Self::from_parts(self.ncols, self.nrows, self.vals.transpose())
    }
}

/// Direction along which [`Matrix::concatenate`] stacks its operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    /// Axis 0: the second matrix's rows go below the first's.
    Rows,
    /// Axis 1: the second matrix's columns go right of the first's.
    Columns,
}

impl TryFrom<usize> for Axis {
    type Error = AlgebraError;

    fn try_from(axis: usize) -> Result<Self> {
        match axis {
            0 => Ok(Axis::Rows),
            1 => Ok(Axis::Columns),
            _ => Err(AlgebraError::InvalidAxis(axis)),
        }
    }
}

impl<R: Scalar> Matrix<R> {
    fn map(&self, f: impl Fn(R) -> R) -> Self {
        let vals = self
            .rows()
            .iter()
            .map(|row| row.iter().map(|v| f(*v)).collect())
            .collect();
        Self::from_parts(self.nrows(), self.ncols(), vals)
    }

    /// Every entry multiplied by `c`.
    pub fn scale(&self, c: R) -> Self {
        self.map(|v| v * c)
    }

    /// Every entry increased by `c`.
    pub fn add_scalar(&self, c: R) -> Self {
        self.map(|v| v + c)
    }

    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.shape() != other.shape() {
            return None;
        }

        let vals = self
            .rows()
            .iter()
            .zip(other.rows())
            .map(|(a, b)| a.iter().zip(b).map(|(x, y)| *x + *y).collect())
            .collect();
        Some(Self::from_parts(self.nrows(), self.ncols(), vals))
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or_else(|| AlgebraError::DimensionMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            })
    }

    /// Naive row-by-column product. Each entry is accumulated from zero in
    /// increasing index order, so results are reproducible bit for bit.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        if self.ncols() != other.nrows() {
            return None;
        }

        let (n, m, inner) = (self.nrows(), other.ncols(), self.ncols());
        let mut vals = vec![vec![R::zero(); m]; n];
        for (i, res_row) in vals.iter_mut().enumerate() {
            for (j, res) in res_row.iter_mut().enumerate() {
                for k in 0..inner {
                    *res += self[(i, k)] * other[(k, j)];
                }
            }
        }
        Some(Self::from_parts(n, m, vals))
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.checked_mul(other)
            .ok_or_else(|| AlgebraError::DimensionMismatch {
                lhs: self.shape(),
                rhs: other.shape(),
            })
    }
}

impl<R: Clone> Matrix<R> {
    /// Copy without row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        if self.is_empty() {
            return Ok(Self::empty());
        }
        AlgebraError::check_index(row, self.nrows())?;
        AlgebraError::check_index(col, self.ncols())?;

        Ok(self.minor_unchecked(row, col))
    }

    pub(crate) fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let vals = self
            .rows()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != row)
            .map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(|(j, _)| *j != col)
                    .map(|(_, v)| v.clone())
                    .collect()
            })
            .collect();
        Self::from_parts(self.nrows() - 1, self.ncols() - 1, vals)
    }

    /// Stacks `other` below (`Axis::Rows`) or to the right of
    /// (`Axis::Columns`) `self`.
    pub fn concatenate(&self, other: &Self, axis: Axis) -> Result<Self> {
        if self.is_empty() && other.is_empty() {
            return Ok(Self::empty());
        }

        let mismatch = || AlgebraError::DimensionMismatch {
            lhs: self.shape(),
            rhs: other.shape(),
        };

        match axis {
            Axis::Rows => {
                if self.ncols() != other.ncols() {
                    return Err(mismatch());
                }
                let vals = self.rows().iter().chain(other.rows()).cloned().collect();
                Ok(Self::from_parts(
                    self.nrows() + other.nrows(),
                    self.ncols(),
                    vals,
                ))
            }
            Axis::Columns => {
                if self.nrows() != other.nrows() {
                    return Err(mismatch());
                }
                let vals = self
                    .rows()
                    .iter()
                    .zip(other.rows())
                    .map(|(a, b)| a.iter().chain(b).cloned().collect())
                    .collect();
                Ok(Self::from_parts(
                    self.nrows(),
                    self.ncols() + other.ncols(),
                    vals,
                ))
            }
        }
    }
}

impl<R: Scalar> Mul<R> for &Matrix<R> {
    type Output = Matrix<R>;

    fn mul(self, c: R) -> Matrix<R> {
        self.scale(c)
    }
}

impl<R: Scalar> Mul<R> for Matrix<R> {
    type Output = Matrix<R>;

    fn mul(self, c: R) -> Matrix<R> {
        self.scale(c)
    }
}

impl<R: Scalar> MulAssign<&R> for Matrix<R> {
    fn mul_assign(&mut self, c: &R) {
        *self = self.scale(*c);
    }
}

impl<R: Scalar> Add<R> for &Matrix<R> {
    type Output = Matrix<R>;

    fn add(self, c: R) -> Matrix<R> {
        self.add_scalar(c)
    }
}

impl<R: Scalar> Add<R> for Matrix<R> {
    type Output = Matrix<R>;

    fn add(self, c: R) -> Matrix<R> {
        self.add_scalar(c)
    }
}

impl<R: Scalar> AddAssign<&R> for Matrix<R> {
    fn add_assign(&mut self, c: &R) {
        *self = self.add_scalar(*c);
    }
}

impl<R: Scalar> Neg for &Matrix<R> {
    type Output = Matrix<R>;

    fn neg(self) -> Matrix<R> {
        self.map(|v| -v)
    }
}
