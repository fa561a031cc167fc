use crate::{AlgebraError, Result, Scalar};
use ark_std::{fmt, ops::Index, vec::*, One, Zero};
use rand::{
    distributions::{uniform::SampleUniform, Distribution, Uniform},
    Rng,
};

/// A dense, rectangular matrix stored row by row.
///
/// Every row has exactly `ncols` entries. A matrix with no rows, or with rows
/// of length zero, is normalised to the canonical empty matrix (`0x0`).
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<R> {
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    pub(crate) vals: Vec<Vec<R>>,
}

impl<R> Matrix<R> {
    pub fn empty() -> Self {
        Self {
            nrows: 0,
            ncols: 0,
            vals: vec![],
        }
    }

    /// Builds a matrix from its rows, rejecting ragged input.
    pub fn new(vals: Vec<Vec<R>>) -> Result<Self> {
        let ncols = vals.first().map_or(0, Vec::len);
        if let Some((row, r)) = vals.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(AlgebraError::RaggedRows {
                row,
                expected: ncols,
                got: r.len(),
            });
        }
        Ok(Self::from_parts(vals.len(), ncols, vals))
    }

    /// Caller guarantees `vals` is `nrows x ncols`.
    pub(crate) fn from_parts(nrows: usize, ncols: usize, vals: Vec<Vec<R>>) -> Self {
        debug_assert_eq!(vals.len(), nrows);
        debug_assert!(vals.iter().all(|row| row.len() == ncols));
        if nrows == 0 || ncols == 0 {
            return Self::empty();
        }
        Self { nrows, ncols, vals }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub fn rows(&self) -> &[Vec<R>] {
        &self.vals
    }

    pub fn row(&self, i: usize) -> Option<&[R]> {
        self.vals.get(i).map(Vec::as_slice)
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&R> {
        self.vals.get(i).and_then(|row| row.get(j))
    }

    pub fn into_rows(self) -> Vec<Vec<R>> {
        self.vals
    }

    pub(crate) fn ensure_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare(self.nrows, self.ncols));
        }
        Ok(())
    }
}

impl<R: Clone> Matrix<R> {
    /// An `nrows x ncols` matrix with every entry set to `value`.
    pub fn filled(nrows: usize, ncols: usize, value: R) -> Self {
        Self::from_parts(nrows, ncols, vec![vec![value; ncols]; nrows])
    }
}

impl<R: Clone + Zero> Matrix<R> {
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::filled(nrows, ncols, R::zero())
    }
}

impl<R: Clone + One> Matrix<R> {
    pub fn ones(nrows: usize, ncols: usize) -> Self {
        Self::filled(nrows, ncols, R::one())
    }
}

impl<R: Clone + Zero + One> Matrix<R> {
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        m.vals
            .iter_mut()
            .enumerate()
            .for_each(|(i, row)| row[i] = R::one());
        m
    }
}

impl<R: Scalar + SampleUniform + Into<f64>> Matrix<R> {
    /// Samples every entry independently and uniformly from `[min, max)`.
    ///
    /// Fails if the interval is empty, unordered (including NaN bounds) or
    /// too wide to represent.
    pub fn rand_uniform<RND: Rng + ?Sized>(
        rng: &mut RND,
        nrows: usize,
        ncols: usize,
        min: R,
        max: R,
    ) -> Result<Self> {
        let span: f64 = (max - min).into();
        if !(min < max) || !span.is_finite() {
            return Err(AlgebraError::InvalidRange {
                min: min.into(),
                max: max.into(),
            });
        }
        if nrows == 0 || ncols == 0 {
            return Ok(Self::empty());
        }

        let dist = Uniform::new(min, max);
        let vals = (0..nrows)
            .map(|_| (0..ncols).map(|_| dist.sample(rng)).collect::<Vec<R>>())
            .collect::<Vec<Vec<R>>>();
        Ok(Self { nrows, ncols, vals })
    }

    /// Like [`Matrix::rand_uniform`], seeded from the thread-local entropy source.
    #[cfg(feature = "std")]
    pub fn random(nrows: usize, ncols: usize, min: R, max: R) -> Result<Self> {
        Self::rand_uniform(&mut rand::thread_rng(), nrows, ncols, min, max)
    }
}

impl<R> TryFrom<Vec<Vec<R>>> for Matrix<R> {
    type Error = AlgebraError;

    fn try_from(vecs: Vec<Vec<R>>) -> Result<Matrix<R>> {
        Self::new(vecs)
    }
}

impl<R> From<Matrix<R>> for Vec<Vec<R>> {
    fn from(m: Matrix<R>) -> Vec<Vec<R>> {
        m.vals
    }
}

impl<R> Index<(usize, usize)> for Matrix<R> {
    type Output = R;

    fn index(&self, (i, j): (usize, usize)) -> &R {
        &self.vals[i][j]
    }
}

/// One line per row, entries separated by a single space and printed with
/// three fractional digits. The empty matrix is a single blank line.
impl<R: fmt::Display> fmt::Display for Matrix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f);
        }
        for row in &self.vals {
            for (j, value) in row.iter().enumerate() {
                if j != 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:.3}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<R: fmt::Display> Matrix<R> {
    pub fn write_to<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        write!(writer, "{}", self)
    }

    /// Prints the matrix to standard output.
    #[cfg(feature = "std")]
    pub fn show(&self) {
        print!("{}", self);
    }
}
