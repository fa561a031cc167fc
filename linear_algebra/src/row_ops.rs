//! Elementary row operations and reduction to row-echelon form.

use crate::{AlgebraError, Matrix, Result, Scalar};
use log::{debug, trace};

impl<R: Scalar> Matrix<R> {
    /// Copy with rows `r1` and `r2` exchanged.
    pub fn ero_swap(&self, r1: usize, r2: usize) -> Result<Self> {
        if self.is_empty() {
            return Ok(Self::empty());
        }
        AlgebraError::check_index(r1, self.nrows)?;
        AlgebraError::check_index(r2, self.nrows)?;

        let mut res = self.clone();
        res.vals.swap(r1, r2);
        Ok(res)
    }

    /// Copy with row `r` multiplied by `c`.
    pub fn ero_multiply(&self, r: usize, c: R) -> Result<Self> {
        AlgebraError::check_index(r, self.nrows)?;

        let mut res = self.clone();
        res.vals[r].iter_mut().for_each(|v| *v *= c);
        Ok(res)
    }

    /// Copy where row `r2` becomes `row r2 + c * row r1`.
    pub fn ero_sum(&self, r1: usize, c: R, r2: usize) -> Result<Self> {
        AlgebraError::check_index(r1, self.nrows)?;
        AlgebraError::check_index(r2, self.nrows)?;

        let mut res = self.clone();
        res.add_row_multiple(r1, c, r2);
        Ok(res)
    }

    fn add_row_multiple(&mut self, src: usize, c: R, dst: usize) {
        for k in 0..self.ncols {
            let v = self.vals[src][k];
            self.vals[dst][k] += c * v;
        }
    }

    /// Gaussian elimination without scaling, leaving every entry below the
    /// diagonal zero.
    ///
    /// The pivot for column `i` is the first row at or below `i` with a
    /// non-zero entry in that column. Columns without one are left as they
    /// are, so singular input is reduced as far as possible rather than
    /// rejected.
    pub fn upper_triangular(&self) -> Result<Self> {
        self.ensure_square()?;

        let n = self.nrows;
        let mut res = self.clone();
        for i in 0..n {
            let Some(pivot) = (i..n).find(|&r| res.vals[r][i] != R::zero()) else {
                debug!("no pivot in column {}, skipping", i);
                continue;
            };
            if pivot != i {
                trace!("swapping rows {} and {}", i, pivot);
                res.vals.swap(i, pivot);
            }

            for j in i + 1..n {
                let factor = res.vals[j][i] / res.vals[i][i];
                trace!("row {} -= {:?} * row {}", j, factor, i);
                res.add_row_multiple(i, -factor, j);
            }
        }
        Ok(res)
    }
}
