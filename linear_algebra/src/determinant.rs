use crate::{AlgebraError, Matrix, Result, Scalar};
use log::debug;

impl<R: Scalar> Matrix<R> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// The empty matrix has determinant one. Cost grows factorially with the
    /// dimension; this is not meant for large matrices.
    pub fn determinant(&self) -> Result<R> {
        self.ensure_square()?;
        Ok(self.cofactor_expansion())
    }

    fn cofactor_expansion(&self) -> R {
        let m = &self.vals;
        match self.nrows {
            0 => R::one(),
            1 => m[0][0],
            2 => m[0][0] * m[1][1] - m[0][1] * m[1][0],
            n => {
                let mut det = R::zero();
                for i in 0..n {
                    det += R::cofactor_sign(i)
                        * m[0][i]
                        * self.minor_unchecked(0, i).cofactor_expansion();
                }
                det
            }
        }
    }

    /// Inverse through the adjugate, `adj(A) / det(A)`.
    ///
    /// A matrix whose determinant is exactly zero is rejected as singular;
    /// no tolerance is applied.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det == R::zero() {
            debug!("refusing to invert singular {}x{} matrix", self.nrows, self.nrows);
            return Err(AlgebraError::Singular);
        }

        let n = self.nrows;
        let mut adj = vec![vec![R::zero(); n]; n];
        for i in 0..n {
            for j in 0..n {
                adj[j][i] =
                    R::cofactor_sign(i + j) * self.minor_unchecked(i, j).cofactor_expansion();
            }
        }

        Ok(Self::from_parts(n, n, adj).scale(R::one() / det))
    }
}
