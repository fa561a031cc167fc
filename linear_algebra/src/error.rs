use thiserror::Error;

pub type Result<T> = core::result::Result<T, AlgebraError>;

/// Coarse classification of [`AlgebraError`], for callers that only care
/// about which family of condition was violated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed constructor or argument input.
    InvalidArgument,
    /// Two operands have incompatible shapes.
    DimensionMismatch,
    /// The operand's own structure is unsuitable: not square, singular, or
    /// indexed past a bound.
    Structural,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AlgebraError {
    /// The sampling interval `[min, max)` is empty or unbounded.
    #[error("Invalid sampling range: min {min} must be less than max {max}")]
    InvalidRange { min: f64, max: f64 },

    /// Row `row` of a nested vector has a different length than row 0.
    #[error("Row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Concatenation axis other than 0 (rows) or 1 (columns).
    #[error("Invalid axis {0}, expected 0 or 1")]
    InvalidAxis(usize),

    /// Fail due to operations on matrices of incompatible shapes.
    #[error("Dimension mismatch: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Matrix is not square: {0}x{1}")]
    NotSquare(usize, usize),

    #[error("Matrix is singular")]
    Singular,

    #[error("Index {index} out of range for dimension of size {bound}")]
    IndexOutOfRange { index: usize, bound: usize },
}

impl AlgebraError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRange { .. } | Self::RaggedRows { .. } | Self::InvalidAxis(_) => {
                ErrorKind::InvalidArgument
            }
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::NotSquare(..) | Self::Singular | Self::IndexOutOfRange { .. } => {
                ErrorKind::Structural
            }
        }
    }

    pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
        if index >= bound {
            return Err(Self::IndexOutOfRange { index, bound });
        }
        Ok(())
    }
}
