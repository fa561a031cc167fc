use ark_std::{
    fmt::Debug,
    ops::{AddAssign, Div, MulAssign, Neg, Sub},
    One, Zero,
};

/// Arithmetic required of a matrix entry.
///
/// Blanket-implemented, so `f64` and `f32` qualify without further work.
pub trait Scalar:
    'static
    + Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + MulAssign
{
    /// `+1` for even `i`, `-1` for odd, as used in cofactor expansion.
    #[inline]
    fn cofactor_sign(i: usize) -> Self {
        if i % 2 == 0 {
            Self::one()
        } else {
            -Self::one()
        }
    }
}

impl<T> Scalar for T where
    T: 'static
        + Copy
        + Debug
        + PartialEq
        + PartialOrd
        + Zero
        + One
        + Neg<Output = T>
        + Sub<Output = T>
        + Div<Output = T>
        + AddAssign
        + MulAssign
{
}
