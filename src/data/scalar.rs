//! Numeric element types that can back a data vector.

/// Numeric element stored in a dense or sparse data vector.
///
/// Zero detection is exact: no epsilon is applied, so `-0.0` counts as zero
/// while `NaN` does not.
pub trait Scalar: Copy + PartialEq + std::fmt::Debug {
    /// Additive identity for the type.
    const ZERO: Self;

    /// Whether the value equals zero exactly.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Convert to `f64` for scoring arithmetic.
    ///
    /// Exact for every type up to 32 bits. `i64`, `u64`, `isize` and `usize`
    /// values above 2^53 in magnitude round to the nearest representable
    /// `f64`.
    fn to_f64(self) -> f64;
}

macro_rules! impl_scalar {
    ($zero:expr => $($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = $zero;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_scalar!(0 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar!(0.0 => f32, f64);
