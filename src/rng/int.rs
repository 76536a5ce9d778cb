//! Integer widths accepted by [`Rand::below`](super::Rand::below).

/// A primitive integer the generic sampler can produce.
///
/// Sampling widens the bound to `u64`, runs the full-width rejection loop
/// and narrows the result back. Since results are always below a positive
/// bound of the same type, the narrowing is lossless.
pub trait SampleInt: Copy {
    /// `true` when the value is strictly greater than zero.
    fn is_positive(self) -> bool;

    /// The value reinterpreted as `u64`. Only called on positive values.
    fn to_u64(self) -> u64;

    /// Narrows a sampled value back to `Self`.
    fn from_u64(value: u64) -> Self;

    /// The value widened for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_sample_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl SampleInt for $t {
                #[inline]
                fn is_positive(self) -> bool {
                    self > 0
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_u64(value: u64) -> Self {
                    value as $t
                }

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_sample_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
