//! Native representation types behind each scalar kind
//!
//! Kernels never apply an operator to mixed representations: both operands
//! are first converted with [`NumericNative::cast`], which has the semantics
//! of an `as` conversion (truncation, sign reinterpretation, float rounding).

use num_traits::{AsPrimitive, Float};
use std::fmt::Debug;

/// A primitive number that can be converted to every other primitive number
pub trait NumericNative:
    Copy
    + Default
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + AsPrimitive<u8>
    + AsPrimitive<u16>
    + AsPrimitive<u32>
    + AsPrimitive<u64>
    + AsPrimitive<i8>
    + AsPrimitive<i16>
    + AsPrimitive<i32>
    + AsPrimitive<i64>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
{
    /// Convert any native value into this representation, as with `as`
    fn cast<A: NumericNative>(value: A) -> Self;

    fn add_wrapping(self, rhs: Self) -> Self;
    fn sub_wrapping(self, rhs: Self) -> Self;
    fn mul_wrapping(self, rhs: Self) -> Self;
    fn neg_wrapping(self) -> Self;
}

/// A two's-complement integer representation
pub trait IntegerNative: NumericNative + Eq + Ord {
    const SIGNED: bool;
    const BITS: u32;
    const MIN: Self;
    const MAX: Self;
    const ZERO: Self;
    const ONE: Self;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Always false for unsigned representations
    fn is_minus_one(self) -> bool;

    fn is_min(self) -> bool {
        Self::SIGNED && self == Self::MIN
    }

    /// Truncating division; `MIN / -1` wraps to `MIN`
    fn div_wrapping(self, rhs: Self) -> Self;
    /// Truncating remainder; `MIN % -1` is zero
    fn rem_wrapping(self, rhs: Self) -> Self;
    fn bit_and(self, rhs: Self) -> Self;
    fn bit_or(self, rhs: Self) -> Self;
    fn bit_xor(self, rhs: Self) -> Self;
    fn bit_not(self) -> Self;
    /// Shift by `rhs` modulo the bit width
    fn shl_wrapping(self, rhs: Self) -> Self;
    /// Shift by `rhs` modulo the bit width; arithmetic for signed types
    fn shr_wrapping(self, rhs: Self) -> Self;
}

/// An IEEE-754 floating-point representation
pub trait FloatNative: NumericNative + Float {}

macro_rules! numeric_native {
    ($t:ty, wrapping) => {
        impl NumericNative for $t {
            #[inline]
            fn cast<A: NumericNative>(value: A) -> Self {
                AsPrimitive::<$t>::as_(value)
            }

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_wrapping(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn neg_wrapping(self) -> Self {
                self.wrapping_neg()
            }
        }
    };
    ($t:ty, ieee) => {
        impl NumericNative for $t {
            #[inline]
            fn cast<A: NumericNative>(value: A) -> Self {
                AsPrimitive::<$t>::as_(value)
            }

            #[inline]
            fn add_wrapping(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub_wrapping(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn mul_wrapping(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn neg_wrapping(self) -> Self {
                -self
            }
        }

        impl FloatNative for $t {}
    };
}

macro_rules! integer_native {
    ($t:ty, $signed:expr) => {
        numeric_native!($t, wrapping);

        impl IntegerNative for $t {
            const SIGNED: bool = $signed;
            const BITS: u32 = <$t>::BITS;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline]
            fn is_minus_one(self) -> bool {
                $signed && self == (0 as $t).wrapping_sub(1)
            }

            #[inline]
            fn div_wrapping(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            #[inline]
            fn rem_wrapping(self, rhs: Self) -> Self {
                self.wrapping_rem(rhs)
            }

            #[inline]
            fn bit_and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline]
            fn bit_or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline]
            fn bit_xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline]
            fn bit_not(self) -> Self {
                !self
            }

            #[inline]
            fn shl_wrapping(self, rhs: Self) -> Self {
                self.wrapping_shl(rhs as u32)
            }

            #[inline]
            fn shr_wrapping(self, rhs: Self) -> Self {
                self.wrapping_shr(rhs as u32)
            }
        }
    };
}

integer_native!(u8, false);
integer_native!(u16, false);
integer_native!(u32, false);
integer_native!(u64, false);
integer_native!(i8, true);
integer_native!(i16, true);
integer_native!(i32, true);
integer_native!(i64, true);

numeric_native!(f32, ieee);
numeric_native!(f64, ieee);
