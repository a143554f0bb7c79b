//! Reciprocal-multiplication division by a run-time constant
//!
//! A divisor `d` is turned once into a [`Strategy`], after which `n / d` is a
//! widening multiply, a high-half extraction and a shift. Unsigned dividers
//! follow the round-up method of Granlund and Montgomery; signed dividers
//! divide magnitudes with the unsigned divider and restore the sign with a
//! mask, which truncates toward zero like the native operator.
//!
//! [`FastDivisor::divide_rows`] matches on the strategy once per call, so the
//! per-row body is straight-line code over fixed-size batches.

use colarith_types::IntegerNative;
use std::fmt::Debug;

/// How an unsigned divider computes its quotient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy<T> {
    /// Power-of-two divisor: `n >> shift`
    Shift(u32),
    /// `high(n * magic) >> shift`
    Multiply { magic: T, shift: u32 },
    /// The magic number needs one bit more than `T`; the dividend is added
    /// back in halves before the shift
    MultiplyAdd { magic: T, shift: u32 },
}

/// A precomputed divisor for one integer representation
pub trait FastDivisor: IntegerNative {
    type Divider: Copy + Debug;

    /// Precompute the divider; `divisor` must be non-zero
    fn divider(divisor: Self) -> Self::Divider;

    /// Truncating quotient of `dividend` by the divider's divisor
    fn divide(dividend: Self, divider: &Self::Divider) -> Self;

    /// Map every dividend through `row(dividend, quotient)`, `LANES` rows at a time
    fn divide_rows<O, const LANES: usize>(
        dividends: &[Self],
        divider: &Self::Divider,
        row: impl Fn(Self, Self) -> O,
    ) -> Vec<O>;
}

/// Apply `row` to `values` in fixed batches of `LANES`, then to the tail
#[inline(always)]
fn batched<T: Copy, O, const LANES: usize>(values: &[T], row: impl Fn(T) -> O) -> Vec<O> {
    const { assert!(LANES > 0) };

    let mut out = Vec::with_capacity(values.len());
    let mut batches = values.chunks_exact(LANES);
    for batch in batches.by_ref() {
        let lanes: [O; LANES] = std::array::from_fn(|lane| row(batch[lane]));
        out.extend(lanes);
    }
    out.extend(batches.remainder().iter().map(|&value| row(value)));
    out
}

/// Bind `$quotient` to a branch-free quotient closure for `$strategy`, then
/// evaluate `$body` once with it
macro_rules! with_quotient {
    ($strategy:expr, $t:ty, $wide:ty, |$quotient:ident| $body:expr) => {
        match $strategy {
            Strategy::Shift(shift) => {
                let $quotient = move |n: $t| n >> shift;
                $body
            }
            Strategy::Multiply { magic, shift } => {
                let $quotient = move |n: $t| ((((magic as $wide) * (n as $wide)) >> <$t>::BITS) as $t) >> shift;
                $body
            }
            Strategy::MultiplyAdd { magic, shift } => {
                let $quotient = move |n: $t| {
                    let high = (((magic as $wide) * (n as $wide)) >> <$t>::BITS) as $t;
                    (((n - high) >> 1) + high) >> shift
                };
                $body
            }
        }
    };
}

macro_rules! unsigned_divider {
    ($name:ident, $t:ty, $wide:ty) => {
        /// Quotient strategy for an unsigned divisor
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            strategy: Strategy<$t>,
        }

        impl $name {
            pub fn new(divisor: $t) -> Self {
                debug_assert!(divisor != 0);
                let floor_log2 = <$t>::BITS - 1 - divisor.leading_zeros();

                if divisor.is_power_of_two() {
                    return Self {
                        strategy: Strategy::Shift(floor_log2),
                    };
                }

                let numerator = (1 as $wide) << (<$t>::BITS + floor_log2);
                let proposed = (numerator / divisor as $wide) as $t;
                let rem = (numerator % divisor as $wide) as $t;
                let e = divisor - rem;

                let strategy = if e < (1 as $t) << floor_log2 {
                    Strategy::Multiply {
                        magic: proposed.wrapping_add(1),
                        shift: floor_log2,
                    }
                } else {
                    let mut doubled = proposed.wrapping_add(proposed);
                    let twice_rem = rem.wrapping_add(rem);
                    if twice_rem >= divisor || twice_rem < rem {
                        doubled = doubled.wrapping_add(1);
                    }
                    Strategy::MultiplyAdd {
                        magic: doubled.wrapping_add(1),
                        shift: floor_log2,
                    }
                };

                Self { strategy }
            }

            pub fn strategy(&self) -> Strategy<$t> {
                self.strategy
            }

            #[inline]
            pub fn divide(&self, numerator: $t) -> $t {
                with_quotient!(self.strategy, $t, $wide, |quotient| quotient(numerator))
            }
        }

        impl FastDivisor for $t {
            type Divider = $name;

            #[inline]
            fn divider(divisor: Self) -> $name {
                $name::new(divisor)
            }

            #[inline]
            fn divide(dividend: Self, divider: &$name) -> Self {
                divider.divide(dividend)
            }

            #[inline]
            fn divide_rows<O, const LANES: usize>(
                dividends: &[Self],
                divider: &$name,
                row: impl Fn(Self, Self) -> O,
            ) -> Vec<O> {
                with_quotient!(divider.strategy, $t, $wide, |quotient| {
                    batched::<_, _, LANES>(dividends, |n| row(n, quotient(n)))
                })
            }
        }
    };
}

unsigned_divider!(DividerU32, u32, u64);
unsigned_divider!(DividerU64, u64, u128);

macro_rules! signed_divider {
    ($name:ident, $t:ty, $unsigned:ty, $wide:ty, $magnitude:ident) => {
        /// Unsigned divider over the divisor's magnitude, plus its sign mask
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            magnitude: $magnitude,
            // all ones for a negative divisor, zero otherwise
            sign: $t,
        }

        impl $name {
            pub fn new(divisor: $t) -> Self {
                Self {
                    magnitude: $magnitude::new(divisor.unsigned_abs()),
                    sign: divisor >> (<$t>::BITS - 1),
                }
            }

            #[inline]
            pub fn divide(&self, numerator: $t) -> $t {
                let sign = self.sign;
                with_quotient!(self.magnitude.strategy, $unsigned, $wide, |quotient| {
                    Self::signed_quotient(numerator, sign, &quotient)
                })
            }

            #[inline(always)]
            fn signed_quotient(numerator: $t, divisor_sign: $t, quotient: impl Fn($unsigned) -> $unsigned) -> $t {
                let sign = numerator >> (<$t>::BITS - 1);
                let magnitude = (numerator ^ sign).wrapping_sub(sign) as $unsigned;
                let flip = sign ^ divisor_sign;
                ((quotient(magnitude) as $t) ^ flip).wrapping_sub(flip)
            }
        }

        impl FastDivisor for $t {
            type Divider = $name;

            #[inline]
            fn divider(divisor: Self) -> $name {
                $name::new(divisor)
            }

            #[inline]
            fn divide(dividend: Self, divider: &$name) -> Self {
                divider.divide(dividend)
            }

            #[inline]
            fn divide_rows<O, const LANES: usize>(
                dividends: &[Self],
                divider: &$name,
                row: impl Fn(Self, Self) -> O,
            ) -> Vec<O> {
                let sign = divider.sign;
                with_quotient!(divider.magnitude.strategy, $unsigned, $wide, |quotient| {
                    batched::<_, _, LANES>(dividends, |n| row(n, $name::signed_quotient(n, sign, &quotient)))
                })
            }
        }
    };
}

signed_divider!(DividerI32, i32, u32, u64, DividerU32);
signed_divider!(DividerI64, i64, u64, u128, DividerU64);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use super::Strategy;
    use proptest::prelude::*;

    #[test]
    fn test_magic_for_seven() {
        let divider = DividerU32::new(7);
        assert_eq!(
            divider.strategy(),
            Strategy::MultiplyAdd {
                magic: 0x2492_4925,
                shift: 2
            }
        );
        assert_eq!(divider.divide(7), 1);
        assert_eq!(divider.divide(u32::MAX), u32::MAX / 7);
    }

    #[test]
    fn test_magic_for_three_needs_no_add() {
        let divider = DividerU32::new(3);
        assert_eq!(
            divider.strategy(),
            Strategy::Multiply {
                magic: 0xAAAA_AAAB,
                shift: 1
            }
        );
        assert_eq!(divider.divide(u32::MAX), u32::MAX / 3);
    }

    #[test]
    fn test_power_of_two_is_a_shift() {
        let divider = DividerU64::new(1 << 20);
        assert_eq!(divider.strategy(), Strategy::Shift(20));
        assert_eq!(divider.divide(u64::MAX), u64::MAX >> 20);
        assert_eq!(DividerU32::new(1).divide(12345), 12345);
    }

    #[test]
    fn test_signed_edges() {
        assert_eq!(DividerI32::new(i32::MIN).divide(i32::MIN), 1);
        assert_eq!(DividerI32::new(1).divide(i32::MIN), i32::MIN);
        assert_eq!(DividerI64::new(2).divide(i64::MIN), i64::MIN / 2);
        assert_eq!(DividerI64::new(-3).divide(7), -2);
        assert_eq!(DividerI64::new(-3).divide(-7), 2);
        assert_eq!(DividerI32::new(i32::MAX).divide(i32::MIN), -1);
    }

    #[test]
    fn test_small_divisors_exhaustively() {
        for d in 1..=1024u32 {
            let divider = DividerU32::new(d);
            for n in [0, 1, d - 1, d, d + 1, u32::MAX - 1, u32::MAX, 0x8000_0000] {
                assert_eq!(divider.divide(n), n / d, "{n} / {d}");
            }
        }
    }

    #[test]
    fn test_rows_match_scalar_division_for_every_strategy() {
        // one divisor pair per strategy
        let dividends: Vec<i32> = (0..37).map(|i| (i - 18) * 119_304_647).chain([i32::MIN, i32::MAX]).collect();
        for d in [8, -8, 3, -3, 7, -7] {
            let divider = i32::divider(d);
            let expected: Vec<(i32, i32)> = dividends.iter().map(|&n| (n, n / d)).collect();
            assert_eq!(i32::divide_rows::<_, 4>(&dividends, &divider, |n, q| (n, q)), expected);
            assert_eq!(i32::divide_rows::<_, 8>(&dividends, &divider, |n, q| (n, q)), expected);
            assert_eq!(i32::divide_rows::<_, 16>(&dividends, &divider, |n, q| (n, q)), expected);
        }

        let dividends: Vec<u64> = (0..11).map(|i| u64::MAX - i * 0x0123_4567_89AB_CDEF).collect();
        for d in [1u64 << 40, 3, 7] {
            let divider = u64::divider(d);
            let expected: Vec<u64> = dividends.iter().map(|&n| n / d).collect();
            assert_eq!(u64::divide_rows::<_, 2>(&dividends, &divider, |_, q| q), expected);
            assert_eq!(u64::divide_rows::<_, 8>(&dividends, &divider, |_, q| q), expected);
        }
    }

    #[test]
    fn test_rows_shorter_than_a_batch() {
        let divider = u32::divider(10);
        assert_eq!(u32::divide_rows::<_, 16>(&[], &divider, |_, q| q), Vec::<u32>::new());
        assert_eq!(u32::divide_rows::<_, 16>(&[95, 5], &divider, |_, q| q), vec![9, 0]);
    }

    proptest! {
        #[test]
        fn prop_u32_matches_native(n: u32, d in 1u32..=u32::MAX) {
            prop_assert_eq!(DividerU32::new(d).divide(n), n / d);
        }

        #[test]
        fn prop_u64_matches_native(n: u64, d in 1u64..=u64::MAX) {
            prop_assert_eq!(DividerU64::new(d).divide(n), n / d);
        }

        #[test]
        fn prop_i32_matches_native(n: i32, d: i32) {
            prop_assume!(d != 0 && !(n == i32::MIN && d == -1));
            prop_assert_eq!(DividerI32::new(d).divide(n), n / d);
        }

        #[test]
        fn prop_i64_matches_native(n: i64, d: i64) {
            prop_assume!(d != 0 && !(n == i64::MIN && d == -1));
            prop_assert_eq!(DividerI64::new(d).divide(n), n / d);
        }

        #[test]
        fn prop_i64_rows_match_native(rows in prop::collection::vec(any::<i64>(), 0..40), d: i64) {
            prop_assume!(d != 0 && d != -1);
            let expected: Vec<i64> = rows.iter().map(|&n| n / d).collect();
            prop_assert_eq!(i64::divide_rows::<_, 4>(&rows, &i64::divider(d), |_, q| q), expected);
        }
    }
}
