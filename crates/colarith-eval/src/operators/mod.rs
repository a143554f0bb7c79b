//! Arithmetic operator implementations
//!
//! Operators are zero-sized functors grouped by the representations they
//! accept:
//! - [`NumericOp`]: any number, including temporal counters
//! - [`FloatOp`]: floating-point results only
//! - [`IntegerOp`]: two's-complement integers, optionally faulting
//! - [`UnaryNumericOp`] / [`UnaryIntegerOp`]: single operand
//!
//! The adapters [`Numeric`], [`Floating`], [`Integer`], [`UnaryNumeric`] and
//! [`UnaryInteger`] lift a functor to a [`BinaryOp`] or [`UnaryOp`] over
//! concrete kind markers, widening every operand to the result
//! representation before the functor runs.

pub mod arithmetic;
pub mod bitwise;

pub use arithmetic::*;
pub use bitwise::*;

use crate::EvalResult;
use colarith_types::{FloatNative, IntegerNative, NumericNative, OperationKind, PrimitiveKind};
use std::marker::PhantomData;

/// An operation identified by its kind
pub trait Operation: Send + Sync + 'static {
    const KIND: OperationKind;
}

/// Binary operation over widened values of any numeric representation
pub trait NumericOp: Operation {
    fn apply<T: NumericNative>(a: T, b: T) -> T;
}

/// Binary operation producing a floating-point result
pub trait FloatOp: Operation {
    fn apply<T: FloatNative>(a: T, b: T) -> T;
}

/// Binary operation over widened integer values
pub trait IntegerOp: Operation {
    /// Validate one pair of source values before widening
    #[inline]
    fn check<A: IntegerNative, B: IntegerNative>(_a: A, _b: B) -> EvalResult<()> {
        Ok(())
    }

    fn apply<T: IntegerNative>(a: T, b: T) -> T;
}

/// Unary operation over any numeric representation
pub trait UnaryNumericOp: Operation {
    fn apply<T: NumericNative>(a: T) -> T;
}

/// Unary operation over integer representations
pub trait UnaryIntegerOp: Operation {
    fn apply<T: IntegerNative>(a: T) -> T;
}

/// A binary operation bound to concrete left, right and result kinds
pub trait BinaryOp<L: PrimitiveKind, R: PrimitiveKind, O: PrimitiveKind>: Operation {
    /// Validate one pair of source values; the default never faults
    #[inline]
    fn check(_a: L::Native, _b: R::Native) -> EvalResult<()> {
        Ok(())
    }

    fn apply(a: L::Native, b: R::Native) -> O::Native;
}

/// A unary operation bound to concrete operand and result kinds
pub trait UnaryOp<I: PrimitiveKind, O: PrimitiveKind>: Operation {
    fn apply(a: I::Native) -> O::Native;
}

/// Lifts a [`NumericOp`] to every kind triple
pub struct Numeric<Op>(PhantomData<Op>);

/// Lifts a [`FloatOp`] to every triple with a floating-point result
pub struct Floating<Op>(PhantomData<Op>);

/// Lifts an [`IntegerOp`] to every all-integer triple
pub struct Integer<Op>(PhantomData<Op>);

/// Lifts a [`UnaryNumericOp`] to every kind pair
pub struct UnaryNumeric<Op>(PhantomData<Op>);

/// Lifts a [`UnaryIntegerOp`] to every integer kind pair
pub struct UnaryInteger<Op>(PhantomData<Op>);

macro_rules! forward_operation {
    ($($adapter:ident: $bound:ident),*) => {
        $(
            impl<Op: $bound> Operation for $adapter<Op> {
                const KIND: OperationKind = Op::KIND;
            }
        )*
    };
}

forward_operation!(
    Numeric: NumericOp,
    Floating: FloatOp,
    Integer: IntegerOp,
    UnaryNumeric: UnaryNumericOp,
    UnaryInteger: UnaryIntegerOp
);

impl<L, R, O, Op> BinaryOp<L, R, O> for Numeric<Op>
where
    L: PrimitiveKind,
    R: PrimitiveKind,
    O: PrimitiveKind,
    Op: NumericOp,
{
    #[inline]
    fn apply(a: L::Native, b: R::Native) -> O::Native {
        Op::apply(O::Native::cast(a), O::Native::cast(b))
    }
}

impl<L, R, O, Op> BinaryOp<L, R, O> for Floating<Op>
where
    L: PrimitiveKind,
    R: PrimitiveKind,
    O: PrimitiveKind,
    O::Native: FloatNative,
    Op: FloatOp,
{
    #[inline]
    fn apply(a: L::Native, b: R::Native) -> O::Native {
        Op::apply(O::Native::cast(a), O::Native::cast(b))
    }
}

impl<L, R, O, Op> BinaryOp<L, R, O> for Integer<Op>
where
    L: PrimitiveKind,
    R: PrimitiveKind,
    O: PrimitiveKind,
    L::Native: IntegerNative,
    R::Native: IntegerNative,
    O::Native: IntegerNative,
    Op: IntegerOp,
{
    #[inline]
    fn check(a: L::Native, b: R::Native) -> EvalResult<()> {
        Op::check(a, b)
    }

    #[inline]
    fn apply(a: L::Native, b: R::Native) -> O::Native {
        Op::apply(O::Native::cast(a), O::Native::cast(b))
    }
}

impl<I, O, Op> UnaryOp<I, O> for UnaryNumeric<Op>
where
    I: PrimitiveKind,
    O: PrimitiveKind,
    Op: UnaryNumericOp,
{
    #[inline]
    fn apply(a: I::Native) -> O::Native {
        Op::apply(O::Native::cast(a))
    }
}

impl<I, O, Op> UnaryOp<I, O> for UnaryInteger<Op>
where
    I: PrimitiveKind,
    O: PrimitiveKind,
    O::Native: IntegerNative,
    Op: UnaryIntegerOp,
{
    #[inline]
    fn apply(a: I::Native) -> O::Native {
        Op::apply(O::Native::cast(a))
    }
}
