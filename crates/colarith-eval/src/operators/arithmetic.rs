//! Arithmetic Operators
//!
//! Implements: Plus, Minus, Multiply, DivideFloating, DivideIntegral, Modulo,
//! Negate

use super::{FloatOp, IntegerOp, NumericOp, Operation, UnaryNumericOp};
use crate::EvalResult;
use colarith_diagnostics::ArithError;
use colarith_types::{FloatNative, IntegerNative, NumericNative, OperationKind};

// =========================================================================
// Wrapping Arithmetic
// =========================================================================

/// `plus`: wraps at the result width
pub struct Plus;

impl Operation for Plus {
    const KIND: OperationKind = OperationKind::Add;
}

impl NumericOp for Plus {
    #[inline]
    fn apply<T: NumericNative>(a: T, b: T) -> T {
        a.add_wrapping(b)
    }
}

/// `minus`: wraps at the result width
pub struct Minus;

impl Operation for Minus {
    const KIND: OperationKind = OperationKind::Subtract;
}

impl NumericOp for Minus {
    #[inline]
    fn apply<T: NumericNative>(a: T, b: T) -> T {
        a.sub_wrapping(b)
    }
}

/// `multiply`: wraps at the result width
pub struct Multiply;

impl Operation for Multiply {
    const KIND: OperationKind = OperationKind::Multiply;
}

impl NumericOp for Multiply {
    #[inline]
    fn apply<T: NumericNative>(a: T, b: T) -> T {
        a.mul_wrapping(b)
    }
}

// =========================================================================
// Division
// =========================================================================

/// `divide`: IEEE division, a zero divisor yields an infinity or NaN
pub struct DivideFloating;

impl Operation for DivideFloating {
    const KIND: OperationKind = OperationKind::DivideFloat;
}

impl FloatOp for DivideFloating {
    #[inline]
    fn apply<T: FloatNative>(a: T, b: T) -> T {
        a / b
    }
}

/// `intDiv`: truncating division
///
/// Faults on a zero divisor and on the signed minimum of the dividend's kind
/// divided by minus one.
pub struct DivideIntegral;

impl Operation for DivideIntegral {
    const KIND: OperationKind = OperationKind::DivideInt;
}

impl IntegerOp for DivideIntegral {
    #[inline]
    fn check<A: IntegerNative, B: IntegerNative>(a: A, b: B) -> EvalResult<()> {
        if b.is_zero() {
            return Err(ArithError::division_by_zero(Self::KIND.name()));
        }
        if a.is_min() && b.is_minus_one() {
            return Err(ArithError::division_overflow(Self::KIND.name()));
        }
        Ok(())
    }

    #[inline]
    fn apply<T: IntegerNative>(a: T, b: T) -> T {
        a.div_wrapping(b)
    }
}

/// `modulo`: truncating remainder, the sign follows the dividend
///
/// Faults only on a zero divisor; the signed minimum modulo minus one is zero.
pub struct Modulo;

impl Operation for Modulo {
    const KIND: OperationKind = OperationKind::Modulo;
}

impl IntegerOp for Modulo {
    #[inline]
    fn check<A: IntegerNative, B: IntegerNative>(_a: A, b: B) -> EvalResult<()> {
        if b.is_zero() {
            return Err(ArithError::division_by_zero(Self::KIND.name()));
        }
        Ok(())
    }

    #[inline]
    fn apply<T: IntegerNative>(a: T, b: T) -> T {
        a.rem_wrapping(b)
    }
}

// =========================================================================
// Unary
// =========================================================================

/// `negate`: never faults, the signed minimum negates to itself
pub struct Negate;

impl Operation for Negate {
    const KIND: OperationKind = OperationKind::Negate;
}

impl UnaryNumericOp for Negate {
    #[inline]
    fn apply<T: NumericNative>(a: T) -> T {
        a.neg_wrapping()
    }
}
