//! Constant-divisor fast path for `intDiv` and `modulo`
//!
//! Replaces the generic dense-by-constant entry point for the kind pairs in
//! [`FAST_PATH_PAIRS`]. The divisor is validated once, turned into a
//! [`FastDivisor`] divider, and applied to the dividends in fixed batches of
//! as many lanes as one vector register holds. Output matches the generic kernel for every non-empty
//! column:
//! - a zero divisor faults before any row is read
//! - `intDiv` by minus one negates, faulting on the signed minimum
//! - `modulo` by one or minus one is zero for every row
//! - `modulo` is `a - (a / d) * d`; the quotient truncates toward zero, so
//!   this is the truncating remainder with the dividend's sign

pub mod divider;

pub use divider::FastDivisor;

use crate::EvalResult;
use crate::kernel::{DenseConstantFn, dense_values, scalar_value};
use crate::operators::{DivideIntegral, Modulo, Operation};
use colarith_diagnostics::ArithError;
use colarith_types::{
    DenseColumn, Int8Type, Int16Type, Int32Type, Int64Type, IntegerNative, NumericNative, OperationKind,
    PrimitiveKind, Scalar, ScalarKind, UInt8Type, UInt16Type, UInt32Type, UInt64Type,
};

/// Vector register widths, in bytes, the fast path can batch for
pub const SUPPORTED_VECTOR_WIDTHS: [usize; 3] = [16, 32, 64];

/// (dividend, divisor) kinds served by the fast path for both operations
pub const FAST_PATH_PAIRS: [(ScalarKind, ScalarKind); 14] = {
    use ScalarKind::*;
    [
        (UInt32, UInt8),
        (UInt32, UInt16),
        (UInt32, UInt32),
        (UInt64, UInt8),
        (UInt64, UInt16),
        (UInt64, UInt32),
        (UInt64, UInt64),
        (Int32, Int8),
        (Int32, Int16),
        (Int32, Int32),
        (Int64, Int8),
        (Int64, Int16),
        (Int64, Int32),
        (Int64, Int64),
    ]
};

/// Integer division whose per-row work can be expressed through a quotient
pub trait ConstantDivision: Operation {
    /// Result for a divisor of one
    fn by_one<T: IntegerNative>(dividend: T) -> T;

    /// Result for a divisor of minus one
    fn by_minus_one<T: IntegerNative>(dividend: T) -> EvalResult<T>;

    /// Result from the dividend, its truncated quotient and the divisor
    fn finish<T: IntegerNative>(dividend: T, quotient: T, divisor: T) -> T;
}

impl ConstantDivision for DivideIntegral {
    #[inline]
    fn by_one<T: IntegerNative>(dividend: T) -> T {
        dividend
    }

    #[inline]
    fn by_minus_one<T: IntegerNative>(dividend: T) -> EvalResult<T> {
        if dividend.is_min() {
            return Err(ArithError::division_overflow(Self::KIND.name()));
        }
        Ok(dividend.neg_wrapping())
    }

    #[inline]
    fn finish<T: IntegerNative>(_dividend: T, quotient: T, _divisor: T) -> T {
        quotient
    }
}

impl ConstantDivision for Modulo {
    #[inline]
    fn by_one<T: IntegerNative>(_dividend: T) -> T {
        T::ZERO
    }

    #[inline]
    fn by_minus_one<T: IntegerNative>(_dividend: T) -> EvalResult<T> {
        Ok(T::ZERO)
    }

    #[inline]
    fn finish<T: IntegerNative>(dividend: T, quotient: T, divisor: T) -> T {
        dividend.sub_wrapping(quotient.mul_wrapping(divisor))
    }
}

/// Fast-path dense-by-constant entry point for `op` over a kind pair
///
/// Returns `None` for operations and pairs the fast path does not serve, and
/// for unsupported vector widths.
pub fn constant_divisor_kernel(
    op: OperationKind,
    left: ScalarKind,
    right: ScalarKind,
    vector_width_bytes: usize,
) -> Option<DenseConstantFn> {
    // lanes per register for 32-bit and 64-bit dividends
    match (op, vector_width_bytes) {
        (OperationKind::DivideInt, 16) => select::<DivideIntegral, 4, 2>(left, right),
        (OperationKind::DivideInt, 32) => select::<DivideIntegral, 8, 4>(left, right),
        (OperationKind::DivideInt, 64) => select::<DivideIntegral, 16, 8>(left, right),
        (OperationKind::Modulo, 16) => select::<Modulo, 4, 2>(left, right),
        (OperationKind::Modulo, 32) => select::<Modulo, 8, 4>(left, right),
        (OperationKind::Modulo, 64) => select::<Modulo, 16, 8>(left, right),
        _ => None,
    }
}

fn select<Op: ConstantDivision, const LANES32: usize, const LANES64: usize>(
    left: ScalarKind,
    right: ScalarKind,
) -> Option<DenseConstantFn> {
    use ScalarKind::*;

    let kernel: DenseConstantFn = match (left, right) {
        (UInt32, UInt8) => divide_by_constant::<UInt32Type, UInt8Type, UInt64Type, Op, LANES32>,
        (UInt32, UInt16) => divide_by_constant::<UInt32Type, UInt16Type, UInt64Type, Op, LANES32>,
        (UInt32, UInt32) => divide_by_constant::<UInt32Type, UInt32Type, UInt64Type, Op, LANES32>,
        (UInt64, UInt8) => divide_by_constant::<UInt64Type, UInt8Type, UInt64Type, Op, LANES64>,
        (UInt64, UInt16) => divide_by_constant::<UInt64Type, UInt16Type, UInt64Type, Op, LANES64>,
        (UInt64, UInt32) => divide_by_constant::<UInt64Type, UInt32Type, UInt64Type, Op, LANES64>,
        (UInt64, UInt64) => divide_by_constant::<UInt64Type, UInt64Type, UInt64Type, Op, LANES64>,
        (Int32, Int8) => divide_by_constant::<Int32Type, Int8Type, Int64Type, Op, LANES32>,
        (Int32, Int16) => divide_by_constant::<Int32Type, Int16Type, Int64Type, Op, LANES32>,
        (Int32, Int32) => divide_by_constant::<Int32Type, Int32Type, Int64Type, Op, LANES32>,
        (Int64, Int8) => divide_by_constant::<Int64Type, Int8Type, Int64Type, Op, LANES64>,
        (Int64, Int16) => divide_by_constant::<Int64Type, Int16Type, Int64Type, Op, LANES64>,
        (Int64, Int32) => divide_by_constant::<Int64Type, Int32Type, Int64Type, Op, LANES64>,
        (Int64, Int64) => divide_by_constant::<Int64Type, Int64Type, Int64Type, Op, LANES64>,
        _ => return None,
    };
    Some(kernel)
}

fn divide_by_constant<L, R, O, Op, const LANES: usize>(left: &DenseColumn, right: &Scalar) -> EvalResult<DenseColumn>
where
    L: PrimitiveKind,
    L::Native: FastDivisor,
    R: PrimitiveKind,
    R::Native: IntegerNative,
    O: PrimitiveKind,
    O::Native: IntegerNative,
    Op: ConstantDivision,
{
    let dividends = dense_values::<L>(left, Op::KIND, "first")?;
    let divisor = scalar_value::<R>(right, Op::KIND, "second")?;
    if divisor.is_zero() {
        return Err(ArithError::division_by_zero(Op::KIND.name()));
    }

    // the divisor is never wider than the dividend and shares its signedness
    let divisor = L::Native::cast(divisor);

    if divisor.is_minus_one() {
        let out = dividends
            .iter()
            .map(|&a| Op::by_minus_one(a).map(O::Native::cast))
            .collect::<EvalResult<Vec<_>>>()?;
        return Ok(O::dense(out));
    }
    if divisor == L::Native::ONE {
        return Ok(O::dense(dividends.iter().map(|&a| O::Native::cast(Op::by_one(a))).collect()));
    }

    let divider = L::Native::divider(divisor);
    let out = L::Native::divide_rows::<_, LANES>(dividends, &divider, |a, quotient| {
        O::Native::cast(Op::finish(a, quotient, divisor))
    });

    Ok(O::dense(out))
}
