//! Generic elementwise kernels
//!
//! Every valid (operation, left kind, right kind) triple is bound to a
//! [`BinaryKernel`]: four monomorphized entry points, one per operand shape
//! pair. Entry points are plain function pointers so the registry can swap
//! one out for a specialized implementation.

use crate::EvalResult;
use crate::operators::{BinaryOp, UnaryOp};
use colarith_diagnostics::ArithError;
use colarith_types::{DenseColumn, OperationKind, PrimitiveKind, Scalar, ScalarKind};
use std::fmt;

/// Dense left operand, dense right operand of equal length
pub type DenseDenseFn = fn(&DenseColumn, &DenseColumn) -> EvalResult<DenseColumn>;

/// Dense left operand, broadcast right operand
pub type DenseConstantFn = fn(&DenseColumn, &Scalar) -> EvalResult<DenseColumn>;

/// Broadcast left operand, dense right operand
pub type ConstantDenseFn = fn(&Scalar, &DenseColumn) -> EvalResult<DenseColumn>;

/// Two broadcast operands
pub type ConstantConstantFn = fn(&Scalar, &Scalar) -> EvalResult<Scalar>;

pub type UnaryDenseFn = fn(&DenseColumn) -> EvalResult<DenseColumn>;

pub type UnaryConstantFn = fn(&Scalar) -> EvalResult<Scalar>;

/// Entry points for one binary (operation, left, right) triple
#[derive(Clone, Copy)]
pub struct BinaryKernel {
    pub result: ScalarKind,
    pub dense_dense: DenseDenseFn,
    pub dense_constant: DenseConstantFn,
    pub constant_dense: ConstantDenseFn,
    pub constant_constant: ConstantConstantFn,
}

impl BinaryKernel {
    /// Instantiate the generic kernel for one kind triple
    pub fn generic<L, R, O, Op>() -> Self
    where
        L: PrimitiveKind,
        R: PrimitiveKind,
        O: PrimitiveKind,
        Op: BinaryOp<L, R, O>,
    {
        Self {
            result: O::KIND,
            dense_dense: dense_dense::<L, R, O, Op>,
            dense_constant: dense_constant::<L, R, O, Op>,
            constant_dense: constant_dense::<L, R, O, Op>,
            constant_constant: constant_constant::<L, R, O, Op>,
        }
    }
}

impl fmt::Debug for BinaryKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryKernel").field("result", &self.result).finish_non_exhaustive()
    }
}

/// Entry points for one unary (operation, operand) pair
#[derive(Clone, Copy)]
pub struct UnaryKernel {
    pub result: ScalarKind,
    pub dense: UnaryDenseFn,
    pub constant: UnaryConstantFn,
}

impl UnaryKernel {
    /// Instantiate the generic kernel for one kind pair
    pub fn generic<I, O, Op>() -> Self
    where
        I: PrimitiveKind,
        O: PrimitiveKind,
        Op: UnaryOp<I, O>,
    {
        Self {
            result: O::KIND,
            dense: unary_dense::<I, O, Op>,
            constant: unary_constant::<I, O, Op>,
        }
    }
}

impl fmt::Debug for UnaryKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryKernel").field("result", &self.result).finish_non_exhaustive()
    }
}

// =========================================================================
// Operand Extraction
// =========================================================================

pub(crate) fn dense_values<'a, K: PrimitiveKind>(
    column: &'a DenseColumn,
    op: OperationKind,
    position: &str,
) -> EvalResult<&'a [K::Native]> {
    K::slice(column).ok_or_else(|| {
        ArithError::illegal_column(op.name(), format!("ColumnVector<{}>", column.kind()), position)
    })
}

pub(crate) fn scalar_value<K: PrimitiveKind>(value: &Scalar, op: OperationKind, position: &str) -> EvalResult<K::Native> {
    K::scalar(value).ok_or_else(|| {
        ArithError::illegal_column(op.name(), format!("ColumnConst<{}>", value.kind()), position)
    })
}

// =========================================================================
// Binary Entry Points
// =========================================================================

fn dense_dense<L, R, O, Op>(left: &DenseColumn, right: &DenseColumn) -> EvalResult<DenseColumn>
where
    L: PrimitiveKind,
    R: PrimitiveKind,
    O: PrimitiveKind,
    Op: BinaryOp<L, R, O>,
{
    let a = dense_values::<L>(left, Op::KIND, "first")?;
    let b = dense_values::<R>(right, Op::KIND, "second")?;

    let mut out = Vec::with_capacity(a.len());
    for (&x, &y) in a.iter().zip(b) {
        Op::check(x, y)?;
        out.push(Op::apply(x, y));
    }
    Ok(O::dense(out))
}

fn dense_constant<L, R, O, Op>(left: &DenseColumn, right: &Scalar) -> EvalResult<DenseColumn>
where
    L: PrimitiveKind,
    R: PrimitiveKind,
    O: PrimitiveKind,
    Op: BinaryOp<L, R, O>,
{
    let a = dense_values::<L>(left, Op::KIND, "first")?;
    let y = scalar_value::<R>(right, Op::KIND, "second")?;

    let mut out = Vec::with_capacity(a.len());
    for &x in a {
        Op::check(x, y)?;
        out.push(Op::apply(x, y));
    }
    Ok(O::dense(out))
}

fn constant_dense<L, R, O, Op>(left: &Scalar, right: &DenseColumn) -> EvalResult<DenseColumn>
where
    L: PrimitiveKind,
    R: PrimitiveKind,
    O: PrimitiveKind,
    Op: BinaryOp<L, R, O>,
{
    let x = scalar_value::<L>(left, Op::KIND, "first")?;
    let b = dense_values::<R>(right, Op::KIND, "second")?;

    let mut out = Vec::with_capacity(b.len());
    for &y in b {
        Op::check(x, y)?;
        out.push(Op::apply(x, y));
    }
    Ok(O::dense(out))
}

fn constant_constant<L, R, O, Op>(left: &Scalar, right: &Scalar) -> EvalResult<Scalar>
where
    L: PrimitiveKind,
    R: PrimitiveKind,
    O: PrimitiveKind,
    Op: BinaryOp<L, R, O>,
{
    let x = scalar_value::<L>(left, Op::KIND, "first")?;
    let y = scalar_value::<R>(right, Op::KIND, "second")?;
    Op::check(x, y)?;
    Ok(O::constant(Op::apply(x, y)))
}

// =========================================================================
// Unary Entry Points
// =========================================================================

fn unary_dense<I, O, Op>(operand: &DenseColumn) -> EvalResult<DenseColumn>
where
    I: PrimitiveKind,
    O: PrimitiveKind,
    Op: UnaryOp<I, O>,
{
    let a = dense_values::<I>(operand, Op::KIND, "first")?;
    Ok(O::dense(a.iter().map(|&x| Op::apply(x)).collect()))
}

fn unary_constant<I, O, Op>(operand: &Scalar) -> EvalResult<Scalar>
where
    I: PrimitiveKind,
    O: PrimitiveKind,
    Op: UnaryOp<I, O>,
{
    let x = scalar_value::<I>(operand, Op::KIND, "first")?;
    Ok(O::constant(Op::apply(x)))
}
