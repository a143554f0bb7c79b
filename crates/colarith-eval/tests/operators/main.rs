//! Operator integration tests
//!
//! These tests run operators end to end through the kernel registry:
//! - result kinds and widened values
//! - wrapping at the 64-bit ceiling
//! - division faults
//! - temporal arithmetic

mod arithmetic;
mod bitwise;
mod division;
mod temporal;

use colarith_eval::KernelRegistry;
use colarith_types::{Column, DenseColumn, OperationKind, Scalar};
use std::sync::LazyLock;

static REGISTRY: LazyLock<KernelRegistry> = LazyLock::new(|| KernelRegistry::new().unwrap());

pub(crate) fn registry() -> &'static KernelRegistry {
    &REGISTRY
}

pub(crate) fn dense(column: DenseColumn) -> Column {
    Column::from(column)
}

pub(crate) fn constant(value: Scalar) -> Column {
    Column::constant(value, 1)
}

/// Run a binary operation and unwrap the result
pub(crate) fn binary(op: OperationKind, left: &Column, right: &Column) -> Column {
    registry().execute(op, left, Some(right)).unwrap()
}
