//! Result-kind promotion rules for arithmetic operations
//!
//! The rules are pure functions over the closed kind and operation catalogs:
//!
//! - Add/Subtract/Multiply on integers: signed if either operand is signed,
//!   width one step above the wider operand (64 bits is the ceiling)
//! - Any float operand makes the result a float, 64-bit if either operand is
//!   `Float64`
//! - DivideFloat: `Float32` only when both operands are `Float32`, otherwise
//!   `Float64`
//! - DivideInt/Modulo: integers only, signed if the left operand is signed,
//!   widened like addition
//! - Bitwise: integers only, width of the wider operand
//! - Negate: unsigned integers widen into a signed kind, signed kinds keep
//!   their kind
//! - BitNot: integers only, kind preserved
//!
//! Temporal operands (`Date`, `DateTime`) replace these rules entirely:
//!
//! - `Date + Integer`, `Integer + Date` -> `Date` (likewise `DateTime`)
//! - `Date - Date` -> `Int32` (likewise `DateTime - DateTime`)
//! - `Date - Integer` -> `Date` (likewise `DateTime`)
//! - anything else involving a temporal kind is invalid

use crate::{OperationKind, ScalarKind};
use colarith_diagnostics::{ArithError, Result};

/// Resolve the result kind of `op` applied to `arguments`
///
/// Fails with an argument-count error when the number of arguments differs
/// from the operation's arity, and with a type error when no promotion exists.
pub fn resolve(op: OperationKind, arguments: &[ScalarKind]) -> Result<ScalarKind> {
    if arguments.len() != op.arity() {
        return Err(ArithError::argument_count(op.name(), arguments.len(), op.arity()));
    }

    match *arguments {
        [operand] => resolve_unary(op, operand)
            .ok_or_else(|| ArithError::illegal_type(op.name(), operand.name(), "first")),
        [left, right] => resolve_binary(op, left, right)
            .ok_or_else(|| ArithError::illegal_types(op.name(), left.name(), right.name())),
        _ => Err(ArithError::argument_count(op.name(), arguments.len(), op.arity())),
    }
}

/// Result kind of a binary operation, `None` when invalid or when `op` is unary
pub fn resolve_binary(op: OperationKind, left: ScalarKind, right: ScalarKind) -> Option<ScalarKind> {
    if op.is_unary() {
        return None;
    }
    if left.is_temporal() || right.is_temporal() {
        return resolve_temporal(op, left, right);
    }

    match op {
        OperationKind::Add | OperationKind::Subtract | OperationKind::Multiply => {
            if left.is_float() || right.is_float() {
                Some(float_result(left, right))
            } else {
                ScalarKind::integer(
                    left.is_signed() || right.is_signed(),
                    next_width(left.bits().max(right.bits())),
                )
            }
        }
        OperationKind::DivideFloat => {
            if left == ScalarKind::Float32 && right == ScalarKind::Float32 {
                Some(ScalarKind::Float32)
            } else {
                Some(ScalarKind::Float64)
            }
        }
        OperationKind::DivideInt | OperationKind::Modulo => {
            if !(left.is_integer() && right.is_integer()) {
                return None;
            }
            ScalarKind::integer(left.is_signed(), next_width(left.bits().max(right.bits())))
        }
        OperationKind::BitAnd
        | OperationKind::BitOr
        | OperationKind::BitXor
        | OperationKind::ShiftLeft
        | OperationKind::ShiftRight => {
            if !(left.is_integer() && right.is_integer()) {
                return None;
            }
            ScalarKind::integer(left.is_signed() || right.is_signed(), left.bits().max(right.bits()))
        }
        OperationKind::Negate | OperationKind::BitNot => None,
    }
}

/// Result kind of a unary operation, `None` when invalid or when `op` is binary
pub fn resolve_unary(op: OperationKind, operand: ScalarKind) -> Option<ScalarKind> {
    match op {
        OperationKind::Negate => {
            if operand.is_float() || (operand.is_integer() && operand.is_signed()) {
                Some(operand)
            } else if operand.is_integer() {
                ScalarKind::integer(true, next_width(operand.bits()))
            } else {
                None
            }
        }
        OperationKind::BitNot => operand.is_integer().then_some(operand),
        _ => None,
    }
}

/// Every binary signature in the catalog with its resolution
pub fn binary_signatures() -> impl Iterator<Item = (OperationKind, ScalarKind, ScalarKind, Option<ScalarKind>)> {
    OperationKind::ALL
        .into_iter()
        .filter(|op| !op.is_unary())
        .flat_map(|op| {
            ScalarKind::ALL.into_iter().flat_map(move |left| {
                ScalarKind::ALL
                    .into_iter()
                    .map(move |right| (op, left, right, resolve_binary(op, left, right)))
            })
        })
}

/// Every unary signature in the catalog with its resolution
pub fn unary_signatures() -> impl Iterator<Item = (OperationKind, ScalarKind, Option<ScalarKind>)> {
    OperationKind::ALL
        .into_iter()
        .filter(OperationKind::is_unary)
        .flat_map(|op| {
            ScalarKind::ALL
                .into_iter()
                .map(move |operand| (op, operand, resolve_unary(op, operand)))
        })
}

fn resolve_temporal(op: OperationKind, left: ScalarKind, right: ScalarKind) -> Option<ScalarKind> {
    match op {
        OperationKind::Add => {
            if left.is_temporal() && right.is_integer() {
                Some(left)
            } else if left.is_integer() && right.is_temporal() {
                Some(right)
            } else {
                None
            }
        }
        OperationKind::Subtract => {
            if !left.is_temporal() {
                None
            } else if left == right {
                Some(ScalarKind::Int32)
            } else if right.is_integer() {
                Some(left)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn float_result(left: ScalarKind, right: ScalarKind) -> ScalarKind {
    if left == ScalarKind::Float64 || right == ScalarKind::Float64 {
        ScalarKind::Float64
    } else {
        ScalarKind::Float32
    }
}

/// Next standard integer width; 64 bits is the ceiling
const fn next_width(bits: u32) -> u32 {
    match bits {
        8 => 16,
        16 => 32,
        _ => 64,
    }
}
