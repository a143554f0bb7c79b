//! Arithmetic Operator Tests
//!
//! Tests for: plus, minus, multiply, divide, negate

use super::{binary, constant, dense, registry};
use colarith_types::{Column, DenseColumn, OperationKind, Scalar};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Integer Widening
// ============================================================================

#[test]
fn test_add_unsigned_and_signed_widens_to_signed() {
    let left = dense(DenseColumn::UInt32(vec![1, 2, 3]));
    let right = Column::constant(Scalar::Int32(-1), 3);
    assert_eq!(
        binary(OperationKind::Add, &left, &right),
        dense(DenseColumn::Int64(vec![0, 1, 2]))
    );
}

#[rstest]
#[case(OperationKind::Add, Scalar::UInt8(255), Scalar::UInt8(1), Scalar::UInt16(256))]
#[case(OperationKind::Multiply, Scalar::Int8(-128), Scalar::Int8(-128), Scalar::Int16(16384))]
#[case(OperationKind::Subtract, Scalar::UInt8(0), Scalar::UInt8(1), Scalar::UInt16(u16::MAX))]
#[case(OperationKind::Subtract, Scalar::Int16(0), Scalar::UInt16(1), Scalar::Int32(-1))]
#[case(OperationKind::Multiply, Scalar::UInt32(u32::MAX), Scalar::UInt32(u32::MAX), Scalar::UInt64(18_446_744_065_119_617_025))]
fn test_widened_result(#[case] op: OperationKind, #[case] a: Scalar, #[case] b: Scalar, #[case] expected: Scalar) {
    assert_eq!(binary(op, &constant(a), &constant(b)), constant(expected));
}

// ============================================================================
// Wrapping at the 64-bit Ceiling
// ============================================================================

#[rstest]
#[case(OperationKind::Add, Scalar::Int64(i64::MAX), Scalar::Int64(1), Scalar::Int64(i64::MIN))]
#[case(OperationKind::Add, Scalar::UInt64(u64::MAX), Scalar::UInt8(2), Scalar::UInt64(1))]
#[case(OperationKind::Subtract, Scalar::Int64(i64::MIN), Scalar::Int8(1), Scalar::Int64(i64::MAX))]
#[case(OperationKind::Multiply, Scalar::UInt64(1 << 32), Scalar::UInt64(1 << 32), Scalar::UInt64(0))]
#[case(OperationKind::Add, Scalar::UInt64(u64::MAX), Scalar::Int64(0), Scalar::Int64(-1))]
fn test_ceiling_wraps_silently(#[case] op: OperationKind, #[case] a: Scalar, #[case] b: Scalar, #[case] expected: Scalar) {
    assert_eq!(binary(op, &constant(a), &constant(b)), constant(expected));
}

// ============================================================================
// Floating Point
// ============================================================================

#[test]
fn test_float_promotion() {
    let out = binary(
        OperationKind::Add,
        &dense(DenseColumn::Int8(vec![2, -2])),
        &constant(Scalar::Float32(0.5)),
    );
    assert_eq!(out, dense(DenseColumn::Float32(vec![2.5, -1.5])));

    let out = binary(
        OperationKind::Multiply,
        &constant(Scalar::Float32(1.5)),
        &constant(Scalar::Float64(2.0)),
    );
    assert_eq!(out, constant(Scalar::Float64(3.0)));
}

#[test]
fn test_divide_returns_float() {
    let out = binary(
        OperationKind::DivideFloat,
        &dense(DenseColumn::Int32(vec![7, -7])),
        &constant(Scalar::Int32(2)),
    );
    assert_eq!(out, dense(DenseColumn::Float64(vec![3.5, -3.5])));

    let out = binary(
        OperationKind::DivideFloat,
        &constant(Scalar::Float32(1.0)),
        &constant(Scalar::Float32(4.0)),
    );
    assert_eq!(out, constant(Scalar::Float32(0.25)));
}

#[test]
fn test_divide_by_zero_is_ieee() {
    let out = binary(
        OperationKind::DivideFloat,
        &dense(DenseColumn::Int32(vec![1, -1, 0])),
        &constant(Scalar::UInt8(0)),
    );
    let Column::Dense(DenseColumn::Float64(values)) = &out else {
        panic!("expected a dense Float64 column, got {out}");
    };
    assert_eq!(values[0], f64::INFINITY);
    assert_eq!(values[1], f64::NEG_INFINITY);
    assert!(values[2].is_nan());
}

// ============================================================================
// Negate
// ============================================================================

#[rstest]
#[case(Scalar::UInt8(200), Scalar::Int16(-200))]
#[case(Scalar::UInt32(4_000_000_000), Scalar::Int64(-4_000_000_000))]
#[case(Scalar::Int32(i32::MIN), Scalar::Int32(i32::MIN))]
#[case(Scalar::Float64(0.5), Scalar::Float64(-0.5))]
fn test_negate(#[case] operand: Scalar, #[case] expected: Scalar) {
    let out = registry().execute(OperationKind::Negate, &constant(operand), None).unwrap();
    assert_eq!(out, constant(expected));
}
