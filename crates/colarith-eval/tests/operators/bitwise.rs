//! Bitwise Operator Tests
//!
//! Tests for: bitAnd, bitOr, bitXor, bitShiftLeft, bitShiftRight, bitNot

use super::{binary, constant, dense, registry};
use colarith_types::{Column, DenseColumn, OperationKind, Scalar};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(OperationKind::BitAnd, Scalar::Int32(12), Scalar::Int32(10), Scalar::Int32(8))]
#[case(OperationKind::BitOr, Scalar::UInt8(0xF0), Scalar::Int64(0x0F), Scalar::Int64(0xFF))]
#[case(OperationKind::BitXor, Scalar::UInt16(0xFFFF), Scalar::UInt8(0x0F), Scalar::UInt16(0xFFF0))]
#[case(OperationKind::BitAnd, Scalar::Int8(-1), Scalar::UInt32(u32::MAX), Scalar::Int32(-1))]
fn test_bitwise_takes_widest_operand(
    #[case] op: OperationKind,
    #[case] a: Scalar,
    #[case] b: Scalar,
    #[case] expected: Scalar,
) {
    assert_eq!(binary(op, &constant(a), &constant(b)), constant(expected));
}

#[test]
fn test_bit_and_over_dense_rows() {
    let out = binary(
        OperationKind::BitAnd,
        &dense(DenseColumn::UInt32(vec![0b1100, 0b1010, 0])),
        &dense(DenseColumn::UInt32(vec![0b1010, 0b1010, u32::MAX])),
    );
    assert_eq!(out, dense(DenseColumn::UInt32(vec![0b1000, 0b1010, 0])));
}

// ============================================================================
// Shifts
// ============================================================================

#[rstest]
#[case(Scalar::Int32(1), Scalar::Int32(33), Scalar::Int32(2))]
#[case(Scalar::UInt8(1), Scalar::UInt8(9), Scalar::UInt8(2))]
#[case(Scalar::Int32(1), Scalar::Int32(-1), Scalar::Int32(i32::MIN))]
#[case(Scalar::UInt64(1), Scalar::UInt8(63), Scalar::UInt64(1 << 63))]
fn test_shift_left_masks_count(#[case] value: Scalar, #[case] count: Scalar, #[case] expected: Scalar) {
    let out = binary(OperationKind::ShiftLeft, &constant(value), &constant(count));
    assert_eq!(out, constant(expected));
}

#[test]
fn test_shift_right_is_arithmetic_for_signed_results() {
    let out = binary(
        OperationKind::ShiftRight,
        &dense(DenseColumn::Int64(vec![-16, 16, i64::MIN])),
        &constant(Scalar::UInt8(2)),
    );
    assert_eq!(out, dense(DenseColumn::Int64(vec![-4, 4, i64::MIN / 4])));

    let out = binary(
        OperationKind::ShiftRight,
        &constant(Scalar::UInt16(0x8000)),
        &constant(Scalar::UInt16(15)),
    );
    assert_eq!(out, constant(Scalar::UInt16(1)));
}

// ============================================================================
// bitNot
// ============================================================================

#[test]
fn test_bit_not_keeps_kind() {
    let registry = registry();
    let out = registry
        .execute(OperationKind::BitNot, &dense(DenseColumn::UInt16(vec![0, 0xFF00])), None)
        .unwrap();
    assert_eq!(out, dense(DenseColumn::UInt16(vec![0xFFFF, 0x00FF])));

    let out = registry
        .execute(OperationKind::BitNot, &Column::constant(Scalar::Int64(5), 4), None)
        .unwrap();
    assert_eq!(out, Column::constant(Scalar::Int64(-6), 4));
}

#[test]
fn test_bitwise_rejects_non_integers() {
    let registry = registry();
    let err = registry
        .execute(OperationKind::BitNot, &constant(Scalar::Float64(1.0)), None)
        .unwrap_err();
    assert!(err.is_illegal_column());

    let err = registry
        .execute(
            OperationKind::BitXor,
            &constant(Scalar::Int32(1)),
            Some(&constant(Scalar::Float32(1.0))),
        )
        .unwrap_err();
    assert!(err.is_illegal_column());
}
