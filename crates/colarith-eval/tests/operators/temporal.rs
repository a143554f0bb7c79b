//! Temporal Arithmetic Tests
//!
//! Tests for: plus and minus over Date and DateTime

use super::{binary, constant, dense, registry};
use colarith_types::{Column, DenseColumn, OperationKind, Scalar};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_date_minus_date_is_day_count() {
    let out = binary(
        OperationKind::Subtract,
        &Column::constant(Scalar::Date(18000), 2),
        &Column::constant(Scalar::Date(17990), 2),
    );
    assert_eq!(out, Column::constant(Scalar::Int32(10), 2));
}

#[test]
fn test_difference_may_be_negative() {
    let out = binary(
        OperationKind::Subtract,
        &dense(DenseColumn::DateTime(vec![1, 100, 0])),
        &dense(DenseColumn::DateTime(vec![3, 40, 0])),
    );
    assert_eq!(out, dense(DenseColumn::Int32(vec![-2, 60, 0])));
}

#[rstest]
#[case(OperationKind::Add, Scalar::Date(18000), Scalar::Int32(5), Scalar::Date(18005))]
#[case(OperationKind::Add, Scalar::Int8(3), Scalar::DateTime(100), Scalar::DateTime(103))]
#[case(OperationKind::Subtract, Scalar::DateTime(100), Scalar::UInt32(40), Scalar::DateTime(60))]
#[case(OperationKind::Subtract, Scalar::Date(10), Scalar::Int16(-5), Scalar::Date(15))]
fn test_offset_keeps_temporal_kind(
    #[case] op: OperationKind,
    #[case] a: Scalar,
    #[case] b: Scalar,
    #[case] expected: Scalar,
) {
    assert_eq!(binary(op, &constant(a), &constant(b)), constant(expected));
}

#[test]
fn test_date_offset_over_dense_rows() {
    let out = binary(
        OperationKind::Add,
        &dense(DenseColumn::Date(vec![0, 1, 18000])),
        &constant(Scalar::UInt8(1)),
    );
    assert_eq!(out, dense(DenseColumn::Date(vec![1, 2, 18001])));
}

#[rstest]
#[case(OperationKind::Subtract, Scalar::Date(1), Scalar::DateTime(1))]
#[case(OperationKind::Add, Scalar::Date(1), Scalar::Date(1))]
#[case(OperationKind::Subtract, Scalar::Int32(1), Scalar::Date(1))]
#[case(OperationKind::Multiply, Scalar::Date(1), Scalar::Int32(2))]
#[case(OperationKind::Add, Scalar::DateTime(1), Scalar::Float64(1.0))]
fn test_unsupported_temporal_combinations(#[case] op: OperationKind, #[case] a: Scalar, #[case] b: Scalar) {
    let err = registry()
        .execute(op, &constant(a), Some(&constant(b)))
        .unwrap_err();
    assert!(err.is_illegal_column(), "{op}({a}, {b}): {err}");
}
