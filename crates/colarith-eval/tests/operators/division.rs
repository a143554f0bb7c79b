//! Integer Division Tests
//!
//! Tests for: intDiv, modulo

use super::{binary, constant, dense, registry};
use colarith_types::{Column, DenseColumn, OperationKind, Scalar, ScalarKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn integer_scalar(kind: ScalarKind, value: i8) -> Scalar {
    match kind {
        ScalarKind::UInt8 => Scalar::UInt8(value as u8),
        ScalarKind::UInt16 => Scalar::UInt16(value as u16),
        ScalarKind::UInt32 => Scalar::UInt32(value as u32),
        ScalarKind::UInt64 => Scalar::UInt64(value as u64),
        ScalarKind::Int8 => Scalar::Int8(value),
        ScalarKind::Int16 => Scalar::Int16(i16::from(value)),
        ScalarKind::Int32 => Scalar::Int32(i32::from(value)),
        ScalarKind::Int64 => Scalar::Int64(i64::from(value)),
        other => panic!("{other} is not an integer kind"),
    }
}

fn integer_kinds() -> impl Iterator<Item = ScalarKind> {
    ScalarKind::ALL.into_iter().filter(ScalarKind::is_integer)
}

// ============================================================================
// Zero Divisor
// ============================================================================

#[rstest]
#[case(OperationKind::DivideInt)]
#[case(OperationKind::Modulo)]
fn test_zero_divisor_faults_for_every_kind_and_shape(#[case] op: OperationKind) {
    let registry = registry();
    for left in integer_kinds() {
        for right in integer_kinds() {
            let dividends = Column::from(DenseColumn::repeat(integer_scalar(left, 7), 4));
            let zero = Column::constant(integer_scalar(right, 0), 4);
            let zeros = Column::from(zero.to_dense());
            let seven = Column::constant(integer_scalar(left, 7), 4);

            for (a, b) in [(&dividends, &zero), (&dividends, &zeros), (&seven, &zeros), (&seven, &zero)] {
                let err = registry.execute(op, a, Some(b)).unwrap_err();
                assert!(err.is_division(), "{op}({a}, {b}) over {left}, {right}: {err}");
            }
        }
    }
}

#[test]
fn test_zero_divisor_scenario() {
    let err = registry()
        .execute(
            OperationKind::DivideInt,
            &dense(DenseColumn::Int32(vec![7, -7, 0])),
            Some(&Column::constant(Scalar::Int32(0), 3)),
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "ARI0202: Division by zero");
}

// ============================================================================
// Signed Minimum by Minus One
// ============================================================================

#[rstest]
#[case(Scalar::Int8(i8::MIN), Scalar::Int8(-1))]
#[case(Scalar::Int16(i16::MIN), Scalar::Int64(-1))]
#[case(Scalar::Int32(i32::MIN), Scalar::Int32(-1))]
#[case(Scalar::Int64(i64::MIN), Scalar::Int16(-1))]
fn test_signed_minimum_by_minus_one_faults(#[case] dividend: Scalar, #[case] divisor: Scalar) {
    let registry = registry();
    let shapes = [
        (constant(dividend), constant(divisor)),
        (Column::from(DenseColumn::repeat(dividend, 3)), constant(divisor)),
        (constant(dividend), Column::from(DenseColumn::repeat(divisor, 3))),
    ];
    for (a, b) in &shapes {
        let err = registry.execute(OperationKind::DivideInt, a, Some(b)).unwrap_err();
        assert!(err.to_string().ends_with("Division of minimal signed number by minus one"));
    }
}

#[test]
fn test_signed_minimum_modulo_minus_one_is_zero() {
    let out = binary(
        OperationKind::Modulo,
        &constant(Scalar::Int32(i32::MIN)),
        &constant(Scalar::Int32(-1)),
    );
    assert_eq!(out, constant(Scalar::Int64(0)));
}

#[test]
fn test_unsigned_divisor_reinterpreted_as_minus_one_does_not_fault() {
    // u64::MAX widens to -1 in the Int64 result; the source divisor is not -1
    let out = binary(
        OperationKind::DivideInt,
        &constant(Scalar::Int64(i64::MIN)),
        &constant(Scalar::UInt64(u64::MAX)),
    );
    assert_eq!(out, constant(Scalar::Int64(i64::MIN)));
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn test_int_div_truncates_toward_zero() {
    let out = binary(
        OperationKind::DivideInt,
        &dense(DenseColumn::Int16(vec![7, -7, 7, -7])),
        &dense(DenseColumn::Int16(vec![2, 2, -2, -2])),
    );
    assert_eq!(out, dense(DenseColumn::Int32(vec![3, -3, -3, 3])));
}

#[test]
fn test_modulo_sign_follows_dividend() {
    let out = binary(
        OperationKind::Modulo,
        &dense(DenseColumn::Int16(vec![7, -7, 7, -7])),
        &dense(DenseColumn::Int16(vec![3, 3, -3, -3])),
    );
    assert_eq!(out, dense(DenseColumn::Int32(vec![1, -1, 1, -1])));
}

#[test]
fn test_unsigned_left_keeps_unsigned_result() {
    let out = binary(
        OperationKind::DivideInt,
        &constant(Scalar::UInt8(200)),
        &constant(Scalar::Int8(3)),
    );
    assert_eq!(out, constant(Scalar::UInt16(66)));
}
