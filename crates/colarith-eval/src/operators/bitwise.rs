//! Bitwise Operators
//!
//! Implements: BitAnd, BitOr, BitXor, BitShiftLeft, BitShiftRight, BitNot
//!
//! Shift counts are widened like any operand and then taken modulo the
//! result width in bits, so a shift never faults.

use super::{IntegerOp, Operation, UnaryIntegerOp};
use colarith_types::{IntegerNative, OperationKind};

macro_rules! bitwise_op {
    ($(#[$doc:meta])* $name:ident, $kind:ident, $method:ident) => {
        $(#[$doc])*
        pub struct $name;

        impl Operation for $name {
            const KIND: OperationKind = OperationKind::$kind;
        }

        impl IntegerOp for $name {
            #[inline]
            fn apply<T: IntegerNative>(a: T, b: T) -> T {
                a.$method(b)
            }
        }
    };
}

bitwise_op!(
    /// `bitAnd`
    BitAnd, BitAnd, bit_and
);
bitwise_op!(
    /// `bitOr`
    BitOr, BitOr, bit_or
);
bitwise_op!(
    /// `bitXor`
    BitXor, BitXor, bit_xor
);
bitwise_op!(
    /// `bitShiftLeft`
    BitShiftLeft, ShiftLeft, shl_wrapping
);
bitwise_op!(
    /// `bitShiftRight`: arithmetic for signed results
    BitShiftRight, ShiftRight, shr_wrapping
);

/// `bitNot`
pub struct BitNot;

impl Operation for BitNot {
    const KIND: OperationKind = OperationKind::BitNot;
}

impl UnaryIntegerOp for BitNot {
    #[inline]
    fn apply<T: IntegerNative>(a: T) -> T {
        a.bit_not()
    }
}
