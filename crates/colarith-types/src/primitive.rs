//! Kind markers binding a [`ScalarKind`] to its native representation
//!
//! `Date` and `UInt16` share `u16`, so a native type alone does not name a
//! kind. Kernels are instantiated over these markers instead.

use crate::native::NumericNative;
use crate::{DenseColumn, Scalar, ScalarKind};

/// Static description of one scalar kind
pub trait PrimitiveKind: Send + Sync + 'static {
    type Native: NumericNative;
    const KIND: ScalarKind;

    /// Borrow the values of a dense column of this kind
    fn slice(column: &DenseColumn) -> Option<&[Self::Native]>;

    /// Extract a scalar of this kind
    fn scalar(value: &Scalar) -> Option<Self::Native>;

    fn dense(values: Vec<Self::Native>) -> DenseColumn;

    fn constant(value: Self::Native) -> Scalar;
}

macro_rules! primitive_kind {
    ($(#[$doc:meta])* $marker:ident, $native:ty, $variant:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $marker;

        impl PrimitiveKind for $marker {
            type Native = $native;
            const KIND: ScalarKind = ScalarKind::$variant;

            #[inline]
            fn slice(column: &DenseColumn) -> Option<&[$native]> {
                match column {
                    DenseColumn::$variant(values) => Some(values.as_slice()),
                    _ => None,
                }
            }

            #[inline]
            fn scalar(value: &Scalar) -> Option<$native> {
                match value {
                    Scalar::$variant(v) => Some(*v),
                    _ => None,
                }
            }

            #[inline]
            fn dense(values: Vec<$native>) -> DenseColumn {
                DenseColumn::$variant(values)
            }

            #[inline]
            fn constant(value: $native) -> Scalar {
                Scalar::$variant(value)
            }
        }
    };
}

primitive_kind!(UInt8Type, u8, UInt8);
primitive_kind!(UInt16Type, u16, UInt16);
primitive_kind!(UInt32Type, u32, UInt32);
primitive_kind!(UInt64Type, u64, UInt64);
primitive_kind!(Int8Type, i8, Int8);
primitive_kind!(Int16Type, i16, Int16);
primitive_kind!(Int32Type, i32, Int32);
primitive_kind!(Int64Type, i64, Int64);
primitive_kind!(Float32Type, f32, Float32);
primitive_kind!(Float64Type, f64, Float64);
primitive_kind!(
    /// Day counter
    DateType, u16, Date
);
primitive_kind!(
    /// Seconds counter
    DateTimeType, u32, DateTime
);
