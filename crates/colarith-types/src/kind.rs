//! Scalar kinds and arithmetic operation kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed catalog of value kinds a column can hold
///
/// `Date` is a day counter stored in 16 bits, `DateTime` a seconds counter
/// stored in 32 bits. Both are integer-representable but promote under
/// their own rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScalarKind {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Date,
    DateTime,
}

impl ScalarKind {
    /// Every kind, numeric kinds first
    pub const ALL: [ScalarKind; 12] = [
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::Date,
        Self::DateTime,
    ];

    /// Get the kind name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
        }
    }

    /// Check if this kind is a plain (non-temporal) integer
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
                | Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
        )
    }

    /// Check if this kind is floating-point
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Check if this kind is a non-temporal number
    pub const fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Check if this kind is Date or DateTime
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    /// Check if this kind can hold negative values
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::Float32 | Self::Float64
        )
    }

    /// Width of the kind's representation in bits
    pub const fn bits(&self) -> u32 {
        match self {
            Self::UInt8 | Self::Int8 => 8,
            Self::UInt16 | Self::Int16 | Self::Date => 16,
            Self::UInt32 | Self::Int32 | Self::Float32 | Self::DateTime => 32,
            Self::UInt64 | Self::Int64 | Self::Float64 => 64,
        }
    }

    /// Construct an integer kind from signedness and width
    pub const fn integer(signed: bool, bits: u32) -> Option<Self> {
        match (signed, bits) {
            (false, 8) => Some(Self::UInt8),
            (false, 16) => Some(Self::UInt16),
            (false, 32) => Some(Self::UInt32),
            (false, 64) => Some(Self::UInt64),
            (true, 8) => Some(Self::Int8),
            (true, 16) => Some(Self::Int16),
            (true, 32) => Some(Self::Int32),
            (true, 64) => Some(Self::Int64),
            _ => None,
        }
    }

    /// Construct a floating-point kind from width
    pub const fn float(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::Float32),
            64 => Some(Self::Float64),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic and bitwise operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    DivideFloat,
    DivideInt,
    Modulo,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    Negate,
    BitNot,
}

impl OperationKind {
    /// Every operation, binary operations first
    pub const ALL: [OperationKind; 13] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::DivideFloat,
        Self::DivideInt,
        Self::Modulo,
        Self::BitAnd,
        Self::BitOr,
        Self::BitXor,
        Self::ShiftLeft,
        Self::ShiftRight,
        Self::Negate,
        Self::BitNot,
    ];

    /// Stable function name exposed to the engine
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "multiply",
            Self::DivideFloat => "divide",
            Self::DivideInt => "intDiv",
            Self::Modulo => "modulo",
            Self::BitAnd => "bitAnd",
            Self::BitOr => "bitOr",
            Self::BitXor => "bitXor",
            Self::ShiftLeft => "bitShiftLeft",
            Self::ShiftRight => "bitShiftRight",
            Self::Negate => "negate",
            Self::BitNot => "bitNot",
        }
    }

    /// Look up an operation by its function name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Number of arguments the operation takes
    pub const fn arity(&self) -> usize {
        match self {
            Self::Negate | Self::BitNot => 1,
            _ => 2,
        }
    }

    pub const fn is_unary(&self) -> bool {
        self.arity() == 1
    }

    /// Check if this is integer division or modulo
    pub const fn is_integer_division(&self) -> bool {
        matches!(self, Self::DivideInt | Self::Modulo)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
