//! Scalar values and columns
//!
//! A [`Column`] is either dense (one value per row) or constant (one value
//! broadcast over an explicit row count). Columns are immutable; kernels
//! always allocate a new column for their result.

use crate::ScalarKind;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Apply `$body` to the vector inside any [`DenseColumn`] variant
macro_rules! with_dense {
    ($column:expr, $values:ident => $body:expr) => {
        match $column {
            DenseColumn::UInt8($values) => $body,
            DenseColumn::UInt16($values) => $body,
            DenseColumn::UInt32($values) => $body,
            DenseColumn::UInt64($values) => $body,
            DenseColumn::Int8($values) => $body,
            DenseColumn::Int16($values) => $body,
            DenseColumn::Int32($values) => $body,
            DenseColumn::Int64($values) => $body,
            DenseColumn::Float32($values) => $body,
            DenseColumn::Float64($values) => $body,
            DenseColumn::Date($values) => $body,
            DenseColumn::DateTime($values) => $body,
        }
    };
}

/// A single value of one scalar kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    /// Days since 1970-01-01
    Date(u16),
    /// Seconds since the Unix epoch
    DateTime(u32),
}

impl Scalar {
    /// Get the kind of this value
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::UInt8(_) => ScalarKind::UInt8,
            Self::UInt16(_) => ScalarKind::UInt16,
            Self::UInt32(_) => ScalarKind::UInt32,
            Self::UInt64(_) => ScalarKind::UInt64,
            Self::Int8(_) => ScalarKind::Int8,
            Self::Int16(_) => ScalarKind::Int16,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Date(_) => ScalarKind::Date,
            Self::DateTime(_) => ScalarKind::DateTime,
        }
    }

    /// Build a Date value from a calendar date
    ///
    /// Returns `None` for dates before 1970-01-01 or past the 16-bit day range.
    pub fn date(date: NaiveDate) -> Option<Self> {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
        let days = date.signed_duration_since(epoch).num_days();
        u16::try_from(days).ok().map(Self::Date)
    }

    /// Build a DateTime value from a UTC timestamp
    ///
    /// Returns `None` outside the unsigned 32-bit seconds range.
    pub fn date_time(timestamp: DateTime<Utc>) -> Option<Self> {
        u32::try_from(timestamp.timestamp()).ok().map(Self::DateTime)
    }

    /// Calendar date of a Date value
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(days) => {
                NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_days(chrono::Days::new(u64::from(*days)))
            }
            _ => None,
        }
    }

    /// UTC timestamp of a DateTime value
    pub fn to_date_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(seconds) => DateTime::from_timestamp(i64::from(*seconds), 0),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt8(v) => write!(f, "{v}"),
            Self::UInt16(v) => write!(f, "{v}"),
            Self::UInt32(v) => write!(f, "{v}"),
            Self::UInt64(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Date(v) => match self.to_naive_date() {
                Some(date) => write!(f, "{date}"),
                None => write!(f, "Date({v})"),
            },
            Self::DateTime(v) => match self.to_date_time() {
                Some(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
                None => write!(f, "DateTime({v})"),
            },
        }
    }
}

/// One value per row, all of one scalar kind
#[derive(Debug, Clone, PartialEq)]
pub enum DenseColumn {
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Date(Vec<u16>),
    DateTime(Vec<u32>),
}

impl DenseColumn {
    /// Get the kind of the stored values
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::UInt8(_) => ScalarKind::UInt8,
            Self::UInt16(_) => ScalarKind::UInt16,
            Self::UInt32(_) => ScalarKind::UInt32,
            Self::UInt64(_) => ScalarKind::UInt64,
            Self::Int8(_) => ScalarKind::Int8,
            Self::Int16(_) => ScalarKind::Int16,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Date(_) => ScalarKind::Date,
            Self::DateTime(_) => ScalarKind::DateTime,
        }
    }

    pub fn len(&self) -> usize {
        with_dense!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Repeat one value `len` times
    pub fn repeat(value: Scalar, len: usize) -> Self {
        match value {
            Scalar::UInt8(v) => Self::UInt8(vec![v; len]),
            Scalar::UInt16(v) => Self::UInt16(vec![v; len]),
            Scalar::UInt32(v) => Self::UInt32(vec![v; len]),
            Scalar::UInt64(v) => Self::UInt64(vec![v; len]),
            Scalar::Int8(v) => Self::Int8(vec![v; len]),
            Scalar::Int16(v) => Self::Int16(vec![v; len]),
            Scalar::Int32(v) => Self::Int32(vec![v; len]),
            Scalar::Int64(v) => Self::Int64(vec![v; len]),
            Scalar::Float32(v) => Self::Float32(vec![v; len]),
            Scalar::Float64(v) => Self::Float64(vec![v; len]),
            Scalar::Date(v) => Self::Date(vec![v; len]),
            Scalar::DateTime(v) => Self::DateTime(vec![v; len]),
        }
    }

    /// Get the value at a row
    pub fn value_at(&self, index: usize) -> Option<Scalar> {
        match self {
            Self::UInt8(v) => v.get(index).copied().map(Scalar::UInt8),
            Self::UInt16(v) => v.get(index).copied().map(Scalar::UInt16),
            Self::UInt32(v) => v.get(index).copied().map(Scalar::UInt32),
            Self::UInt64(v) => v.get(index).copied().map(Scalar::UInt64),
            Self::Int8(v) => v.get(index).copied().map(Scalar::Int8),
            Self::Int16(v) => v.get(index).copied().map(Scalar::Int16),
            Self::Int32(v) => v.get(index).copied().map(Scalar::Int32),
            Self::Int64(v) => v.get(index).copied().map(Scalar::Int64),
            Self::Float32(v) => v.get(index).copied().map(Scalar::Float32),
            Self::Float64(v) => v.get(index).copied().map(Scalar::Float64),
            Self::Date(v) => v.get(index).copied().map(Scalar::Date),
            Self::DateTime(v) => v.get(index).copied().map(Scalar::DateTime),
        }
    }
}

/// One materialized operand or result for a batch
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// One value per row
    Dense(DenseColumn),
    /// One value broadcast over `len` rows
    Constant { value: Scalar, len: usize },
}

impl Column {
    pub fn constant(value: Scalar, len: usize) -> Self {
        Self::Constant { value, len }
    }

    /// Get the kind of the column's values
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Dense(dense) => dense.kind(),
            Self::Constant { value, .. } => value.kind(),
        }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        match self {
            Self::Dense(dense) => dense.len(),
            Self::Constant { len, .. } => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant { .. })
    }

    /// Materialize the column as one value per row
    pub fn to_dense(&self) -> DenseColumn {
        match self {
            Self::Dense(dense) => dense.clone(),
            Self::Constant { value, len } => DenseColumn::repeat(*value, *len),
        }
    }

    /// Get the value at a row
    pub fn value_at(&self, index: usize) -> Option<Scalar> {
        match self {
            Self::Dense(dense) => dense.value_at(index),
            Self::Constant { value, len } => (index < *len).then_some(*value),
        }
    }
}

impl From<DenseColumn> for Column {
    fn from(dense: DenseColumn) -> Self {
        Self::Dense(dense)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense(dense) => write!(f, "ColumnVector<{}>", dense.kind()),
            Self::Constant { value, .. } => write!(f, "ColumnConst<{}>", value.kind()),
        }
    }
}
