//! Column arithmetic type system
//!
//! This crate defines:
//! - Scalar kinds and operation kinds
//! - Native representation traits and kind markers
//! - Scalars and dense/constant columns
//! - Result-kind promotion rules

mod kind;
pub mod native;
pub mod primitive;
pub mod promotion;
mod value;

pub use kind::*;
pub use native::{FloatNative, IntegerNative, NumericNative};
pub use primitive::*;
pub use promotion::{resolve, resolve_binary, resolve_unary};
pub use value::*;
