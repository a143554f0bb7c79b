//! Arithmetic diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by type
//! resolution and kernel execution: structured error codes and the
//! [`ArithError`] enum.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for arithmetic operations
pub type Result<T> = std::result::Result<T, ArithError>;
