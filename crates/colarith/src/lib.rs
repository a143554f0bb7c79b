//! Columnar arithmetic for Rust
//!
//! This crate provides the arithmetic kernel of a columnar query engine:
//! - Result type resolution for every (operation, kind) signature
//! - Elementwise kernels over dense and constant columns
//! - A constant-divisor fast path for `intDiv` and `modulo`
//! - A function catalog executing against caller-owned blocks
//!
//! # Example
//!
//! ```
//! use colarith::{Block, Column, DenseColumn, FunctionRegistry, Scalar, ScalarKind};
//!
//! let functions = FunctionRegistry::new()?;
//! let plus = functions.get("plus").expect("plus is registered");
//! assert_eq!(plus.resolve_type(&[ScalarKind::UInt32, ScalarKind::Int32])?, ScalarKind::Int64);
//!
//! let mut block = Block::from_columns([
//!     Column::from(DenseColumn::UInt32(vec![1, 2, 3])),
//!     Column::constant(Scalar::Int32(-1), 3),
//! ]);
//! plus.execute(&mut block, &[0, 1], 2)?;
//! assert_eq!(block.get(2), Some(&Column::from(DenseColumn::Int64(vec![0, 1, 2]))));
//! # Ok::<(), colarith::ArithError>(())
//! ```

// Re-export all public APIs from internal crates
pub use colarith_diagnostics as diagnostics;
pub use colarith_eval as eval;
pub use colarith_types as types;

// Convenience re-exports
pub use colarith_diagnostics::{ArithError, ErrorCode, Result};
pub use colarith_eval::{ArithmeticFunction, Block, FunctionRegistry, KernelConfig, KernelRegistry};
pub use colarith_types::{Column, DenseColumn, OperationKind, Scalar, ScalarKind};
