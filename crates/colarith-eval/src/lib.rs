//! Columnar Arithmetic Evaluation
//!
//! This crate executes arithmetic and bitwise operations over dense and
//! constant columns:
//!
//! - **Operators**: `plus`, `minus`, `multiply`, `divide`, `intDiv`, `modulo`,
//!   `negate`, `bitAnd`, `bitOr`, `bitXor`, `bitNot`, `bitShiftLeft`,
//!   `bitShiftRight`
//! - **Kernels**: one generic kernel per valid (operation, left, right) kind
//!   triple, with entry points for all four operand shape pairs
//! - **Fast path**: reciprocal-multiplication `intDiv`/`modulo` for a dense
//!   dividend and a constant divisor
//!
//! # Example
//!
//! ```
//! use colarith_eval::{Block, FunctionRegistry};
//! use colarith_types::{Column, DenseColumn, Scalar};
//!
//! let functions = FunctionRegistry::new().unwrap();
//! let mut block = Block::from_columns([
//!     Column::from(DenseColumn::UInt32(vec![1, 2, 3])),
//!     Column::constant(Scalar::Int32(-1), 3),
//! ]);
//!
//! functions.get("plus").unwrap().execute(&mut block, &[0, 1], 2).unwrap();
//! assert_eq!(block.get(2), Some(&Column::from(DenseColumn::Int64(vec![0, 1, 2]))));
//! ```
//!
//! # Architecture
//!
//! - `KernelRegistry`: built once, checks that every signature the promotion
//!   rules accept has a kernel
//! - `dispatch`: picks the kernel entry point for the operands' kinds and shapes
//! - `FunctionRegistry`: the name-addressed catalog the engine talks to

pub mod config;
mod dispatch;
pub mod fast_path;
pub mod function;
pub mod kernel;
pub mod operators;
pub mod registry;

pub use colarith_diagnostics::Result as EvalResult;
pub use config::KernelConfig;
pub use function::{ArithmeticFunction, Block, FunctionRegistry};
pub use kernel::{BinaryKernel, UnaryKernel};
pub use registry::{KernelRegistry, KernelRegistryBuilder};
