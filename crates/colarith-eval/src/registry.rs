//! Kernel registry for arithmetic operations
//!
//! Maps every valid (operation, left kind, right kind) triple, and every
//! valid (operation, operand kind) pair, to its kernel. The registry is built
//! once from the promotion rules: each triple the rules accept is looked up
//! in the kernel tables below, and construction fails if any accepted triple
//! has no kernel or a kernel with a different result kind.

use crate::EvalResult;
use crate::config::KernelConfig;
use crate::fast_path::constant_divisor_kernel;
use crate::kernel::{BinaryKernel, UnaryKernel};
use crate::operators::{
    BitAnd, BitNot, BitOr, BitShiftLeft, BitShiftRight, BitXor, DivideFloating, DivideIntegral, Floating, Integer,
    IntegerOp, Minus, Modulo, Multiply, Negate, Numeric, NumericOp, Plus, UnaryInteger, UnaryNumeric,
};
use colarith_diagnostics::ArithError;
use colarith_types::promotion::{binary_signatures, unary_signatures};
use colarith_types::{
    DateTimeType, DateType, Float32Type, Float64Type, Int8Type, Int16Type, Int32Type, Int64Type, OperationKind,
    ScalarKind, UInt8Type, UInt16Type, UInt32Type, UInt64Type,
};
use std::collections::HashMap;

type BinaryLookup = fn(OperationKind, ScalarKind, ScalarKind, ScalarKind) -> Option<BinaryKernel>;
type UnaryLookup = fn(OperationKind, ScalarKind, ScalarKind) -> Option<UnaryKernel>;

/// Registry of kernels for every valid operation signature
#[derive(Debug, Clone)]
pub struct KernelRegistry {
    config: KernelConfig,
    binary: HashMap<(OperationKind, ScalarKind, ScalarKind), BinaryKernel>,
    unary: HashMap<(OperationKind, ScalarKind), UnaryKernel>,
    fast_path_len: usize,
}

impl KernelRegistry {
    /// Build a registry with the default configuration
    pub fn new() -> EvalResult<Self> {
        Self::with_config(KernelConfig::default())
    }

    /// Build a registry, validating the configuration and the kernel tables
    pub fn with_config(config: KernelConfig) -> EvalResult<Self> {
        Self::populate(config, binary_kernel, unary_kernel)
    }

    pub fn builder() -> KernelRegistryBuilder {
        KernelRegistryBuilder::new()
    }

    fn populate(config: KernelConfig, binary_lookup: BinaryLookup, unary_lookup: UnaryLookup) -> EvalResult<Self> {
        config.validate()?;

        let mut missing = Vec::new();

        let mut binary = HashMap::new();
        for (op, left, right, result) in binary_signatures() {
            let Some(result) = result else { continue };
            match binary_lookup(op, left, right, result) {
                Some(kernel) if kernel.result == result => {
                    binary.insert((op, left, right), kernel);
                }
                _ => missing.push(format!("{op}({left}, {right})")),
            }
        }

        let mut unary = HashMap::new();
        for (op, operand, result) in unary_signatures() {
            let Some(result) = result else { continue };
            match unary_lookup(op, operand, result) {
                Some(kernel) if kernel.result == result => {
                    unary.insert((op, operand), kernel);
                }
                _ => missing.push(format!("{op}({operand})")),
            }
        }

        if !missing.is_empty() {
            return Err(ArithError::IncompleteRegistry { missing });
        }

        let mut fast_path_len = 0;
        if config.constant_divisor_fast_path {
            for (&(op, left, right), kernel) in &mut binary {
                if let Some(fast) = constant_divisor_kernel(op, left, right, config.vector_width_bytes) {
                    kernel.dense_constant = fast;
                    fast_path_len += 1;
                }
            }
        }

        log::debug!(
            "kernel registry built: {} binary, {} unary, {} constant-divisor overrides ({} byte batches)",
            binary.len(),
            unary.len(),
            fast_path_len,
            config.vector_width_bytes
        );

        Ok(Self {
            config,
            binary,
            unary,
            fast_path_len,
        })
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Get the kernel for a binary signature
    pub fn binary(&self, op: OperationKind, left: ScalarKind, right: ScalarKind) -> Option<&BinaryKernel> {
        self.binary.get(&(op, left, right))
    }

    /// Get the kernel for a unary signature
    pub fn unary(&self, op: OperationKind, operand: ScalarKind) -> Option<&UnaryKernel> {
        self.unary.get(&(op, operand))
    }

    /// Number of registered signatures
    pub fn len(&self) -> usize {
        self.binary.len() + self.unary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of binary signatures served by the constant-divisor fast path
    pub fn fast_path_len(&self) -> usize {
        self.fast_path_len
    }
}

/// Builder for [`KernelRegistry`]
#[derive(Debug, Clone, Default)]
pub struct KernelRegistryBuilder {
    config: KernelConfig,
}

impl KernelRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: KernelConfig) -> Self {
        self.config = config;
        self
    }

    /// Enable or disable the constant-divisor fast path
    pub fn fast_path(mut self, enabled: bool) -> Self {
        self.config.constant_divisor_fast_path = enabled;
        self
    }

    /// Set the fast-path batch width in bytes
    pub fn vector_width(mut self, bytes: usize) -> Self {
        self.config.vector_width_bytes = bytes;
        self
    }

    pub fn build(self) -> EvalResult<KernelRegistry> {
        KernelRegistry::with_config(self.config)
    }
}

// =========================================================================
// Kernel Tables
// =========================================================================

/// Bind `$marker` to the kind marker of `$kind` and evaluate `$body`, or
/// yield `None` when `$kind` is not in the listed kinds
macro_rules! with_kind {
    ($kind:expr, $marker:ident => $body:expr, [$($variant:ident: $ty:ident),* $(,)?]) => {
        match $kind {
            $(ScalarKind::$variant => {
                type $marker = $ty;
                $body
            })*
            _ => None,
        }
    };
}

macro_rules! integer_kind {
    ($kind:expr, $marker:ident => $body:expr) => {
        with_kind!($kind, $marker => $body, [
            UInt8: UInt8Type, UInt16: UInt16Type, UInt32: UInt32Type, UInt64: UInt64Type,
            Int8: Int8Type, Int16: Int16Type, Int32: Int32Type, Int64: Int64Type,
        ])
    };
}

/// Integer kinds a widening operation can produce
macro_rules! widened_kind {
    ($kind:expr, $marker:ident => $body:expr) => {
        with_kind!($kind, $marker => $body, [
            UInt16: UInt16Type, UInt32: UInt32Type, UInt64: UInt64Type,
            Int16: Int16Type, Int32: Int32Type, Int64: Int64Type,
        ])
    };
}

macro_rules! float_kind {
    ($kind:expr, $marker:ident => $body:expr) => {
        with_kind!($kind, $marker => $body, [Float32: Float32Type, Float64: Float64Type])
    };
}

macro_rules! numeric_kind {
    ($kind:expr, $marker:ident => $body:expr) => {
        with_kind!($kind, $marker => $body, [
            UInt8: UInt8Type, UInt16: UInt16Type, UInt32: UInt32Type, UInt64: UInt64Type,
            Int8: Int8Type, Int16: Int16Type, Int32: Int32Type, Int64: Int64Type,
            Float32: Float32Type, Float64: Float64Type,
        ])
    };
}

/// Kinds that can hold a negated value
macro_rules! signed_kind {
    ($kind:expr, $marker:ident => $body:expr) => {
        with_kind!($kind, $marker => $body, [
            Int8: Int8Type, Int16: Int16Type, Int32: Int32Type, Int64: Int64Type,
            Float32: Float32Type, Float64: Float64Type,
        ])
    };
}

macro_rules! temporal_kind {
    ($kind:expr, $marker:ident => $body:expr) => {
        with_kind!($kind, $marker => $body, [Date: DateType, DateTime: DateTimeType])
    };
}

fn binary_kernel(op: OperationKind, left: ScalarKind, right: ScalarKind, result: ScalarKind) -> Option<BinaryKernel> {
    match op {
        OperationKind::Add => arithmetic::<Plus>(left, right, result),
        OperationKind::Subtract => arithmetic::<Minus>(left, right, result),
        OperationKind::Multiply => arithmetic::<Multiply>(left, right, result),
        OperationKind::DivideFloat => float_division(left, right, result),
        OperationKind::DivideInt => integer_division::<DivideIntegral>(left, right, result),
        OperationKind::Modulo => integer_division::<Modulo>(left, right, result),
        OperationKind::BitAnd => bitwise::<BitAnd>(left, right, result),
        OperationKind::BitOr => bitwise::<BitOr>(left, right, result),
        OperationKind::BitXor => bitwise::<BitXor>(left, right, result),
        OperationKind::ShiftLeft => bitwise::<BitShiftLeft>(left, right, result),
        OperationKind::ShiftRight => bitwise::<BitShiftRight>(left, right, result),
        OperationKind::Negate | OperationKind::BitNot => None,
    }
}

fn unary_kernel(op: OperationKind, operand: ScalarKind, result: ScalarKind) -> Option<UnaryKernel> {
    match op {
        OperationKind::Negate => numeric_kind!(operand, I => signed_kind!(result, O => {
            Some(UnaryKernel::generic::<I, O, UnaryNumeric<Negate>>())
        })),
        OperationKind::BitNot => integer_kind!(operand, I => Some(UnaryKernel::generic::<I, I, UnaryInteger<BitNot>>())),
        _ => None,
    }
}

fn arithmetic<Op: NumericOp>(left: ScalarKind, right: ScalarKind, result: ScalarKind) -> Option<BinaryKernel> {
    if left.is_temporal() || right.is_temporal() {
        return temporal::<Op>(left, right, result);
    }
    if result.is_float() {
        return numeric_kind!(left, L => numeric_kind!(right, R => float_kind!(result, O => {
            Some(BinaryKernel::generic::<L, R, O, Numeric<Op>>())
        })));
    }
    integer_kind!(left, L => integer_kind!(right, R => widened_kind!(result, O => {
        Some(BinaryKernel::generic::<L, R, O, Numeric<Op>>())
    })))
}

/// Date and DateTime offsets by an integer, and differences of two dates
fn temporal<Op: NumericOp>(left: ScalarKind, right: ScalarKind, result: ScalarKind) -> Option<BinaryKernel> {
    match (left.is_temporal(), right.is_temporal()) {
        (true, true) if left == right && result == ScalarKind::Int32 => temporal_kind!(left, T => {
            Some(BinaryKernel::generic::<T, T, Int32Type, Numeric<Op>>())
        }),
        (true, false) => temporal_kind!(left, L => integer_kind!(right, R => temporal_kind!(result, O => {
            Some(BinaryKernel::generic::<L, R, O, Numeric<Op>>())
        }))),
        (false, true) => integer_kind!(left, L => temporal_kind!(right, R => temporal_kind!(result, O => {
            Some(BinaryKernel::generic::<L, R, O, Numeric<Op>>())
        }))),
        _ => None,
    }
}

fn float_division(left: ScalarKind, right: ScalarKind, result: ScalarKind) -> Option<BinaryKernel> {
    numeric_kind!(left, L => numeric_kind!(right, R => float_kind!(result, O => {
        Some(BinaryKernel::generic::<L, R, O, Floating<DivideFloating>>())
    })))
}

fn integer_division<Op: IntegerOp>(left: ScalarKind, right: ScalarKind, result: ScalarKind) -> Option<BinaryKernel> {
    integer_kind!(left, L => integer_kind!(right, R => widened_kind!(result, O => {
        Some(BinaryKernel::generic::<L, R, O, Integer<Op>>())
    })))
}

fn bitwise<Op: IntegerOp>(left: ScalarKind, right: ScalarKind, result: ScalarKind) -> Option<BinaryKernel> {
    integer_kind!(left, L => integer_kind!(right, R => integer_kind!(result, O => {
        Some(BinaryKernel::generic::<L, R, O, Integer<Op>>())
    })))
}
