//! Operand dispatch
//!
//! Matches the runtime kinds and shapes of the operands against the registry
//! and runs the one kernel entry point that applies. The result is dense when
//! any operand is dense, constant when every operand is constant.

use crate::EvalResult;
use crate::registry::KernelRegistry;
use colarith_diagnostics::ArithError;
use colarith_types::{Column, OperationKind, ScalarKind};

impl KernelRegistry {
    /// Apply `op` to one or two operand columns
    ///
    /// `right` must be present exactly when `op` is binary.
    pub fn execute(&self, op: OperationKind, left: &Column, right: Option<&Column>) -> EvalResult<Column> {
        match right {
            Some(right) if !op.is_unary() => self.execute_binary(op, left, right),
            None if op.is_unary() => self.execute_unary(op, left),
            _ => Err(ArithError::argument_count(
                op.name(),
                1 + usize::from(right.is_some()),
                op.arity(),
            )),
        }
    }

    /// Apply a binary operation
    pub fn execute_binary(&self, op: OperationKind, left: &Column, right: &Column) -> EvalResult<Column> {
        if op.is_unary() {
            return Err(ArithError::argument_count(op.name(), 2, op.arity()));
        }
        let Some(kernel) = self.binary(op, left.kind(), right.kind()) else {
            return Err(self.unmatched_operand(op, left, right));
        };

        log::trace!(
            "{op}: {left} x {right} -> {} over {} rows",
            kernel.result,
            if left.is_constant() { right.len() } else { left.len() }
        );

        let result = match (left, right) {
            (Column::Dense(a), Column::Dense(b)) => {
                if a.len() != b.len() {
                    return Err(ArithError::column_size_mismatch(op.name(), a.len(), b.len()));
                }
                Column::Dense((kernel.dense_dense)(a, b)?)
            }
            (Column::Dense(a), Column::Constant { value, .. }) => Column::Dense((kernel.dense_constant)(a, value)?),
            (Column::Constant { value, .. }, Column::Dense(b)) => Column::Dense((kernel.constant_dense)(value, b)?),
            (Column::Constant { value: a, len }, Column::Constant { value: b, .. }) => {
                Column::constant((kernel.constant_constant)(a, b)?, *len)
            }
        };
        Ok(result)
    }

    /// Blame the left operand when no kernel takes its kind, else the right
    fn unmatched_operand(&self, op: OperationKind, left: &Column, right: &Column) -> ArithError {
        let left_accepted = ScalarKind::ALL
            .into_iter()
            .any(|kind| self.binary(op, left.kind(), kind).is_some());
        if left_accepted {
            ArithError::illegal_column(op.name(), right.to_string(), "second")
        } else {
            ArithError::illegal_column(op.name(), left.to_string(), "first")
        }
    }

    /// Apply a unary operation
    pub fn execute_unary(&self, op: OperationKind, operand: &Column) -> EvalResult<Column> {
        if !op.is_unary() {
            return Err(ArithError::argument_count(op.name(), 1, op.arity()));
        }
        let kernel = self
            .unary(op, operand.kind())
            .ok_or_else(|| ArithError::illegal_column(op.name(), operand.to_string(), "first"))?;

        log::trace!("{op}: {operand} -> {} over {} rows", kernel.result, operand.len());

        match operand {
            Column::Dense(a) => Ok(Column::Dense((kernel.dense)(a)?)),
            Column::Constant { value, len } => Ok(Column::constant((kernel.constant)(value)?, *len)),
        }
    }
}
