//! Function catalog for the engine boundary
//!
//! An [`ArithmeticFunction`] exposes one operation to the surrounding engine
//! by name: type resolution at plan time, and execution against a [`Block`]
//! of positional column slots at run time.

use crate::EvalResult;
use crate::config::KernelConfig;
use crate::registry::KernelRegistry;
use colarith_diagnostics::ArithError;
use colarith_types::{Column, OperationKind, ScalarKind, promotion};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::sync::Arc;

/// Caller-owned batch of columns addressed by position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    columns: Vec<Option<Column>>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a block whose slots hold `columns` in order
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().map(Some).collect(),
        }
    }

    /// Append a column and return its position
    pub fn push(&mut self, column: Column) -> usize {
        self.columns.push(Some(column));
        self.columns.len() - 1
    }

    pub fn get(&self, position: usize) -> Option<&Column> {
        self.columns.get(position).and_then(Option::as_ref)
    }

    /// Store a column at `position`, growing the block with empty slots
    ///
    /// Returns the previous occupant. Hands `column` back untouched when the
    /// block cannot grow to `position`.
    pub fn insert(&mut self, position: usize, column: Column) -> Result<Option<Column>, Column> {
        if position >= self.columns.len() {
            let Some(len) = position.checked_add(1) else {
                return Err(column);
            };
            if self.columns.try_reserve(len - self.columns.len()).is_err() {
                return Err(column);
            }
            self.columns.resize(len, None);
        }
        Ok(self.columns[position].replace(column))
    }

    /// Remove and return the column at `position`, leaving the slot empty
    pub fn take(&mut self, position: usize) -> Option<Column> {
        self.columns.get_mut(position).and_then(Option::take)
    }

    /// Number of slots, empty or not
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// One arithmetic operation bound to a shared kernel registry
#[derive(Debug, Clone)]
pub struct ArithmeticFunction {
    op: OperationKind,
    kernels: Arc<KernelRegistry>,
}

impl ArithmeticFunction {
    pub fn new(op: OperationKind, kernels: Arc<KernelRegistry>) -> Self {
        Self { op, kernels }
    }

    /// Stable function name, e.g. `intDiv`
    pub fn name(&self) -> &'static str {
        self.op.name()
    }

    pub fn operation(&self) -> OperationKind {
        self.op
    }

    pub fn arity(&self) -> usize {
        self.op.arity()
    }

    /// Resolve the result kind for the given argument kinds
    pub fn resolve_type(&self, arguments: &[ScalarKind]) -> EvalResult<ScalarKind> {
        promotion::resolve(self.op, arguments)
    }

    /// Read the argument columns from `block` and write the result at `result`
    ///
    /// The block is left untouched when the call faults.
    pub fn execute(&self, block: &mut Block, arguments: &[usize], result: usize) -> EvalResult<()> {
        if arguments.len() != self.arity() {
            return Err(ArithError::argument_count(self.name(), arguments.len(), self.arity()));
        }

        let column = {
            let columns = arguments
                .iter()
                .map(|&position| {
                    block
                        .get(position)
                        .ok_or_else(|| ArithError::column_not_found(self.name(), position))
                })
                .collect::<EvalResult<SmallVec<[&Column; 2]>>>()?;

            match columns.as_slice() {
                [operand] => self.kernels.execute_unary(self.op, operand)?,
                [left, right] => self.kernels.execute_binary(self.op, left, right)?,
                _ => return Err(ArithError::argument_count(self.name(), columns.len(), self.arity())),
            }
        };

        block
            .insert(result, column)
            .map_err(|_| ArithError::result_position(self.name(), result))?;
        Ok(())
    }
}

/// Catalog of every arithmetic function, in registration order
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: IndexMap<&'static str, ArithmeticFunction>,
    kernels: Arc<KernelRegistry>,
}

impl FunctionRegistry {
    /// Create a catalog over a default kernel registry
    pub fn new() -> EvalResult<Self> {
        Self::with_config(KernelConfig::default())
    }

    pub fn with_config(config: KernelConfig) -> EvalResult<Self> {
        Ok(Self::with_kernels(Arc::new(KernelRegistry::with_config(config)?)))
    }

    /// Create a catalog sharing an existing kernel registry
    pub fn with_kernels(kernels: Arc<KernelRegistry>) -> Self {
        let functions = OperationKind::ALL
            .into_iter()
            .map(|op| (op.name(), ArithmeticFunction::new(op, Arc::clone(&kernels))))
            .collect();
        Self { functions, kernels }
    }

    /// Look up a function by name
    pub fn get(&self, name: &str) -> Option<&ArithmeticFunction> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Function names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArithmeticFunction> {
        self.functions.values()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn kernels(&self) -> &Arc<KernelRegistry> {
        &self.kernels
    }
}
