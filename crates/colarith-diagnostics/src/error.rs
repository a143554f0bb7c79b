//! Arithmetic error types

use crate::{ARI0101, ARI0102, ARI0201, ARI0202, ARI0203, ARI0204, ARI0401, ARI0402, ErrorCode};
use thiserror::Error;

/// Main error type for type resolution and kernel execution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithError {
    /// Supplied argument count differs from the operation's arity
    #[error(
        "{code}: Number of arguments for function {function} doesn't match: passed {passed}, should be {expected}",
        code = ARI0101
    )]
    ArgumentCount {
        function: String,
        passed: usize,
        expected: usize,
    },

    /// No promotion exists for the operand kinds
    #[error("{code}: {message}", code = ARI0102)]
    Type { function: String, message: String },

    /// Runtime column kind or representation matched no registered kernel
    #[error("{code}: {message}", code = ARI0201)]
    IllegalColumn { function: String, message: String },

    /// Zero divisor, or signed minimum divided by minus one
    #[error("{code}: {message}", code = ARI0202)]
    Division { function: String, message: String },

    /// Block slot referenced by an argument position holds no column
    #[error("{code}: No column at position {position} for function {function}", code = ARI0203)]
    ColumnNotFound { function: String, position: usize },

    /// Result slot lies beyond what the block can grow to
    #[error("{code}: Result position {position} is out of range for function {function}", code = ARI0204)]
    ResultPosition { function: String, position: usize },

    /// Registry construction found valid operation signatures without kernels
    #[error("{code}: Kernel registry is missing {} kernel(s): {}", .missing.len(), .missing.join(", "), code = ARI0401)]
    IncompleteRegistry { missing: Vec<String> },

    /// Kernel configuration rejected at registry construction
    #[error("{code}: {message}", code = ARI0402)]
    InvalidConfig { message: String },
}

impl ArithError {
    /// Create an argument count error
    pub fn argument_count(function: impl Into<String>, passed: usize, expected: usize) -> Self {
        Self::ArgumentCount {
            function: function.into(),
            passed,
            expected,
        }
    }

    /// Create a type error for a single illegal argument
    pub fn illegal_type(function: impl Into<String>, type_name: impl AsRef<str>, position: &str) -> Self {
        let function = function.into();
        let message = format!(
            "Illegal type {} of {} argument of function {}",
            type_name.as_ref(),
            position,
            function
        );
        Self::Type { function, message }
    }

    /// Create a type error for an illegal pair of arguments
    pub fn illegal_types(function: impl Into<String>, left: impl AsRef<str>, right: impl AsRef<str>) -> Self {
        let function = function.into();
        let message = format!(
            "Illegal types {} and {} of arguments of function {}",
            left.as_ref(),
            right.as_ref(),
            function
        );
        Self::Type { function, message }
    }

    /// Create an illegal column error
    pub fn illegal_column(function: impl Into<String>, column: impl AsRef<str>, position: &str) -> Self {
        let function = function.into();
        let message = format!(
            "Illegal column {} of {} argument of function {}",
            column.as_ref(),
            position,
            function
        );
        Self::IllegalColumn { function, message }
    }

    /// Create an error for dense operands of different lengths
    pub fn column_size_mismatch(function: impl Into<String>, left: usize, right: usize) -> Self {
        let function = function.into();
        let message = format!(
            "Arguments of function {} have different sizes: {} and {}",
            function, left, right
        );
        Self::IllegalColumn { function, message }
    }

    /// Create a division by zero error
    pub fn division_by_zero(function: impl Into<String>) -> Self {
        Self::Division {
            function: function.into(),
            message: "Division by zero".to_string(),
        }
    }

    /// Create an error for the unrepresentable quotient of signed minimum by minus one
    pub fn division_overflow(function: impl Into<String>) -> Self {
        Self::Division {
            function: function.into(),
            message: "Division of minimal signed number by minus one".to_string(),
        }
    }

    /// Create a column not found error
    pub fn column_not_found(function: impl Into<String>, position: usize) -> Self {
        Self::ColumnNotFound {
            function: function.into(),
            position,
        }
    }

    /// Create an error for a result slot the block cannot hold
    pub fn result_position(function: impl Into<String>, position: usize) -> Self {
        Self::ResultPosition {
            function: function.into(),
            position,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ArgumentCount { .. } => ARI0101,
            Self::Type { .. } => ARI0102,
            Self::IllegalColumn { .. } => ARI0201,
            Self::Division { .. } => ARI0202,
            Self::ColumnNotFound { .. } => ARI0203,
            Self::ResultPosition { .. } => ARI0204,
            Self::IncompleteRegistry { .. } => ARI0401,
            Self::InvalidConfig { .. } => ARI0402,
        }
    }

    /// Help text registered for this error's code
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }

    /// Name of the function the error arose in, if it is call-specific
    pub fn function(&self) -> Option<&str> {
        match self {
            Self::ArgumentCount { function, .. }
            | Self::Type { function, .. }
            | Self::IllegalColumn { function, .. }
            | Self::Division { function, .. }
            | Self::ColumnNotFound { function, .. }
            | Self::ResultPosition { function, .. } => Some(function),
            Self::IncompleteRegistry { .. } | Self::InvalidConfig { .. } => None,
        }
    }

    pub fn is_division(&self) -> bool {
        matches!(self, Self::Division { .. })
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::Type { .. })
    }

    pub fn is_argument_count(&self) -> bool {
        matches!(self, Self::ArgumentCount { .. })
    }

    pub fn is_illegal_column(&self) -> bool {
        matches!(self, Self::IllegalColumn { .. })
    }
}
