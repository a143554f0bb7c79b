//! Structured error codes for arithmetic functions
//!
//! Error code ranges:
//! - ARI0100-ARI0199: Type errors (argument count, promotion)
//! - ARI0200-ARI0299: Execution errors (columns, division faults)
//! - ARI0400-ARI0499: Internal errors (registry, configuration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a type error (0100-0199)
    pub const fn is_type_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an execution error (0200-0299)
    pub const fn is_execution_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is an internal error (0400-0499)
    pub const fn is_internal_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARI{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Type errors (0100-0199)
    map.insert(
        101,
        ErrorInfo::new("Number of arguments doesn't match")
            .with_help("Binary operations take two arguments, unary operations take one"),
    );
    map.insert(
        102,
        ErrorInfo::new("Illegal type of argument")
            .with_help("Check the promotion rules for the operation and operand kinds"),
    );

    // Execution errors (0200-0299)
    map.insert(
        201,
        ErrorInfo::new("Illegal column")
            .with_help("The column kind was not accepted by type resolution for this function"),
    );
    map.insert(202, ErrorInfo::new("Illegal division"));
    map.insert(203, ErrorInfo::new("Column not found in block"));
    map.insert(
        204,
        ErrorInfo::new("Result position out of range")
            .with_help("Write the result to an existing slot or one the block can grow to"),
    );

    // Internal errors (0400-0499)
    map.insert(401, ErrorInfo::new("Kernel registry is incomplete"));
    map.insert(402, ErrorInfo::new("Invalid kernel configuration"));

    map
});

// Type errors
pub const ARI0101: ErrorCode = ErrorCode::new(101);
pub const ARI0102: ErrorCode = ErrorCode::new(102);

// Execution errors
pub const ARI0201: ErrorCode = ErrorCode::new(201);
pub const ARI0202: ErrorCode = ErrorCode::new(202);
pub const ARI0203: ErrorCode = ErrorCode::new(203);
pub const ARI0204: ErrorCode = ErrorCode::new(204);

// Internal errors
pub const ARI0401: ErrorCode = ErrorCode::new(401);
pub const ARI0402: ErrorCode = ErrorCode::new(402);
