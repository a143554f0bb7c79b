//! Kernel registry configuration

use crate::EvalResult;
use crate::fast_path::SUPPORTED_VECTOR_WIDTHS;
use colarith_diagnostics::ArithError;
use serde::{Deserialize, Serialize};

/// Default batch width of the constant-divisor fast path, one 256-bit register
pub const DEFAULT_VECTOR_WIDTH_BYTES: usize = 32;

/// Options fixed when a kernel registry is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Install the constant-divisor fast path for `intDiv` and `modulo`
    pub constant_divisor_fast_path: bool,
    /// Bytes per fast-path batch; one of 16, 32 or 64
    pub vector_width_bytes: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            constant_divisor_fast_path: true,
            vector_width_bytes: DEFAULT_VECTOR_WIDTH_BYTES,
        }
    }
}

impl KernelConfig {
    /// Configuration with the fast path disabled, so every triple runs the
    /// generic kernel
    pub fn generic() -> Self {
        Self {
            constant_divisor_fast_path: false,
            ..Self::default()
        }
    }

    /// Reject settings the registry cannot honour
    pub fn validate(&self) -> EvalResult<()> {
        if !SUPPORTED_VECTOR_WIDTHS.contains(&self.vector_width_bytes) {
            return Err(ArithError::invalid_config(format!(
                "vector width of {} bytes is not supported, expected one of {:?}",
                self.vector_width_bytes, SUPPORTED_VECTOR_WIDTHS
            )));
        }
        Ok(())
    }
}
