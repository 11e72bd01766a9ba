//! Error types for model construction
//!
//! The hot `step` path never returns errors; invariants that would poison
//! the arithmetic (a zero capacitance, a zero threshold width) are checked
//! once at construction, and everything past that point degrades
//! numerically instead of failing.

use core::fmt;

#[cfg(feature = "std")]
use std::error::Error as StdError;

/// Result type alias for model operations
pub type Result<T> = core::result::Result<T, ModelError>;

/// Main error type for model construction
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A biophysical parameter was rejected at construction
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The constraint it violated
        reason: &'static str,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter {}: {}", name, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl StdError for ModelError {}

impl ModelError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { name, reason }
    }
}
