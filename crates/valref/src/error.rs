//! Error types for container operations

use thiserror::Error;

/// Main error type for valref operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValrefError {
    /// Mutation attempted on a container constructed as immutable
    #[error("Immutable violation: cannot {operation} on an immutable {kind}")]
    ImmutableViolation {
        /// The container kind ("container", "dictionary", "set")
        kind: &'static str,
        /// The rejected operation ("append", "insert", ...)
        operation: &'static str,
    },

    /// Read with an index outside `[0, count)`
    #[error("Index out of range: index {index}, count {count}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The container's element count at the time of the read
        count: usize,
    },
}

impl ValrefError {
    /// Check if this is an immutable violation
    pub fn is_immutable_violation(&self) -> bool {
        matches!(self, ValrefError::ImmutableViolation { .. })
    }

    /// Check if this is an out-of-range read
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, ValrefError::IndexOutOfRange { .. })
    }
}

/// Result type alias for valref operations
pub type Result<T> = std::result::Result<T, ValrefError>;
