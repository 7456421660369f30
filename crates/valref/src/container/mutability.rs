//! Construction-time mutability mode

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValrefError};

/// Mutability mode for value containers.
///
/// Fixed when a container is constructed. Copies inherit it unless taken
/// with [`crate::ValueContainer::copy_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutability {
    /// Declared with `let`: every mutating call fails
    Immutable,

    /// Declared with `var`: mutating calls are allowed
    Mutable,
}

impl Mutability {
    /// Check if this mode allows mutation
    pub fn is_mutable(self) -> bool {
        self == Mutability::Mutable
    }

    /// The declaration keyword this mode corresponds to
    pub fn keyword(self) -> &'static str {
        match self {
            Mutability::Immutable => "let",
            Mutability::Mutable => "var",
        }
    }

    /// Reject `operation` on a `kind` unless this mode is mutable.
    pub(crate) fn check(self, kind: &'static str, operation: &'static str) -> Result<()> {
        if self.is_mutable() {
            return Ok(());
        }
        tracing::debug!(kind, operation, "rejected mutation of immutable value");
        Err(ValrefError::ImmutableViolation { kind, operation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(Mutability::Immutable.keyword(), "let");
        assert_eq!(Mutability::Mutable.keyword(), "var");
    }

    #[test]
    fn test_check_rejects_immutable() {
        let err = Mutability::Immutable.check("set", "insert").unwrap_err();
        assert_eq!(
            err,
            ValrefError::ImmutableViolation {
                kind: "set",
                operation: "insert"
            }
        );
        assert!(Mutability::Mutable.check("set", "insert").is_ok());
    }
}
