use super::Error;
use crate::stmt::{Directive, SetOp};

/// Error when queries cannot be merged by a set operation.
///
/// Raised before any statement is built when one of the participating queries
/// asks for associated records to be loaded alongside its rows. Once rows from
/// several queries are merged there is no longer a single query those
/// associations could be resolved against.
#[derive(Debug)]
pub struct IncompatibleCombination {
    op: SetOp,
    directive: Directive,
}

impl IncompatibleCombination {
    /// The set operation that was rejected.
    pub fn op(&self) -> SetOp {
        self.op
    }

    /// The directive category that caused the rejection.
    pub fn directive(&self) -> Directive {
        self.directive
    }
}

impl std::error::Error for IncompatibleCombination {}

impl core::fmt::Display for IncompatibleCombination {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot {} relation with {}",
            self.op.name(),
            self.directive
        )
    }
}

impl Error {
    /// Creates an incompatible combination error.
    pub fn incompatible_combination(op: SetOp, directive: Directive) -> Error {
        Error::from(super::ErrorKind::IncompatibleCombination(
            IncompatibleCombination { op, directive },
        ))
    }

    /// Returns `true` if this error is an incompatible combination error.
    pub fn is_incompatible_combination(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IncompatibleCombination(_))
    }

    /// Returns the details of an incompatible combination error.
    pub fn as_incompatible_combination(&self) -> Option<&IncompatibleCombination> {
        match self.kind() {
            super::ErrorKind::IncompatibleCombination(err) => Some(err),
            _ => None,
        }
    }
}
