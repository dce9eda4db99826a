use super::{Error, ErrorKind};

use std::fmt;

/// A statement that cannot be built or rendered as requested.
///
/// Raised when:
/// - a filter references a positional argument that was not supplied, or
///   leaves a supplied argument unused
/// - a filter already contains bound parameter placeholders
/// - a set operation is given no operands
/// - placeholders and bind values do not line up at serialization
#[derive(Debug)]
pub(super) struct InvalidStatement {
    message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        let message = message.into().into_boxed_str();
        Error::from(ErrorKind::InvalidStatement(InvalidStatement { message }))
    }

    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidStatement(_))
    }
}
