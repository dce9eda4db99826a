mod adhoc;
mod incompatible_combination;
mod invalid_statement;

use adhoc::AdhocError;
pub use incompatible_combination::IncompatibleCombination;
use invalid_statement::InvalidStatement;

use std::{fmt, sync::Arc};

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error produced while building or rendering a query.
///
/// `Error` is one pointer wide. Context added with [`Error::context`] forms a
/// chain; the outermost message is displayed first and each cause follows
/// after `": "`.
#[derive(Clone)]
pub struct Error {
    repr: Option<Arc<Repr>>,
}

#[derive(Debug)]
struct Repr {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    IncompatibleCombination(IncompatibleCombination),
    InvalidStatement(InvalidStatement),
    Unknown,
}

impl Error {
    /// Wraps this error in `outer`, which becomes the first message shown.
    pub fn context(self, outer: impl IntoError) -> Error {
        self.wrap(outer.into_error())
    }

    #[cold]
    fn wrap(self, outer: Error) -> Error {
        let kind = match outer.repr.map(Arc::try_unwrap) {
            None => ErrorKind::Unknown,
            Some(Ok(Repr { kind, cause: None })) => kind,
            // Shared or already chained; keep its rendered message
            Some(repr) => {
                let outer = Error {
                    repr: Some(repr.map(Arc::new).unwrap_or_else(|shared| shared)),
                };
                ErrorKind::Adhoc(AdhocError::new(outer.to_string()))
            }
        };

        Error {
            repr: Some(Arc::new(Repr {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    fn kind(&self) -> &ErrorKind {
        match &self.repr {
            Some(repr) => &repr.kind,
            None => &ErrorKind::Unknown,
        }
    }
}

struct Chain<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<&'a Error> {
        let err = self.next?;
        self.next = err.repr.as_deref().and_then(|repr| repr.cause.as_ref());
        Some(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.chain().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            fmt::Display::fmt(err.kind(), f)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_list().entries(self.chain().map(Error::kind)).finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Anyhow(err) => fmt::Display::fmt(err, f),
            ErrorKind::Adhoc(err) => fmt::Display::fmt(err, f),
            ErrorKind::IncompatibleCombination(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidStatement(err) => fmt::Display::fmt(err, f),
            ErrorKind::Unknown => f.write_str("unknown relset error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            repr: Some(Arc::new(Repr { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Conversion into an [`Error`], accepted by [`Error::context`].
pub trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::{Directive, SetOp};

    #[test]
    fn one_word() {
        assert_eq!(std::mem::size_of::<Error>(), std::mem::size_of::<usize>());
    }

    #[test]
    fn err_macro_formats() {
        let position = 3;
        let err = err!("argument {position} missing");
        assert_eq!(err.to_string(), "argument 3 missing");
    }

    #[test]
    fn bail_returns_early() {
        fn fails() -> crate::Result<()> {
            bail!("gave up after {} tries", 2);
        }

        assert_eq!(fails().unwrap_err().to_string(), "gave up after 2 tries");
    }

    #[test]
    fn context_chains_outermost_first() {
        let err = Error::invalid_statement("no operands")
            .context("compiling union")
            .context(err!("users relation"));

        assert_eq!(
            err.to_string(),
            "users relation: compiling union: invalid statement: no operands"
        );
    }

    #[test]
    fn context_from_shared_or_chained_error() {
        let shared = err!("outer");
        let _other = shared.clone();

        let err = err!("root").context(shared);
        assert_eq!(err.to_string(), "outer: root");

        let chained = err!("b").context("a");
        let err = err!("root").context(chained);
        assert_eq!(err.to_string(), "a: b: root");
    }

    #[test]
    fn alternate_debug_lists_the_chain() {
        let err = Error::invalid_statement("x").context("y");
        let debug = format!("{err:#?}");

        assert!(debug.contains("Adhoc"));
        assert!(debug.contains("InvalidStatement"));
        assert_eq!(format!("{err:?}"), err.to_string());
    }

    #[test]
    fn anyhow_errors_convert() {
        let err: Error = anyhow::anyhow!("driver went away").into();

        assert_eq!(err.to_string(), "driver went away");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn incompatible_combination_message() {
        let err = Error::incompatible_combination(SetOp::Union, Directive::Includes);
        assert_eq!(err.to_string(), "cannot union relation with includes");

        let err = Error::incompatible_combination(SetOp::UnionAll, Directive::EagerLoad);
        assert_eq!(err.to_string(), "cannot union_all relation with eager load");

        let err = Error::incompatible_combination(SetOp::Intersect, Directive::Preload);
        assert_eq!(err.to_string(), "cannot intersect relation with preload");
    }

    #[test]
    fn incompatible_combination_details() {
        let err = Error::incompatible_combination(SetOp::Intersect, Directive::Preload);
        assert!(err.is_incompatible_combination());
        assert!(!err.is_invalid_statement());

        let details = err.as_incompatible_combination().unwrap();
        assert_eq!(details.op(), SetOp::Intersect);
        assert_eq!(details.directive(), Directive::Preload);
    }

    #[test]
    fn kind_is_that_of_the_outermost_error() {
        let err = Error::incompatible_combination(SetOp::Union, Directive::Preload)
            .context("users.union()");

        assert!(!err.is_incompatible_combination());
        assert_eq!(
            err.to_string(),
            "users.union(): cannot union relation with preload"
        );
    }

    #[test]
    fn invalid_statement_message() {
        let err = Error::invalid_statement("offset requires a limit");

        assert!(err.is_invalid_statement());
        assert_eq!(err.to_string(), "invalid statement: offset requires a limit");
    }
}
