use super::Expr;

/// A positional argument placeholder.
///
/// Represents a reference to an argument by position. When the expression is
/// bound to a query, `arg(n)` is replaced with a parameter placeholder and the
/// nth argument is appended to the query's bind values.
///
/// # Examples
///
/// ```text
/// arg(0)  // refers to the first argument
/// arg(1)  // refers to the second argument
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ExprArg {
    /// The zero-based position of the argument.
    pub position: usize,
}

impl Expr {
    pub fn arg(expr_arg: impl Into<ExprArg>) -> Self {
        Self::Arg(expr_arg.into())
    }
}

impl ExprArg {
    pub fn new(position: usize) -> ExprArg {
        ExprArg { position }
    }
}

impl From<usize> for ExprArg {
    fn from(value: usize) -> Self {
        Self { position: value }
    }
}

impl From<ExprArg> for Expr {
    fn from(value: ExprArg) -> Self {
        Self::Arg(value)
    }
}
