use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    /// The expression to negate.
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn not(expr: impl Into<Self>) -> Self {
        ExprNot {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
