use super::{Expr, Ident};

/// References a column by name on the source of the enclosing select.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    pub name: Ident,
}

impl Expr {
    pub fn column(name: impl Into<Ident>) -> Self {
        ExprColumn { name: name.into() }.into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
