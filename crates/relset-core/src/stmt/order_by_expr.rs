use super::{Direction, Expr, Ident};

/// A single sort key. Without a direction the database default (ascending)
/// applies.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub order: Option<Direction>,
}

impl OrderByExpr {
    pub fn new(expr: impl Into<Expr>, order: Option<Direction>) -> OrderByExpr {
        OrderByExpr {
            expr: expr.into(),
            order,
        }
    }

    /// Sort by `column` in `direction`.
    pub fn column(column: impl Into<Ident>, direction: Direction) -> OrderByExpr {
        OrderByExpr::new(Expr::column(column), Some(direction))
    }
}
