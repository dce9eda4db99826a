use super::OrderByExpr;

/// `ORDER BY` with one or more sort keys, most significant first.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

impl OrderBy {
    /// Adds a less significant sort key.
    pub fn then(&mut self, expr: OrderByExpr) {
        self.exprs.push(expr);
    }
}

impl From<OrderByExpr> for OrderBy {
    fn from(expr: OrderByExpr) -> Self {
        OrderBy { exprs: vec![expr] }
    }
}

impl From<Vec<OrderByExpr>> for OrderBy {
    fn from(exprs: Vec<OrderByExpr>) -> Self {
        OrderBy { exprs }
    }
}
