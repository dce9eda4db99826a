use super::Expr;

/// The `WHERE` clause of a select.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter {
    expr: Option<Expr>,
}

impl Filter {
    pub fn new(expr: impl Into<Expr>) -> Filter {
        Filter {
            expr: Some(expr.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_none()
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        self.expr.as_ref()
    }

    pub fn as_expr_mut(&mut self) -> Option<&mut Expr> {
        self.expr.as_mut()
    }

    /// AND `filter` onto the end of this filter.
    pub fn add_filter(&mut self, filter: impl Into<Filter>) {
        match (self.expr.take(), filter.into().expr) {
            (Some(expr), Some(other)) => {
                self.expr = Some(Expr::and(expr, other));
            }
            (Some(expr), None) => {
                self.expr = Some(expr);
            }
            (_, other) => {
                self.expr = other;
            }
        }
    }
}

impl<T> From<T> for Filter
where
    Expr: From<T>,
{
    fn from(value: T) -> Self {
        Filter {
            expr: Some(value.into()),
        }
    }
}
