use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The body of the query. Either a `SELECT`, a set operation, or a nested
    /// query acting as a set operand.
    pub body: ExprSet,

    /// ORDER BY
    pub order_by: Option<OrderBy>,

    /// LIMIT
    pub limit: Option<Limit>,
}

impl Query {
    pub fn new(body: impl Into<ExprSet>) -> Self {
        Self {
            body: body.into(),
            order_by: None,
            limit: None,
        }
    }

    /// `SELECT * FROM source WHERE filter`
    pub fn filter(source: impl Into<TableRef>, filter: impl Into<Filter>) -> Self {
        Self::new(Select::new(source, filter))
    }

    /// AND an already bound expression onto the query's filter.
    ///
    /// # Panics
    ///
    /// Panics if the body is not a `SELECT`.
    #[track_caller]
    pub fn and(&mut self, expr: impl Into<Expr>) {
        self.body.as_select_mut_unwrap().add_filter(expr.into());
    }

    /// Returns the number of bound parameter placeholders in the query.
    pub fn param_count(&self) -> usize {
        struct CountParams(usize);

        impl Visit for CountParams {
            fn visit_expr(&mut self, i: &Expr) {
                if i.is_param() {
                    self.0 += 1;
                } else {
                    visit::visit_expr(self, i);
                }
            }
        }

        let mut count = CountParams(0);
        count.visit(self);
        count.0
    }
}

impl Node for Query {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_stmt_query(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_stmt_query_mut(self);
    }
}
