use std::fmt;

use super::{ExprSetOp, Node, Query, Select, SetOp, Visit, VisitMut};

#[derive(Clone, PartialEq)]
pub enum ExprSet {
    /// A select query, possibly with a filter.
    Select(Box<Select>),

    /// A set operation (union, intersection, ...) on two queries
    SetOp(ExprSetOp),

    /// A complete query, including its own ordering and limit, used as an
    /// operand of a set operation.
    Query(Box<Query>),

    /// A parenthesized operand of a set operation.
    Grouping(Box<ExprSet>),
}

impl ExprSet {
    /// Combines `lhs` and `rhs` with `op`.
    pub fn set_op(op: SetOp, lhs: impl Into<ExprSet>, rhs: impl Into<ExprSet>) -> ExprSet {
        ExprSet::SetOp(ExprSetOp {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        })
    }

    /// Wraps `query` in parentheses.
    pub fn grouping(query: impl Into<ExprSet>) -> ExprSet {
        ExprSet::Grouping(Box::new(query.into()))
    }

    pub fn is_grouping(&self) -> bool {
        matches!(self, Self::Grouping(_))
    }

    pub fn as_set_op(&self) -> Option<&ExprSetOp> {
        match self {
            Self::SetOp(expr) => Some(expr),
            _ => None,
        }
    }

    #[track_caller]
    pub fn as_set_op_unwrap(&self) -> &ExprSetOp {
        self.as_set_op()
            .unwrap_or_else(|| panic!("expected `SetOp`; actual={self:#?}"))
    }

    pub fn as_grouping(&self) -> Option<&ExprSet> {
        match self {
            Self::Grouping(inner) => Some(inner),
            _ => None,
        }
    }
}

impl fmt::Debug for ExprSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(e) => e.fmt(f),
            Self::SetOp(e) => e.fmt(f),
            Self::Query(e) => e.fmt(f),
            Self::Grouping(e) => f.debug_tuple("Grouping").field(e).finish(),
        }
    }
}

impl From<Query> for ExprSet {
    fn from(value: Query) -> Self {
        Self::Query(Box::new(value))
    }
}

impl From<ExprSetOp> for ExprSet {
    fn from(value: ExprSetOp) -> Self {
        Self::SetOp(value)
    }
}

impl Node for ExprSet {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr_set(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_expr_set_mut(self);
    }
}
