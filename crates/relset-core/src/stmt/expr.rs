use super::*;

use std::fmt;

#[derive(Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// A positional argument, resolved against the arguments passed alongside
    /// the expression when it is bound to a query.
    Arg(ExprArg),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column of the source being selected from
    Column(ExprColumn),

    /// In list
    InList(ExprInList),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of binary expressions
    Or(ExprOr),

    /// A bound parameter placeholder. The value lives in the bind list of the
    /// query that owns the expression. Placeholders are matched to bind values
    /// by the order in which they appear.
    Param,

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is a constant value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(..))
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg(_))
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param)
    }

    /// Returns true if the expression is a binary operation
    pub fn is_binary_op(&self) -> bool {
        matches!(self, Self::BinaryOp(..))
    }

    /// Returns `true` if the expression contains no values or arguments left
    /// to bind.
    pub fn is_bound(&self) -> bool {
        match self {
            Self::And(expr) => expr.operands.iter().all(Expr::is_bound),
            Self::Or(expr) => expr.operands.iter().all(Expr::is_bound),
            Self::BinaryOp(expr) => expr.lhs.is_bound() && expr.rhs.is_bound(),
            Self::InList(expr) => expr.expr.is_bound() && expr.list.iter().all(Expr::is_bound),
            Self::IsNull(expr) => expr.expr.is_bound(),
            Self::Not(expr) => expr.expr.is_bound(),
            Self::Column(_) | Self::Param => true,
            Self::Arg(_) | Self::Value(_) => false,
        }
    }

    #[track_caller]
    pub fn into_value(self) -> Value {
        match self {
            Self::Value(value) => value,
            _ => panic!("expected `Value`; actual={self:#?}"),
        }
    }
}

impl Node for Expr {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_expr_mut(self);
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(e) => e.fmt(f),
            Self::Arg(e) => e.fmt(f),
            Self::BinaryOp(e) => e.fmt(f),
            Self::Column(e) => e.fmt(f),
            Self::InList(e) => e.fmt(f),
            Self::IsNull(e) => e.fmt(f),
            Self::Not(e) => e.fmt(f),
            Self::Or(e) => e.fmt(f),
            Self::Param => f.write_str("Param"),
            Self::Value(e) => e.fmt(f),
        }
    }
}
