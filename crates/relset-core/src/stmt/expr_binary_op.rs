use super::{BinaryOp, Expr};

/// `lhs op rhs`, where `op` is a comparison.
///
/// ```text
/// Expr::eq(Expr::column("active"), true)   // "active" = ?
/// Expr::ge(Expr::column("age"), 21)        // "age" >= ?
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        Self::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn gt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn ge(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ge, rhs)
    }

    pub fn lt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Lt, rhs)
    }

    pub fn le(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Le, rhs)
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
