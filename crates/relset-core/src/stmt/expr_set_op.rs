use super::{ExprSet, SetOp};

/// A set operation combining two queries.
///
/// Applies a set operator (union, union all, intersect) to combine the results
/// of two queries into a single result set. Longer chains nest on the left:
///
/// ```text
/// (A UNION B) UNION C
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprSetOp {
    /// The set operation to apply.
    pub op: SetOp,

    /// The left-hand query.
    pub lhs: Box<ExprSet>,

    /// The right-hand query.
    pub rhs: Box<ExprSet>,
}

impl ExprSetOp {
    /// Returns the operands of this set operation and of every set operation
    /// nested on its left, in left-to-right order.
    pub fn operands(&self) -> Vec<&ExprSet> {
        let mut operands = vec![&*self.rhs];
        let mut lhs = &*self.lhs;

        while let ExprSet::SetOp(expr) = lhs {
            if expr.op != self.op {
                break;
            }
            operands.push(&*expr.rhs);
            lhs = &*expr.lhs;
        }

        operands.push(lhs);
        operands.reverse();
        operands
    }
}
