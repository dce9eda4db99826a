use crate::{stmt, Relation, Result};

/// The right-hand side of a set operation.
#[derive(Debug, Clone)]
pub enum Operands {
    /// Relations combined in order
    Relations(Vec<Relation>),

    /// Shorthand for a single relation: the base entity's default scope
    /// filtered by `expr`. `Expr::Arg(n)` resolves to `args[n]`.
    Filter {
        expr: stmt::Expr,
        args: Vec<stmt::Value>,
    },
}

impl Operands {
    pub fn filter(expr: impl Into<stmt::Expr>) -> Operands {
        Operands::filter_with(expr, vec![])
    }

    pub fn filter_with(expr: impl Into<stmt::Expr>, args: Vec<stmt::Value>) -> Operands {
        Operands::Filter {
            expr: expr.into(),
            args,
        }
    }

    /// Builds the list of relations these operands stand for.
    pub(super) fn resolve(self, base: &Relation) -> Result<Vec<Relation>> {
        match self {
            Operands::Relations(relations) => Ok(relations),
            Operands::Filter { expr, args } => {
                Ok(vec![base.entity().all().filter_with(expr, &args)?])
            }
        }
    }
}

impl From<Relation> for Operands {
    fn from(value: Relation) -> Self {
        Operands::Relations(vec![value])
    }
}

impl From<&Relation> for Operands {
    fn from(value: &Relation) -> Self {
        Operands::Relations(vec![value.clone()])
    }
}

impl From<Vec<Relation>> for Operands {
    fn from(value: Vec<Relation>) -> Self {
        Operands::Relations(value)
    }
}

impl<const N: usize> From<[Relation; N]> for Operands {
    fn from(value: [Relation; N]) -> Self {
        Operands::Relations(value.into())
    }
}

impl From<&[Relation]> for Operands {
    fn from(value: &[Relation]) -> Self {
        Operands::Relations(value.to_vec())
    }
}

impl From<stmt::Expr> for Operands {
    fn from(value: stmt::Expr) -> Self {
        Operands::filter(value)
    }
}
