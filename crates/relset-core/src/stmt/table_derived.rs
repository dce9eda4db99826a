use super::{ExprSet, Ident};

/// A subquery given an alias so it can be selected from like a table.
///
/// ```text
/// (SELECT ... UNION SELECT ...) AS alias
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableDerived {
    /// The subquery
    pub subquery: Box<ExprSet>,

    /// Name the subquery is referenced by
    pub alias: Ident,
}

impl TableDerived {
    pub fn new(subquery: impl Into<ExprSet>, alias: impl Into<Ident>) -> TableDerived {
        TableDerived {
            subquery: Box::new(subquery.into()),
            alias: alias.into(),
        }
    }
}
