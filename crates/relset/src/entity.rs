use crate::{stmt, Relation, Result};

use std::sync::Arc;

/// Describes the table a [`Relation`] selects from.
///
/// Cloning an entity is cheap; every relation built from it shares the same
/// descriptor.
#[derive(Debug, Clone)]
pub struct Entity {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// Canonical table name
    table: stmt::Ident,

    /// Filter applied by [`Entity::all`]
    default_scope: Option<Scope>,
}

/// A filter with its values already lifted into bind parameters.
#[derive(Debug)]
struct Scope {
    expr: stmt::Expr,
    binds: Vec<stmt::Value>,
}

impl Entity {
    pub fn new(table: impl Into<stmt::Ident>) -> Entity {
        Entity {
            inner: Arc::new(Inner {
                table: table.into(),
                default_scope: None,
            }),
        }
    }

    /// Returns a copy of this entity whose [`all`](Entity::all) relation is
    /// filtered by `expr`.
    ///
    /// `Expr::Arg(n)` in `expr` resolves to `args[n]`.
    pub fn with_default_scope(
        &self,
        expr: impl Into<stmt::Expr>,
        args: &[stmt::Value],
    ) -> Result<Entity> {
        let mut expr = expr.into();
        let mut binds = vec![];
        stmt::bind(&mut expr, args, &mut binds)?;

        Ok(Entity {
            inner: Arc::new(Inner {
                table: self.inner.table.clone(),
                default_scope: Some(Scope { expr, binds }),
            }),
        })
    }

    pub fn table_name(&self) -> &stmt::Ident {
        &self.inner.table
    }

    pub fn has_default_scope(&self) -> bool {
        self.inner.default_scope.is_some()
    }

    /// Every row visible through the default scope.
    pub fn all(&self) -> Relation {
        let mut relation = self.unscoped();

        if let Some(scope) = &self.inner.default_scope {
            relation.and_bound(scope.expr.clone(), &scope.binds);
        }

        relation
    }

    /// Every row of the table, ignoring the default scope.
    pub fn unscoped(&self) -> Relation {
        Relation::new(self.clone())
    }

    pub fn filter(&self, expr: impl Into<stmt::Expr>) -> Result<Relation> {
        self.all().filter(expr)
    }

    pub fn filter_with(
        &self,
        expr: impl Into<stmt::Expr>,
        args: &[stmt::Value],
    ) -> Result<Relation> {
        self.all().filter_with(expr, args)
    }
}
