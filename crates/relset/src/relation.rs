mod operands;
pub use operands::Operands;

mod set_ops;

mod verify;

use crate::{stmt, Entity, Error, Result, Serializer};

/// A composable, unexecuted query against an [`Entity`].
///
/// Builder methods consume the relation and return a new one. The AST only
/// ever holds [`stmt::Expr::Param`] placeholders; the values they stand for
/// are kept, in placeholder order, in [`bind_values`](Relation::bind_values).
#[derive(Debug, Clone)]
pub struct Relation {
    entity: Entity,

    ast: stmt::Query,

    bind_values: Vec<stmt::Value>,

    /// Associations to load, strategy left to the query
    includes: Vec<stmt::Path>,

    /// Associations to load with separate queries
    preload: Vec<stmt::Path>,

    /// Associations to load by joining
    eager_load: Vec<stmt::Path>,
}

impl Relation {
    pub(crate) fn new(entity: Entity) -> Relation {
        let ast = stmt::Query::filter(entity.table_name(), stmt::Filter::default());

        Relation {
            entity,
            ast,
            bind_values: vec![],
            includes: vec![],
            preload: vec![],
            eager_load: vec![],
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn ast(&self) -> &stmt::Query {
        &self.ast
    }

    pub fn bind_values(&self) -> &[stmt::Value] {
        &self.bind_values
    }

    pub fn includes_values(&self) -> &[stmt::Path] {
        &self.includes
    }

    pub fn preload_values(&self) -> &[stmt::Path] {
        &self.preload
    }

    pub fn eager_load_values(&self) -> &[stmt::Path] {
        &self.eager_load
    }

    pub(crate) fn directive_values(&self, directive: stmt::Directive) -> &[stmt::Path] {
        match directive {
            stmt::Directive::Includes => &self.includes,
            stmt::Directive::Preload => &self.preload,
            stmt::Directive::EagerLoad => &self.eager_load,
        }
    }

    /// AND `expr` onto the filter, lifting its values into bind parameters.
    pub fn filter(self, expr: impl Into<stmt::Expr>) -> Result<Relation> {
        self.filter_with(expr, &[])
    }

    /// AND `expr` onto the filter. `Expr::Arg(n)` resolves to `args[n]`.
    pub fn filter_with(
        mut self,
        expr: impl Into<stmt::Expr>,
        args: &[stmt::Value],
    ) -> Result<Relation> {
        let mut expr = expr.into();
        stmt::bind(&mut expr, args, &mut self.bind_values)?;
        self.ast.and(expr);
        Ok(self)
    }

    /// AND an expression that is already bound. `binds` holds the values of
    /// its placeholders.
    pub(crate) fn and_bound(&mut self, expr: stmt::Expr, binds: &[stmt::Value]) {
        debug_assert!(expr.is_bound());

        self.ast.and(expr);
        self.bind_values.extend_from_slice(binds);
    }

    /// Restricts the projection to `columns`.
    pub fn select<T>(mut self, columns: impl IntoIterator<Item = T>) -> Relation
    where
        T: Into<stmt::Ident>,
    {
        self.ast.body.as_select_mut_unwrap().returning = stmt::Returning::columns(columns);
        self
    }

    pub fn order_by(
        mut self,
        column: impl Into<stmt::Ident>,
        direction: stmt::Direction,
    ) -> Relation {
        let expr = stmt::OrderByExpr::column(column, direction);

        match &mut self.ast.order_by {
            Some(order_by) => order_by.then(expr),
            None => self.ast.order_by = Some(expr.into()),
        }

        self
    }

    /// Removes any ordering.
    pub fn unorder(mut self) -> Relation {
        self.ast.order_by = None;
        self
    }

    pub fn limit(mut self, limit: u64) -> Relation {
        match &mut self.ast.limit {
            Some(existing) => existing.limit = limit,
            None => self.ast.limit = Some(stmt::Limit::new(limit)),
        }

        self
    }

    /// Skips the first `offset` rows. Requires a limit.
    pub fn offset(mut self, offset: u64) -> Result<Relation> {
        let Some(limit) = &mut self.ast.limit else {
            return Err(Error::invalid_statement("offset requires a limit"));
        };

        limit.offset = Some(offset);
        Ok(self)
    }

    pub fn includes(mut self, path: impl Into<stmt::Path>) -> Relation {
        self.includes.push(path.into());
        self
    }

    pub fn preload(mut self, path: impl Into<stmt::Path>) -> Relation {
        self.preload.push(path.into());
        self
    }

    pub fn eager_load(mut self, path: impl Into<stmt::Path>) -> Relation {
        self.eager_load.push(path.into());
        self
    }

    /// Selects from `derived` instead of the entity's table.
    ///
    /// `binds` are the values of the placeholders inside `derived`. The source
    /// is rendered ahead of the filter, so they are placed before the binds
    /// this relation already holds.
    pub fn from(mut self, derived: stmt::TableDerived, binds: Vec<stmt::Value>) -> Relation {
        self.ast.body.as_select_mut_unwrap().source = derived.into();

        let mut bind_values = binds;
        bind_values.append(&mut self.bind_values);
        self.bind_values = bind_values;
        self
    }

    /// Renders the relation as SQL, along with the parameters to execute it
    /// with.
    pub fn to_sql(&self, serializer: &Serializer) -> Result<(String, Vec<stmt::Value>)> {
        let mut params = vec![];
        let sql = serializer.serialize(&self.ast, &self.bind_values, &mut params)?;
        Ok((sql, params))
    }
}
