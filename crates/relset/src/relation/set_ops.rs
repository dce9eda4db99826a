use super::verify::verify;
use super::Operands;
use crate::{stmt, Capability, Error, Relation, Result};

use std::iter;

impl Relation {
    /// `self UNION operands`, duplicates removed.
    pub fn union(
        &self,
        capability: &Capability,
        operands: impl Into<Operands>,
    ) -> Result<Relation> {
        self.set_operation(capability, stmt::SetOp::Union, operands)
    }

    /// `self UNION ALL operands`, duplicates kept.
    pub fn union_all(
        &self,
        capability: &Capability,
        operands: impl Into<Operands>,
    ) -> Result<Relation> {
        self.set_operation(capability, stmt::SetOp::UnionAll, operands)
    }

    /// `self INTERSECT operands`.
    pub fn intersect(
        &self,
        capability: &Capability,
        operands: impl Into<Operands>,
    ) -> Result<Relation> {
        self.set_operation(capability, stmt::SetOp::Intersect, operands)
    }

    /// Combines `self` with `operands` using `op`.
    ///
    /// The operands fold from the left, `((self op a) op b) ...`, and the
    /// result is selected from as a derived table named after this relation's
    /// table. The returned relation is unscoped and carries no ordering, limit
    /// or directives; its bind values are those of `self` followed by those of
    /// each operand in turn.
    ///
    /// Fails without building anything if no operand is given or if any of the
    /// relations declares an includes, preload or eager load directive.
    pub fn set_operation(
        &self,
        capability: &Capability,
        op: stmt::SetOp,
        operands: impl Into<Operands>,
    ) -> Result<Relation> {
        let operands = operands.into().resolve(self)?;

        if operands.is_empty() {
            return Err(Error::invalid_statement(format!(
                "{} requires at least one operand",
                op.name()
            )));
        }

        let relations: Vec<&Relation> = iter::once(self).chain(&operands).collect();
        verify(op, &relations)?;

        let grouping = capability.set_op_grouping;

        tracing::debug!(
            op = op.name(),
            operands = relations.len(),
            grouping,
            "compiling set operation"
        );

        let operand = |relation: &Relation| {
            let query = relation.ast.clone();

            if grouping {
                stmt::ExprSet::grouping(query)
            } else {
                stmt::ExprSet::from(query)
            }
        };

        let body = operands.iter().fold(operand(self), |lhs, rhs| {
            stmt::ExprSet::set_op(op, lhs, operand(rhs))
        });

        let binds = relations
            .iter()
            .flat_map(|relation| relation.bind_values.iter().cloned())
            .collect();

        let derived = stmt::TableDerived::new(body, self.entity.table_name());

        let relation = self.entity.unscoped().from(derived, binds);
        debug_assert_eq!(relation.ast.param_count(), relation.bind_values.len());

        Ok(relation)
    }
}
