use crate::{stmt, Error, Relation, Result};

/// Checks that `relations` can be combined with `op`.
///
/// Directive categories are checked in [`stmt::Directive::ALL`] order and the
/// first category declared by any relation is reported.
pub(super) fn verify(op: stmt::SetOp, relations: &[&Relation]) -> Result<()> {
    for directive in stmt::Directive::ALL {
        let declared = relations
            .iter()
            .position(|relation| !relation.directive_values(directive).is_empty());

        if let Some(index) = declared {
            tracing::debug!(
                op = op.name(),
                %directive,
                relation = index,
                "rejecting set operation"
            );
            return Err(Error::incompatible_combination(op, directive));
        }
    }

    Ok(())
}
