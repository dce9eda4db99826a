use super::{Comma, Delimited, Formatter, Params, ToSql};

use relset_core::{stmt, Error};

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Nested), " AND "));
            }
            Arg(expr) => f.fail(Error::invalid_statement(format!(
                "argument {} was never bound to a value",
                expr.position
            ))),
            BinaryOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Column(expr) => {
                fmt!(f, &expr.name);
            }
            InList(expr) if expr.list.is_empty() => {
                f.fail(Error::invalid_statement("IN list has no items"));
            }
            InList(expr) => {
                fmt!(f, expr.expr " IN (" Comma(&expr.list) ")");
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            Not(expr) => {
                fmt!(f, "NOT (" expr.expr ")");
            }
            Or(expr) => {
                fmt!(f, Delimited(&expr.operands, " OR "));
            }
            Param => {
                let binds = f.binds;

                let Some(value) = binds.get(f.next_bind) else {
                    f.fail(Error::invalid_statement(format!(
                        "query has more placeholders than bind values ({})",
                        binds.len()
                    )));
                    return;
                };

                f.next_bind += 1;
                let placeholder = f.params.push(value);
                placeholder.to_sql(f);
            }
            Value(value) => f.fail(Error::invalid_statement(format!(
                "value {value} must be passed as a bind parameter"
            ))),
        }
    }
}

/// An `AND` operand. `OR` binds looser than `AND`, so it is parenthesized.
struct Nested<'a>(&'a stmt::Expr);

impl ToSql for Nested<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.0 {
            stmt::Expr::Or(_) => fmt!(f, "(" self.0 ")"),
            expr => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Ne => "<>",
        })
    }
}
