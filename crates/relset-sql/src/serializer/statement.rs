use super::{Comma, Formatter, Ident, Params, ToSql};

use relset_core::{stmt, Error};

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let body = &self.body;
        let order_by = self.order_by.as_ref().map(|order_by| (" ", order_by));
        let limit = self.limit.as_ref().map(|limit| (" ", limit));

        fmt!(f, body order_by limit);
    }
}

impl ToSql for &stmt::ExprSet {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::ExprSet::Select(expr) => {
                fmt!(f, &**expr);
            }
            stmt::ExprSet::SetOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            stmt::ExprSet::Query(query) => {
                fmt!(f, &**query);
            }
            stmt::ExprSet::Grouping(inner) => {
                fmt!(f, "(" inner ")");
            }
        }
    }
}

impl ToSql for &stmt::SetOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::SetOp::Union => "UNION",
            stmt::SetOp::UnionAll => "UNION ALL",
            stmt::SetOp::Intersect => "INTERSECT",
        });
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let returning = &self.returning;
        let source = &self.source;
        let filter = self.filter.as_expr().map(|expr| (" WHERE ", expr));

        fmt!(f, "SELECT " returning " FROM " source filter);
    }
}

impl ToSql for &stmt::Returning {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::Returning::Star => fmt!(f, "*"),
            stmt::Returning::Columns(columns) if columns.is_empty() => {
                f.fail(Error::invalid_statement("select has no columns"));
            }
            stmt::Returning::Columns(columns) => fmt!(f, Comma(columns)),
        }
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            stmt::TableRef::Table(name) => fmt!(f, Ident(name.as_str())),
            stmt::TableRef::Derived(table_derived) => fmt!(f, table_derived),
        }
    }
}

impl ToSql for &stmt::TableDerived {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let alias = &self.alias;

        fmt!(f, "(" self.subquery ") AS " alias);
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "ORDER BY " Comma(&self.exprs));
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let order = self.order.as_ref().map(|order| (" ", order));

        fmt!(f, &self.expr order);
    }
}

impl ToSql for &stmt::Direction {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::Direction::Asc => "ASC",
            stmt::Direction::Desc => "DESC",
        });
    }
}

impl ToSql for &stmt::Limit {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let offset = self.offset.map(|offset| (" OFFSET ", offset));

        fmt!(f, "LIMIT " self.limit offset);
    }
}
