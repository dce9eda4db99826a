#![allow(unused_variables)]

use super::{
    Expr, ExprAnd, ExprArg, ExprBinaryOp, ExprColumn, ExprInList, ExprIsNull, ExprNot, ExprOr,
    ExprSet, ExprSetOp, Filter, Node, OrderBy, OrderByExpr, Query, Select, TableDerived, TableRef,
    Value,
};

pub trait Visit {
    fn visit<N: Node>(&mut self, i: &N)
    where
        Self: Sized,
    {
        i.visit(self);
    }

    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_and(&mut self, i: &ExprAnd) {
        visit_expr_and(self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        visit_expr_arg(self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        visit_expr_binary_op(self, i);
    }

    fn visit_expr_column(&mut self, i: &ExprColumn) {
        visit_expr_column(self, i);
    }

    fn visit_expr_in_list(&mut self, i: &ExprInList) {
        visit_expr_in_list(self, i);
    }

    fn visit_expr_is_null(&mut self, i: &ExprIsNull) {
        visit_expr_is_null(self, i);
    }

    fn visit_expr_not(&mut self, i: &ExprNot) {
        visit_expr_not(self, i);
    }

    fn visit_expr_or(&mut self, i: &ExprOr) {
        visit_expr_or(self, i);
    }

    fn visit_expr_set(&mut self, i: &ExprSet) {
        visit_expr_set(self, i);
    }

    fn visit_expr_set_op(&mut self, i: &ExprSetOp) {
        visit_expr_set_op(self, i);
    }

    fn visit_filter(&mut self, i: &Filter) {
        visit_filter(self, i);
    }

    fn visit_order_by(&mut self, i: &OrderBy) {
        visit_order_by(self, i);
    }

    fn visit_order_by_expr(&mut self, i: &OrderByExpr) {
        visit_order_by_expr(self, i);
    }

    fn visit_stmt_query(&mut self, i: &Query) {
        visit_stmt_query(self, i);
    }

    fn visit_stmt_select(&mut self, i: &Select) {
        visit_stmt_select(self, i);
    }

    fn visit_table_derived(&mut self, i: &TableDerived) {
        visit_table_derived(self, i);
    }

    fn visit_table_ref(&mut self, i: &TableRef) {
        visit_table_ref(self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        visit_value(self, i);
    }
}

impl<V: Visit> Visit for &mut V {
    fn visit_expr(&mut self, i: &Expr) {
        Visit::visit_expr(&mut **self, i);
    }

    fn visit_expr_and(&mut self, i: &ExprAnd) {
        Visit::visit_expr_and(&mut **self, i);
    }

    fn visit_expr_arg(&mut self, i: &ExprArg) {
        Visit::visit_expr_arg(&mut **self, i);
    }

    fn visit_expr_binary_op(&mut self, i: &ExprBinaryOp) {
        Visit::visit_expr_binary_op(&mut **self, i);
    }

    fn visit_expr_column(&mut self, i: &ExprColumn) {
        Visit::visit_expr_column(&mut **self, i);
    }

    fn visit_expr_in_list(&mut self, i: &ExprInList) {
        Visit::visit_expr_in_list(&mut **self, i);
    }

    fn visit_expr_is_null(&mut self, i: &ExprIsNull) {
        Visit::visit_expr_is_null(&mut **self, i);
    }

    fn visit_expr_not(&mut self, i: &ExprNot) {
        Visit::visit_expr_not(&mut **self, i);
    }

    fn visit_expr_or(&mut self, i: &ExprOr) {
        Visit::visit_expr_or(&mut **self, i);
    }

    fn visit_expr_set(&mut self, i: &ExprSet) {
        Visit::visit_expr_set(&mut **self, i);
    }

    fn visit_expr_set_op(&mut self, i: &ExprSetOp) {
        Visit::visit_expr_set_op(&mut **self, i);
    }

    fn visit_filter(&mut self, i: &Filter) {
        Visit::visit_filter(&mut **self, i);
    }

    fn visit_order_by(&mut self, i: &OrderBy) {
        Visit::visit_order_by(&mut **self, i);
    }

    fn visit_order_by_expr(&mut self, i: &OrderByExpr) {
        Visit::visit_order_by_expr(&mut **self, i);
    }

    fn visit_stmt_query(&mut self, i: &Query) {
        Visit::visit_stmt_query(&mut **self, i);
    }

    fn visit_stmt_select(&mut self, i: &Select) {
        Visit::visit_stmt_select(&mut **self, i);
    }

    fn visit_table_derived(&mut self, i: &TableDerived) {
        Visit::visit_table_derived(&mut **self, i);
    }

    fn visit_table_ref(&mut self, i: &TableRef) {
        Visit::visit_table_ref(&mut **self, i);
    }

    fn visit_value(&mut self, i: &Value) {
        Visit::visit_value(&mut **self, i);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::And(expr) => v.visit_expr_and(expr),
        Expr::Arg(expr) => v.visit_expr_arg(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Column(expr) => v.visit_expr_column(expr),
        Expr::InList(expr) => v.visit_expr_in_list(expr),
        Expr::IsNull(expr) => v.visit_expr_is_null(expr),
        Expr::Not(expr) => v.visit_expr_not(expr),
        Expr::Or(expr) => v.visit_expr_or(expr),
        Expr::Param => {}
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_and<V>(v: &mut V, node: &ExprAnd)
where
    V: Visit + ?Sized,
{
    for expr in &node.operands {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_arg<V>(v: &mut V, node: &ExprArg)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_binary_op<V>(v: &mut V, node: &ExprBinaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_column<V>(v: &mut V, node: &ExprColumn)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_in_list<V>(v: &mut V, node: &ExprInList)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);

    for expr in &node.list {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_is_null<V>(v: &mut V, node: &ExprIsNull)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_not<V>(v: &mut V, node: &ExprNot)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_expr_or<V>(v: &mut V, node: &ExprOr)
where
    V: Visit + ?Sized,
{
    for expr in &node.operands {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_set<V>(v: &mut V, node: &ExprSet)
where
    V: Visit + ?Sized,
{
    match node {
        ExprSet::Select(expr) => v.visit_stmt_select(expr),
        ExprSet::SetOp(expr) => v.visit_expr_set_op(expr),
        ExprSet::Query(expr) => v.visit_stmt_query(expr),
        ExprSet::Grouping(expr) => v.visit_expr_set(expr),
    }
}

pub fn visit_expr_set_op<V>(v: &mut V, node: &ExprSetOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr_set(&node.lhs);
    v.visit_expr_set(&node.rhs);
}

pub fn visit_filter<V>(v: &mut V, node: &Filter)
where
    V: Visit + ?Sized,
{
    if let Some(expr) = node.as_expr() {
        v.visit_expr(expr);
    }
}

pub fn visit_order_by<V>(v: &mut V, node: &OrderBy)
where
    V: Visit + ?Sized,
{
    for expr in &node.exprs {
        v.visit_order_by_expr(expr);
    }
}

pub fn visit_order_by_expr<V>(v: &mut V, node: &OrderByExpr)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_stmt_query<V>(v: &mut V, node: &Query)
where
    V: Visit + ?Sized,
{
    v.visit_expr_set(&node.body);

    if let Some(order_by) = &node.order_by {
        v.visit_order_by(order_by);
    }
}

pub fn visit_stmt_select<V>(v: &mut V, node: &Select)
where
    V: Visit + ?Sized,
{
    v.visit_table_ref(&node.source);
    v.visit_filter(&node.filter);
}

pub fn visit_table_derived<V>(v: &mut V, node: &TableDerived)
where
    V: Visit + ?Sized,
{
    v.visit_expr_set(&node.subquery);
}

pub fn visit_table_ref<V>(v: &mut V, node: &TableRef)
where
    V: Visit + ?Sized,
{
    match node {
        TableRef::Table(_) => {}
        TableRef::Derived(table_derived) => v.visit_table_derived(table_derived),
    }
}

pub fn visit_value<V>(v: &mut V, node: &Value)
where
    V: Visit + ?Sized,
{
}
