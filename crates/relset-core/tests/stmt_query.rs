use pretty_assertions::assert_eq;
use relset_core::{
    path,
    stmt::{Expr, ExprSet, Filter, Path, Query, SetOp, TableDerived},
};

#[test]
fn and_appends_in_order() {
    let mut query = Query::filter("users", Expr::eq(Expr::column("a"), Expr::Param));
    query.and(Expr::eq(Expr::column("b"), Expr::Param));
    query.and(Expr::and(
        Expr::eq(Expr::column("c"), Expr::Param),
        Expr::eq(Expr::column("d"), Expr::Param),
    ));

    let select = query.body.as_select_unwrap();
    let Some(Expr::And(and)) = select.filter.as_expr() else {
        panic!("expected AND; actual={select:#?}");
    };

    let columns: Vec<_> = and
        .operands
        .iter()
        .map(|operand| match operand {
            Expr::BinaryOp(op) => match &*op.lhs {
                Expr::Column(column) => column.name.as_str().to_string(),
                other => panic!("unexpected lhs {other:?}"),
            },
            other => panic!("unexpected operand {other:?}"),
        })
        .collect();

    assert_eq!(columns, ["a", "b", "c", "d"]);
}

#[test]
fn param_count_includes_derived_tables() {
    let lhs = Query::filter("users", Expr::eq(Expr::column("a"), Expr::Param));
    let rhs = Query::filter(
        "users",
        Expr::in_list(Expr::column("b"), [Expr::Param, Expr::Param]),
    );

    let derived = TableDerived::new(ExprSet::set_op(SetOp::Union, lhs, rhs), "users");
    let mut query = Query::filter(derived, Filter::default());
    query.and(Expr::ne(Expr::column("c"), Expr::Param));

    assert_eq!(query.param_count(), 4);
}

#[test]
fn path_macro() {
    assert_eq!(path!(.posts .comments), Path::from("posts.comments"));
    assert_eq!(path!(.posts).to_string(), "posts");
}
