use pretty_assertions::assert_eq;
use relset_core::stmt::{self, Expr, Value};

#[test]
fn values_become_params_in_order() {
    let mut expr = Expr::and(
        Expr::eq(Expr::column("active"), true),
        Expr::gt(Expr::column("age"), 21),
    );
    let mut binds = vec![];

    stmt::bind(&mut expr, &[], &mut binds).unwrap();

    assert_eq!(
        expr,
        Expr::and(
            Expr::eq(Expr::column("active"), Expr::Param),
            Expr::gt(Expr::column("age"), Expr::Param),
        )
    );
    assert_eq!(binds, vec![Value::Bool(true), Value::I32(21)]);
    assert!(expr.is_bound());
}

#[test]
fn args_resolve_by_position() {
    // Arguments are bound in placeholder order, not argument order.
    let mut expr = Expr::and(
        Expr::eq(Expr::column("name"), Expr::arg(1)),
        Expr::eq(Expr::column("id"), Expr::arg(0)),
    );
    let mut binds = vec![Value::from("existing")];

    stmt::bind(&mut expr, &[Value::I64(7), Value::from("alice")], &mut binds).unwrap();

    assert_eq!(
        binds,
        vec![
            Value::from("existing"),
            Value::from("alice"),
            Value::I64(7)
        ]
    );
}

#[test]
fn args_and_values_mix() {
    let mut expr = Expr::or(
        Expr::eq(Expr::column("a"), Expr::arg(0)),
        Expr::in_list(Expr::column("b"), [1, 2]),
    );
    let mut binds = vec![];

    stmt::bind(&mut expr, &[Value::from("x")], &mut binds).unwrap();

    assert_eq!(
        binds,
        vec![Value::from("x"), Value::I32(1), Value::I32(2)]
    );
}

#[test]
fn arg_out_of_range() {
    let mut expr = Expr::eq(Expr::column("id"), Expr::arg(2));
    let mut binds = vec![];

    let err = stmt::bind(&mut expr, &[Value::I64(1)], &mut binds).unwrap_err();

    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: argument position 2 out of range; 1 argument(s) supplied"
    );
    assert!(binds.is_empty());
}

#[test]
fn unused_arg_is_rejected() {
    let mut expr = Expr::eq(Expr::column("id"), Expr::arg(0));
    let mut binds = vec![];

    let err = stmt::bind(&mut expr, &[Value::I64(1), Value::I64(2)], &mut binds).unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid statement: argument 1 is not referenced by the filter"
    );
    assert!(binds.is_empty());
}

#[test]
fn existing_placeholder_is_rejected() {
    let mut expr = Expr::eq(Expr::column("id"), Expr::Param);
    let mut binds = vec![];

    let err = stmt::bind(&mut expr, &[], &mut binds).unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn expressions_without_values_bind_nothing() {
    let mut expr = Expr::is_null(Expr::column("deleted_at"));
    let mut binds = vec![];

    stmt::bind(&mut expr, &[], &mut binds).unwrap();

    assert_eq!(expr, Expr::is_null(Expr::column("deleted_at")));
    assert!(binds.is_empty());
}
