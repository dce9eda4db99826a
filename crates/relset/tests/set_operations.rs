use pretty_assertions::assert_eq;
use relset::stmt::{self, Directive, Expr, ExprSet, Query, SetOp, Value};
use relset::{Capability, Entity, Operands, Relation, Serializer};

fn users() -> Entity {
    Entity::new("users")
}

fn users_where(column: &str, value: impl Into<Value>) -> Relation {
    users()
        .filter(Expr::eq(Expr::column(column), Expr::Value(value.into())))
        .unwrap()
}

fn subquery(relation: &Relation) -> &ExprSet {
    &relation
        .ast()
        .body
        .as_select_unwrap()
        .source
        .as_derived_unwrap()
        .subquery
}

fn placeholder_query(column: &str) -> Query {
    Query::filter("users", Expr::eq(Expr::column(column), Expr::Param))
}

#[test]
fn users_union_active_users() {
    let users = users().all();

    let combined = users
        .union(
            &Capability::POSTGRESQL,
            Expr::eq(Expr::column("active"), true),
        )
        .unwrap();

    let (sql, params) = combined.to_sql(&Serializer::postgresql()).unwrap();

    assert_eq!(
        sql,
        r#"SELECT * FROM ((SELECT * FROM "users") UNION (SELECT * FROM "users" WHERE "active" = $1)) AS "users";"#
    );
    assert_eq!(params, vec![Value::Bool(true)]);
}

#[test]
fn operands_fold_from_the_left() {
    let a = users_where("a", 1);
    let b = users_where("b", 2);
    let c = users_where("c", 3);

    let combined = a
        .union(&Capability::POSTGRESQL, [b.clone(), c.clone()])
        .unwrap();

    let expected = ExprSet::set_op(
        SetOp::Union,
        ExprSet::set_op(
            SetOp::Union,
            ExprSet::grouping(placeholder_query("a")),
            ExprSet::grouping(placeholder_query("b")),
        ),
        ExprSet::grouping(placeholder_query("c")),
    );

    assert_eq!(subquery(&combined), &expected);
    assert_eq!(subquery(&combined).as_set_op_unwrap().operands().len(), 3);
}

#[test]
fn binds_follow_placeholder_order() {
    let base = users()
        .filter(Expr::eq(Expr::column("a"), 1))
        .unwrap();
    let first = users()
        .filter(Expr::and(
            Expr::eq(Expr::column("b"), 2),
            Expr::eq(Expr::column("c"), 3),
        ))
        .unwrap();
    let second = users()
        .filter_with(
            Expr::in_list(Expr::column("d"), [Expr::arg(2), Expr::arg(0), Expr::arg(1)]),
            &[Value::I32(5), Value::I32(6), Value::I32(4)],
        )
        .unwrap();

    let combined = base
        .union_all(&Capability::SQLITE, vec![first, second])
        .unwrap();

    let expected: Vec<Value> = (1..=6).map(Value::I32).collect();
    assert_eq!(combined.bind_values(), &expected[..]);
    assert_eq!(combined.ast().param_count(), 6);

    let (sql, params) = combined.to_sql(&Serializer::sqlite()).unwrap();

    assert_eq!(
        sql,
        concat!(
            r#"SELECT * FROM (SELECT * FROM "users" WHERE "a" = ?1 "#,
            r#"UNION ALL SELECT * FROM "users" WHERE "b" = ?2 AND "c" = ?3 "#,
            r#"UNION ALL SELECT * FROM "users" WHERE "d" IN (?4, ?5, ?6)) AS "users";"#
        )
    );
    assert_eq!(params, expected);
}

#[test]
fn grouping_follows_capability() {
    let a = users_where("a", 1);
    let b = users_where("b", 2);

    let sqlite = a.intersect(&Capability::SQLITE, &b).unwrap();
    let set_op = subquery(&sqlite).as_set_op_unwrap();
    assert_eq!(set_op.op, SetOp::Intersect);
    assert!(set_op.operands().iter().all(|operand| !operand.is_grouping()));
    assert_eq!(&*set_op.lhs, &ExprSet::from(placeholder_query("a")));

    for capability in [&Capability::POSTGRESQL, &Capability::MYSQL] {
        let grouped = a.intersect(capability, &b).unwrap();
        let set_op = subquery(&grouped).as_set_op_unwrap();
        assert!(set_op.operands().iter().all(|operand| operand.is_grouping()));
    }
}

#[test]
fn filter_shorthand_matches_explicit_relation() {
    let entity = users()
        .with_default_scope(Expr::is_null(Expr::column("deleted_at")), &[])
        .unwrap();
    let base = entity.all().filter(Expr::eq(Expr::column("admin"), true)).unwrap();

    let shorthand = base
        .union(
            &Capability::POSTGRESQL,
            Operands::filter_with(
                Expr::eq(Expr::column("team"), Expr::arg(0)),
                vec![Value::from("core")],
            ),
        )
        .unwrap();

    let explicit = base
        .union(
            &Capability::POSTGRESQL,
            entity
                .all()
                .filter_with(Expr::eq(Expr::column("team"), Expr::arg(0)), &[Value::from("core")])
                .unwrap(),
        )
        .unwrap();

    assert_eq!(shorthand.ast(), explicit.ast());
    assert_eq!(shorthand.bind_values(), explicit.bind_values());

    let (sql, _) = shorthand.to_sql(&Serializer::postgresql()).unwrap();
    assert_eq!(
        sql,
        concat!(
            r#"SELECT * FROM ((SELECT * FROM "users" WHERE "deleted_at" IS NULL AND "admin" = $1) "#,
            r#"UNION (SELECT * FROM "users" WHERE "deleted_at" IS NULL AND "team" = $2)) AS "users";"#
        )
    );
}

#[test]
fn filter_shorthand_errors_propagate() {
    let base = users().all();

    let err = base
        .union(
            &Capability::POSTGRESQL,
            Operands::filter_with(Expr::eq(Expr::column("id"), Expr::arg(1)), vec![]),
        )
        .unwrap_err();

    assert!(err.is_invalid_statement());
}

#[test]
fn every_directive_is_rejected() {
    let cases: [(fn(Relation) -> Relation, Directive); 3] = [
        (|r| r.includes("posts"), Directive::Includes),
        (|r| r.preload("posts"), Directive::Preload),
        (|r| r.eager_load("posts.comments"), Directive::EagerLoad),
    ];

    for op in [SetOp::Union, SetOp::UnionAll, SetOp::Intersect] {
        for (declare, directive) in cases {
            let plain = users_where("a", 1);
            let declared = declare(users_where("b", 2));

            // On the operand
            let err = plain
                .set_operation(&Capability::POSTGRESQL, op, &declared)
                .unwrap_err();
            let details = err.as_incompatible_combination().unwrap();
            assert_eq!(details.op(), op);
            assert_eq!(details.directive(), directive);

            // On the base
            let err = declared
                .set_operation(&Capability::POSTGRESQL, op, &plain)
                .unwrap_err();
            assert!(err.is_incompatible_combination());
        }
    }
}

#[test]
fn rejection_message() {
    let base = users().all().includes("posts");

    let err = base
        .union(&Capability::SQLITE, users().all())
        .unwrap_err();
    assert_eq!(err.to_string(), "cannot union relation with includes");

    let err = users()
        .all()
        .union_all(&Capability::SQLITE, users().all().eager_load("posts"))
        .unwrap_err();
    assert_eq!(err.to_string(), "cannot union_all relation with eager load");
}

#[test]
fn first_category_in_check_order_is_reported() {
    let base = users().all().eager_load("posts");
    let operand = users().all().preload("comments");
    let last = users().all().includes("author");

    let err = base
        .intersect(&Capability::MYSQL, vec![operand, last])
        .unwrap_err();

    let details = err.as_incompatible_combination().unwrap();
    assert_eq!(details.directive(), Directive::Includes);
}

#[test]
fn inputs_are_left_untouched() {
    let base = users_where("a", 1).order_by("id", stmt::Direction::Asc);
    let operand = users_where("b", 2).includes("posts");

    let base_before = base.clone();
    let operand_before = operand.clone();

    base.union(&Capability::POSTGRESQL, &operand).unwrap_err();

    assert_eq!(base.ast(), base_before.ast());
    assert_eq!(base.bind_values(), base_before.bind_values());
    assert_eq!(operand.ast(), operand_before.ast());
    assert_eq!(operand.includes_values(), operand_before.includes_values());

    let operand = users_where("b", 2);
    let operand_before = operand.clone();

    base.union(&Capability::POSTGRESQL, &operand).unwrap();

    assert_eq!(base.ast(), base_before.ast());
    assert_eq!(base.bind_values(), base_before.bind_values());
    assert_eq!(operand.ast(), operand_before.ast());
    assert_eq!(operand.bind_values(), operand_before.bind_values());
}

#[test]
fn result_is_unscoped_and_carries_no_directives() {
    let entity = users()
        .with_default_scope(Expr::eq(Expr::column("tenant"), Expr::arg(0)), &[Value::I64(9)])
        .unwrap();
    let base = entity
        .all()
        .order_by("id", stmt::Direction::Desc)
        .limit(5);

    let combined = base
        .union(&Capability::POSTGRESQL, entity.all())
        .unwrap();

    let select = combined.ast().body.as_select_unwrap();
    assert!(select.filter.is_empty());
    assert!(select.returning.is_star());
    assert_eq!(select.source.name().as_str(), "users");
    assert_eq!(combined.ast().order_by, None);
    assert_eq!(combined.ast().limit, None);
    assert!(combined.includes_values().is_empty());
    assert!(combined.preload_values().is_empty());
    assert!(combined.eager_load_values().is_empty());
    assert_eq!(combined.entity().table_name().as_str(), "users");
    assert_eq!(combined.bind_values(), &[Value::I64(9), Value::I64(9)]);
}

#[test]
fn operand_ordering_survives_grouping() {
    let recent = users()
        .all()
        .order_by("created_at", stmt::Direction::Desc)
        .limit(10);
    let admins = users_where("admin", true);

    let combined = recent.union(&Capability::POSTGRESQL, admins).unwrap();
    let (sql, _) = combined.to_sql(&Serializer::postgresql()).unwrap();

    assert_eq!(
        sql,
        concat!(
            r#"SELECT * FROM ((SELECT * FROM "users" ORDER BY "created_at" DESC LIMIT 10) "#,
            r#"UNION (SELECT * FROM "users" WHERE "admin" = $1)) AS "users";"#
        )
    );
}

#[test]
fn results_compose_further() {
    let active = users()
        .all()
        .union(&Capability::POSTGRESQL, Expr::eq(Expr::column("active"), true))
        .unwrap();

    let filtered = active
        .filter(Expr::gt(Expr::column("age"), 30))
        .unwrap()
        .order_by("name", stmt::Direction::Asc);

    let (sql, params) = filtered.to_sql(&Serializer::postgresql()).unwrap();
    assert_eq!(
        sql,
        concat!(
            r#"SELECT * FROM ((SELECT * FROM "users") UNION (SELECT * FROM "users" WHERE "active" = $1)) AS "users" "#,
            r#"WHERE "age" > $2 ORDER BY "name" ASC;"#
        )
    );
    assert_eq!(params, vec![Value::Bool(true), Value::I32(30)]);

    let again = filtered
        .intersect(&Capability::POSTGRESQL, users_where("name", "bob"))
        .unwrap();

    assert_eq!(
        again.bind_values(),
        &[Value::Bool(true), Value::I32(30), Value::from("bob")]
    );
    assert_eq!(again.ast().param_count(), 3);

    let (sql, _) = again.to_sql(&Serializer::postgresql()).unwrap();
    assert!(sql.ends_with(r#"INTERSECT (SELECT * FROM "users" WHERE "name" = $3)) AS "users";"#));
}

#[test]
fn mysql_quotes_the_alias() {
    let combined = users()
        .all()
        .union_all(&Capability::MYSQL, users_where("id", 1))
        .unwrap();

    let (sql, _) = combined.to_sql(&Serializer::mysql()).unwrap();

    assert_eq!(
        sql,
        "SELECT * FROM ((SELECT * FROM `users`) UNION ALL (SELECT * FROM `users` WHERE `id` = ?)) AS `users`;"
    );
}

#[test]
fn empty_operand_list_is_rejected() {
    let err = users()
        .all()
        .union(&Capability::SQLITE, Operands::Relations(vec![]))
        .unwrap_err();

    assert!(err.is_invalid_statement());
    assert_eq!(
        err.to_string(),
        "invalid statement: union requires at least one operand"
    );
}
