use sqlkind::prelude::*;
use sqlkind::{Error, Statement};

#[test]
fn test_report_query() {
    let sales = Table::new("sales").alias("s");
    let region = sales.column("region", ColumnKind::varchar());
    let amount = sales.column("amount", ColumnKind::decimal(12, 2));

    let revenue = sum(&amount).unwrap();
    assert_eq!(revenue.kind(), ColumnKind::decimal(38, 2));

    let query = select_distinct([Expr::from(&region), revenue.clone()])
        .unwrap()
        .from(&sales)
        .r#where(is_not_null(&region))
        .unwrap()
        .group_by([&region])
        .having(gt(revenue.clone(), 1000).unwrap())
        .unwrap()
        .order_by([desc(revenue)]);

    assert!(query.is_distinct());
    assert_eq!(
        query.projection_kind(),
        Projection::Composite(vec![ColumnKind::varchar(), ColumnKind::decimal(38, 2)])
    );
    assert_eq!(query.grouping().len(), 1);
    assert!(query.having_condition().is_some());

    let stmt = query.into_statement().unwrap();
    assert_eq!(stmt.keyword(), "SELECT");
}

#[test]
fn test_having_requires_boolean() {
    let t = Table::new("t");
    let n = t.column("n", ColumnKind::int());
    let err = select([&n]).unwrap().having(count(&n).unwrap()).unwrap_err();
    assert_eq!(
        err,
        Error::KindMismatch {
            op: "HAVING",
            left: ColumnKind::bigint(),
            right: ColumnKind::Boolean,
        }
    );
}

#[test]
fn test_scalar_subquery_in_projection() {
    let users = Table::new("users");
    let id = users.column("id", ColumnKind::int_unsigned());
    let posts = Table::new("posts");
    let author = posts.column("author", ColumnKind::int_unsigned());

    let post_count = select([count_star()])
        .unwrap()
        .from(&posts)
        .r#where(eq(&author, &id).unwrap())
        .unwrap()
        .as_scalar()
        .unwrap();
    assert_eq!(post_count.kind(), ColumnKind::bigint());

    let busy = gt(post_count.clone(), 10).unwrap();
    assert!(select([Expr::from(&id), post_count]).unwrap().r#where(busy).is_ok());
}

#[test]
fn test_update_and_delete() {
    let accounts = Table::new("accounts");
    let balance = accounts.column("balance", ColumnKind::decimal(18, 4));
    let closed = accounts.column("closed", ColumnKind::Boolean);

    let stmt = update(&accounts)
        .set(&balance, mul(&balance, 1.01f64).unwrap())
        .unwrap()
        .r#where(not(&closed).unwrap())
        .unwrap()
        .into_statement()
        .unwrap();
    assert_eq!(stmt.keyword(), "UPDATE");

    assert!(matches!(
        update(&accounts).set(&closed, 1),
        Err(Error::KindMismatch { op: "SET", .. })
    ));
    assert!(matches!(
        update(&accounts).into_statement(),
        Err(Error::ArityViolation { op: "UPDATE", .. })
    ));

    let purge = delete_from(&accounts)
        .r#where(and([Expr::from(&closed), lt(&balance, 0.01f64).unwrap()]).unwrap())
        .unwrap()
        .into_statement()
        .unwrap();
    match purge {
        Statement::Delete(delete) => {
            assert_eq!(delete.table().name(), "accounts");
            assert!(delete.filter().is_some());
        }
        other => panic!("expected DELETE, got {other:?}"),
    }
    assert!(delete_from(&accounts).r#where(&balance).is_err());
}

#[test]
fn test_insert_select() {
    let archive = Table::new("archive");
    let a_id = archive.column("id", ColumnKind::bigint());
    let a_at = archive.column("at", ColumnKind::DateTime);

    let events = Table::new("events");
    let e_id = events.column("id", ColumnKind::int());
    let e_at = events.column("at", ColumnKind::Date);

    let source = select([&e_id, &e_at]).unwrap().from(&events);
    let stmt = insert_into(&archive, [&a_id, &a_at])
        .unwrap()
        .select(source)
        .unwrap()
        .into_statement()
        .unwrap();
    assert_eq!(stmt.keyword(), "INSERT");

    let rows = insert_into(&archive, [&a_id, &a_at])
        .unwrap()
        .values([Expr::from(1i64), now()])
        .unwrap();
    assert_eq!(rows.columns().len(), 2);
}
