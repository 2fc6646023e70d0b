use rust_decimal::Decimal;
use sqlkind_core::prelude::*;

fn col(name: &str, kind: ColumnKind) -> Column {
    Table::new("t").column(name, kind)
}

#[test]
fn test_signed_unsigned_tie_break() {
    let a = col("a", ColumnKind::int());
    let b = col("b", ColumnKind::int_unsigned());
    let c = col("c", ColumnKind::bigint_unsigned());

    assert_eq!(add(&a, &b).unwrap().kind(), ColumnKind::bigint());
    assert_eq!(add(&a, &c).unwrap().kind(), ColumnKind::decimal(20, 0));
    assert_eq!(add(&b, &c).unwrap().kind(), ColumnKind::bigint_unsigned());
    assert_eq!(sub(&b, 1u8).unwrap().kind(), ColumnKind::int_unsigned());
}

#[test]
fn test_determinism() {
    let a = col("a", ColumnKind::smallint());
    let b = col("b", ColumnKind::float_unsigned());
    let first = mul(&a, &b).unwrap();
    let second = mul(&a, &b).unwrap();
    assert_eq!(first.kind(), second.kind());
    assert_eq!(first, second);
}

#[test]
fn test_domain_closure() {
    let n = col("n", ColumnKind::tinyint());
    let s = col("s", ColumnKind::varchar());
    let d = col("d", ColumnKind::Date);

    assert!(add(&n, 2.5f64).unwrap().kind().is_numeric());
    assert!(concat([&s, &s]).unwrap().kind().is_textual());
    assert!(
        add(&d, chrono::TimeDelta::days(1))
            .unwrap()
            .kind()
            .is_temporal()
    );
    assert!(eq(&s, &s).unwrap().kind().is_boolean());

    assert!(matches!(add(&n, &s), Err(Error::KindMismatch { .. })));
    assert!(matches!(sqrt(&s), Err(Error::UnsupportedOperand { .. })));
    assert!(matches!(upper(&n), Err(Error::UnsupportedOperand { .. })));
}

#[test]
fn test_decimal_sum_keeps_integer_digits() {
    let wide = col("wide", ColumnKind::decimal(10, 2));
    let fine = col("fine", ColumnKind::decimal(8, 4));

    let total = add(&wide, &fine).unwrap().kind();
    assert_eq!(total, ColumnKind::decimal(12, 4));
    let ColumnKind::Decimal {
        precision, scale, ..
    } = total
    else {
        panic!("expected DECIMAL, got {total}");
    };
    assert!(precision - scale >= 8);
}

#[test]
fn test_widening_is_monotone() {
    let ladder = [
        ColumnKind::tinyint(),
        ColumnKind::smallint(),
        ColumnKind::int(),
        ColumnKind::bigint(),
    ];
    for (i, left) in ladder.iter().enumerate() {
        for right in &ladder[i..] {
            let sum = add(Expr::null(*left), Expr::null(*right)).unwrap();
            assert_eq!(sum.kind(), *right);
        }
    }
}

#[test]
fn test_non_aliasing() {
    let price = col("price", ColumnKind::decimal(8, 2));
    let base = mul(&price, 2).unwrap();
    let snapshot = base.clone();

    let bigger = add(base.clone(), 1).unwrap();
    let smaller = sub(base.clone(), 1).unwrap();

    assert_eq!(base, snapshot);
    assert_ne!(bigger, smaller);
    assert_eq!(bigger.node().unwrap().operands()[0], &snapshot);
    assert_eq!(smaller.node().unwrap().operands()[0], &snapshot);
}

#[test]
fn test_logical_arity() {
    let flag = col("flag", ColumnKind::Boolean);
    let none: [Expr; 0] = [];

    assert_eq!(
        and(none),
        Err(Error::ArityViolation {
            op: "AND",
            expected: 2,
            found: 0
        })
    );
    assert!(matches!(
        and([&flag]),
        Err(Error::ArityViolation { found: 1, .. })
    ));
    assert!(and([&flag, &flag]).is_ok());
    assert_eq!(
        or([&flag, &flag, &flag]).unwrap().node().unwrap().operands().len(),
        3
    );

    let n = col("n", ColumnKind::int());
    assert!(matches!(
        and([Expr::from(&flag), Expr::from(&n)]),
        Err(Error::UnsupportedOperand { op: "AND", .. })
    ));
}

#[test]
fn test_operator_traits() {
    let a = col("a", ColumnKind::int());
    let b = col("b", ColumnKind::int_unsigned());

    let sum = (Expr::from(&a) + &b).unwrap();
    assert_eq!(sum.kind(), ColumnKind::bigint());
    assert_eq!(sum.node().map(Node::tag), Some("+"));

    let negated = (-Expr::from(&b)).unwrap();
    assert_eq!(negated.kind(), ColumnKind::bigint());

    let both = (gt(&a, 1).unwrap() & lt(&a, 9).unwrap()).unwrap();
    assert_eq!(both.node().map(Node::tag), Some("AND"));
}

#[test]
fn test_math_and_aggregate_kinds() {
    let small = col("small", ColumnKind::smallint());
    let big = col("big", ColumnKind::bigint());
    let money = col("money", ColumnKind::decimal(12, 3));

    assert_eq!(sqrt(&small).unwrap().kind(), ColumnKind::float());
    assert_eq!(ln(&big).unwrap().kind(), ColumnKind::double());
    assert_eq!(floor(&money).unwrap().kind(), ColumnKind::decimal(12, 3));
    assert_eq!(round(&money).unwrap().kind(), ColumnKind::decimal(12, 0));
    assert_eq!(
        round_to(&money, 1).unwrap().kind(),
        ColumnKind::decimal(12, 1)
    );
    assert_eq!(pow(&small, 2).unwrap().kind(), ColumnKind::double());

    let level = col("level", ColumnKind::smallint_unsigned());
    assert_eq!(abs(&level).unwrap().kind(), ColumnKind::float_unsigned());
    assert_eq!(sign(&level).unwrap().kind(), ColumnKind::float());
    assert_eq!(abs(&money).unwrap().kind(), ColumnKind::decimal(12, 3));

    let narrow = col("narrow", ColumnKind::decimal(5, 2));
    assert_eq!(
        round_to(&narrow, 4).unwrap().kind(),
        ColumnKind::decimal(7, 4),
        "123.45 still fits after ROUND(x, 4)"
    );

    assert_eq!(count(&money).unwrap().kind(), ColumnKind::bigint());
    assert_eq!(count_star().kind(), ColumnKind::bigint());
    assert_eq!(sum(&small).unwrap().kind(), ColumnKind::bigint());
    assert_eq!(sum(&big).unwrap().kind(), ColumnKind::decimal(38, 0));
    assert_eq!(avg(&big).unwrap().kind(), ColumnKind::double());
    assert_eq!(avg(&money).unwrap().kind(), ColumnKind::decimal(38, 4));
    assert_eq!(max(&money).unwrap().kind(), ColumnKind::decimal(12, 3));
    assert!(sum(col("s", ColumnKind::varchar())).is_err());
}

#[test]
fn test_predicates() {
    let name = col("name", ColumnKind::varchar());
    let born = col("born", ColumnKind::Date);
    let id = col("id", ColumnKind::int());

    assert!(like(&name, "a%").is_ok());
    assert!(matches!(
        like(&id, "1%"),
        Err(Error::UnsupportedOperand { op: "LIKE", .. })
    ));
    assert!(between(&born, NOW.clone(), NOW.clone()).is_ok());
    assert!(matches!(
        not_between(&id, "a", "z"),
        Err(Error::KindMismatch {
            op: "NOT BETWEEN",
            ..
        })
    ));
    let none: [i32; 0] = [];
    assert!(matches!(
        in_list(&id, none),
        Err(Error::ArityViolation { op: "IN", .. })
    ));
    assert!(not_in_list(&id, [1, 2, 3]).is_ok());
    assert_eq!(
        cast(&id, ColumnKind::varchar()).kind(),
        ColumnKind::varchar()
    );
    assert_eq!(
        coalesce([Expr::from(&id), Expr::from(Decimal::new(15, 1))])
            .unwrap()
            .kind(),
        ColumnKind::decimal(11, 1)
    );
}

#[test]
fn test_subquery_predicates() {
    let orders = Table::new("orders");
    let user_id = orders.column("user_id", ColumnKind::int_unsigned());
    let amount = orders.column("amount", ColumnKind::double());
    let users = Table::new("users");
    let id = users.column("id", ColumnKind::int_unsigned());

    let buyers = select([&user_id]).unwrap().from(&orders);
    assert!(in_subquery(&id, buyers.clone()).is_ok());
    assert!(not_in_subquery(&id, buyers.clone()).is_ok());
    assert_eq!(exists(buyers.clone()).kind(), ColumnKind::Boolean);
    assert_eq!(not_exists(buyers.clone()).node().map(Node::tag), Some("NOT EXISTS"));

    let wide = select([&user_id, &user_id]).unwrap();
    assert!(matches!(
        in_subquery(&id, wide.clone()),
        Err(Error::ArityViolation { found: 2, .. })
    ));

    let wrapped = any(wide.clone());
    assert_eq!(wrapped.kind(), ColumnKind::int_unsigned());
    assert_eq!(wrapped.node().and_then(Node::subquery), Some(&wide));

    let amounts = select([&amount]).unwrap();
    let richest = gte(&amount, all(amounts.clone())).unwrap();
    assert_eq!(richest.kind(), ColumnKind::Boolean);
    assert_eq!(some(amounts.clone()).node().map(Node::tag), Some("SOME"));
    assert!(matches!(
        eq(&id, any(select([col("n", ColumnKind::varchar())]).unwrap())),
        Err(Error::KindMismatch { .. })
    ));

    let scalar = amounts.as_scalar().unwrap();
    assert_eq!(scalar.kind(), ColumnKind::double());
    assert!(matches!(scalar.term(), Term::Subquery(_)));
}
