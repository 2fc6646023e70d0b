//! A toy compiler built only on the public tree API: it renders expressions
//! as S-expressions, and the tests parse that text back to check that
//! operator tags and operand identities survive.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{NaiveDate, TimeDelta};
use sqlkind_core::prelude::*;
use sqlkind_core::visit::{Visitor, walk_node};

#[derive(Default)]
struct SExpr {
    out: String,
    evaluated: usize,
}

impl SExpr {
    fn render(expr: &Expr) -> String {
        let mut compiler = SExpr::default();
        compiler.visit_expr(expr);
        compiler.out
    }

    fn atom(&mut self, atom: &str) {
        if !self.out.is_empty() && !self.out.ends_with('(') {
            self.out.push(' ');
        }
        self.out.push_str(atom);
    }
}

impl Visitor for SExpr {
    fn visit_node(&mut self, node: &Node, kind: ColumnKind) {
        self.atom("(");
        self.out.push_str(&node.tag().replace(' ', "_"));
        walk_node(self, node, kind);
        self.out.push(')');
    }

    fn visit_select(&mut self, select: &Select) {
        self.atom("(SELECT");
        for expr in select.projections() {
            self.visit_expr(expr);
        }
        self.out.push(')');
    }

    fn visit_column(&mut self, column: &Column) {
        let name = match column.table() {
            Some(table) => format!("{table}.{}", column.name()),
            None => column.name().to_owned(),
        };
        self.atom(&name);
    }

    fn visit_literal(&mut self, literal: &Literal) {
        let text = match literal {
            Literal::I32(v) => v.to_string(),
            Literal::U32(v) => v.to_string(),
            Literal::I64(v) => v.to_string(),
            Literal::U8(v) => v.to_string(),
            Literal::F64(v) => v.to_string(),
            Literal::Text(v) => format!("'{v}'"),
            Literal::Date(v) => format!("'{v}'"),
            Literal::DateTime(v) => format!("'{v}'"),
            Literal::Interval(v) => format!("{}s", v.num_seconds()),
            other => format!("{other:?}"),
        };
        self.atom(&text);
    }

    fn visit_null(&mut self, _kind: ColumnKind) {
        self.atom("NULL");
    }

    fn visit_deferred(&mut self, deferred: &Deferred) {
        self.evaluated += 1;
        let value = deferred.evaluate();
        self.visit_literal(&value);
    }
}

/// Parsed S-expression.
#[derive(Debug, PartialEq)]
enum Tree {
    Atom(String),
    List(String, Vec<Tree>),
}

fn parse(text: &str) -> Tree {
    let tokens: Vec<String> = text
        .replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(str::to_owned)
        .collect();
    let mut pos = 0;
    let tree = parse_at(&tokens, &mut pos);
    assert_eq!(pos, tokens.len(), "trailing tokens in {text}");
    tree
}

fn parse_at(tokens: &[String], pos: &mut usize) -> Tree {
    let token = tokens[*pos].clone();
    *pos += 1;
    if token != "(" {
        return Tree::Atom(token);
    }
    let head = tokens[*pos].clone();
    *pos += 1;
    let mut children = Vec::new();
    while tokens[*pos] != ")" {
        children.push(parse_at(tokens, pos));
    }
    *pos += 1;
    Tree::List(head, children)
}

/// Shape of the tree as the node API reports it.
fn expected(expr: &Expr) -> Tree {
    match expr.node() {
        Some(node) => Tree::List(
            node.tag().replace(' ', "_"),
            node.operands().into_iter().map(expected).collect(),
        ),
        None => parse(&SExpr::render(expr)),
    }
}

#[test]
fn test_eq_column_literal_round_trip() {
    let users = Table::new("users");
    let age = users.column("age", ColumnKind::int());

    let expr = eq(&age, 5).unwrap();
    assert_eq!(expr.kind(), ColumnKind::Boolean);

    let Some(Node::Comparison { op, left, right }) = expr.node() else {
        panic!("expected comparison, got {expr:?}");
    };
    assert_eq!(*op, CmpOp::Eq);
    assert_eq!(left.term(), &Term::Column(age.clone()));
    assert_eq!(right.term(), &Term::Literal(Literal::I32(5)));

    let text = SExpr::render(&expr);
    assert_eq!(text, "(= users.age 5)");
    assert_eq!(
        parse(&text),
        Tree::List(
            "=".into(),
            vec![Tree::Atom("users.age".into()), Tree::Atom("5".into())]
        )
    );
}

#[test]
fn test_nested_tree_round_trip() {
    let orders = Table::new("orders").alias("o");
    let qty = orders.column("qty", ColumnKind::smallint_unsigned());
    let price = orders.column("price", ColumnKind::decimal(10, 2));
    let status = orders.column("status", ColumnKind::Enum);

    let total = mul(&price, &qty).unwrap();
    let expr = and([
        gt(total, 100).unwrap(),
        in_list(&status, ["open", "held"]).unwrap(),
        not(is_null(&qty)).unwrap(),
    ])
    .unwrap();

    let text = SExpr::render(&expr);
    assert_eq!(
        text,
        "(AND (> (* o.price o.qty) 100) (IN o.status 'open' 'held') (NOT (IS_NULL o.qty)))"
    );
    assert_eq!(parse(&text), expected(&expr));
}

#[test]
fn test_case_and_coalesce_round_trip() {
    let t = Table::new("t");
    let score = t.column("score", ColumnKind::int());
    let nick = t.column("nick", ColumnKind::varchar());

    let expr = case_when(gte(&score, 90).unwrap(), coalesce([&nick, &nick]).unwrap())
        .unwrap()
        .r#else("none")
        .unwrap();
    let text = SExpr::render(&expr);
    assert_eq!(
        text,
        "(CASE (>= t.score 90) (COALESCE t.nick t.nick) 'none')"
    );
    assert_eq!(parse(&text), expected(&expr));
}

#[test]
fn test_deferred_evaluated_once_per_occurrence() {
    let events = Table::new("events");
    let at = events.column("at", ColumnKind::DateTime);

    let window = between(&at, sub(now(), TimeDelta::days(1)).unwrap(), now()).unwrap();
    let mut compiler = SExpr::default();
    compiler.visit_expr(&window);
    assert_eq!(compiler.evaluated, 2);

    let mut again = SExpr::default();
    again.visit_expr(&window);
    assert_eq!(again.evaluated, 2);
}

#[test]
fn test_producer_runs_only_when_compiled() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let seed = Deferred::from_fn("SEED", ColumnKind::int(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Literal::I32(7)
    });

    let jobs = Table::new("jobs");
    let slot = jobs.column("slot", ColumnKind::int());
    let expr = and([
        gte(&slot, deferred(seed.clone())).unwrap(),
        lt(&slot, add(deferred(seed), 10).unwrap()).unwrap(),
    ])
    .unwrap();
    let copy = expr.clone();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let text = SExpr::render(&expr);
    assert_eq!(text, "(AND (>= jobs.slot 7) (< jobs.slot (+ 7 10)))");
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    SExpr::render(&copy);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_statement_walk_reaches_every_value() {
    #[derive(Default)]
    struct Count {
        columns: usize,
        literals: usize,
    }
    impl Visitor for Count {
        fn visit_column(&mut self, _: &Column) {
            self.columns += 1;
        }
        fn visit_literal(&mut self, _: &Literal) {
            self.literals += 1;
        }
    }

    let people = Table::new("people");
    let id = people.column("id", ColumnKind::int());
    let born = people.column("born", ColumnKind::Date);
    let stmt = insert_into(&people, [id.clone(), born.clone()])
        .unwrap()
        .values([
            Expr::from(1),
            Expr::from(NaiveDate::from_ymd_opt(1990, 1, 2).unwrap()),
        ])
        .unwrap()
        .into_statement()
        .unwrap();

    let mut count = Count::default();
    sqlkind_core::visit::walk_statement(&mut count, &stmt);
    assert_eq!(count.columns, 2);
    assert_eq!(count.literals, 2);
}
