use super::{
    Binding, Expression, FloatLiteral, Identifier, InfixOp, IntLiteral, PrefixOp, Segment,
    Statement,
};
use crate::pretty::Prettier;
use crate::source::Span;
use crate::token::TokenKind;

fn ident(value: &str) -> Expression {
    Expression::ident(value, false, Span::default())
}

fn int(raw: &str) -> Expression {
    Expression::int(raw, Span::default())
}

/// Check that a node's source form is exactly `expected`.
fn check_source(expression: &Expression, expected: &str) {
    assert_eq!(expected, expression.to_string());
}

/// Check that a node's debug form is exactly `expected`.
fn check_debug(expression: &Expression, expected: &str) {
    let prettier = Prettier::new();
    assert_eq!(expected, prettier.pretty_expression(expression));
}

#[test]
fn spans_combine() {
    assert_eq!(Span::new(0, 0), Span::default());
    assert_eq!(Span::new(1, 9), Span::new(1, 3) + Span::new(5, 9));
    assert_eq!(Span::new(2, 8), Span::new(4, 8) + Span::new(2, 6));
}

#[test]
fn prefix_operators_map_to_lexemes() {
    let expected = &[
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Star, "*"),
        (TokenKind::DoubleStar, "**"),
    ];

    for &(kind, lexeme) in expected {
        assert_eq!(lexeme, PrefixOp::from_token(kind).lexeme());

        // The mapping is stable across calls.
        assert_eq!(PrefixOp::from_token(kind), PrefixOp::from_token(kind));
        assert_eq!(lexeme, PrefixOp::from_token(kind).to_string());
    }
}

#[test]
fn infix_operators_map_to_lexemes() {
    let expected = &[
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Star, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::DoubleSlash, "//"),
        (TokenKind::DoubleStar, "**"),
    ];

    for &(kind, lexeme) in expected {
        assert_eq!(lexeme, InfixOp::from_token(kind).lexeme());
        assert_eq!(InfixOp::from_token(kind), InfixOp::from_token(kind));
        assert_eq!(lexeme, InfixOp::from_token(kind).to_string());
    }
}

#[test]
#[should_panic(expected = "not a prefix operator")]
fn prefix_operator_rejects_slash() {
    PrefixOp::from_token(TokenKind::Slash);
}

#[test]
#[should_panic(expected = "not a prefix operator")]
fn prefix_operator_rejects_double_slash() {
    PrefixOp::from_token(TokenKind::DoubleSlash);
}

#[test]
#[should_panic(expected = "not a prefix operator")]
fn prefix_operator_rejects_non_operator() {
    PrefixOp::from_token(TokenKind::Dot);
}

#[test]
#[should_panic(expected = "not an infix operator")]
fn infix_operator_rejects_non_operator() {
    InfixOp::from_token(TokenKind::Equal);
}

#[test]
fn int_literals_parse() {
    assert_eq!(42, IntLiteral::new("42").value);
    assert_eq!(-7, IntLiteral::new("-7").value);
    assert_eq!(0, IntLiteral::new("0").value);
}

#[test]
fn int_literals_degrade_leniently() {
    // The value comes from the longest valid prefix, zero if there is none
    // or it does not fit.
    assert_eq!(12, IntLiteral::new("12abc").value);
    assert_eq!(-3, IntLiteral::new("-3_000").value);
    assert_eq!(0, IntLiteral::new("abc").value);
    assert_eq!(0, IntLiteral::new("").value);
    assert_eq!(0, IntLiteral::new("+").value);
    assert_eq!(0, IntLiteral::new("9223372036854775808").value);
    assert_eq!("12abc", IntLiteral::new("12abc").raw);
}

#[test]
fn float_literals_parse() {
    assert_eq!(3.5, FloatLiteral::new("3.5").value);
    assert_eq!(1000.0, FloatLiteral::new("1e3").value);
    assert_eq!(-0.25, FloatLiteral::new("-2.5e-1").value);
}

#[test]
fn float_literals_degrade_leniently() {
    assert_eq!(3.5, FloatLiteral::new("3.5.7").value);
    assert_eq!(1.0, FloatLiteral::new("1.x").value);
    assert_eq!(2.0, FloatLiteral::new("2e").value);
    assert_eq!(0.0, FloatLiteral::new("x").value);
    assert_eq!(0.0, FloatLiteral::new(".5").value);
    assert_eq!("3.5.7", FloatLiteral::new("3.5.7").raw);
}

#[test]
fn bindings_render_four_forms() {
    let span = Span::default();
    let anno = || Expression::constant("Int32", false, span);
    let value = || int("1");

    let bare = Expression::var(ident("x"), None, None, span);
    let annotated = Expression::var(ident("x"), Some(anno()), None, span);
    let initialized = Expression::var(ident("x"), None, Some(value()), span);
    let both = Expression::var(ident("x"), Some(anno()), Some(value()), span);

    check_source(&bare, "x");
    check_source(&annotated, "x : Int32");
    check_source(&initialized, "x = 1");
    check_source(&both, "x : Int32 = 1");
}

#[test]
fn uninitialized_ignores_annotation() {
    let anno = Expression::constant("Int32", false, Span::default());

    let binding = Binding::new(ident("x"), Some(anno.clone()), None);
    assert!(binding.is_uninitialized());

    let binding = Binding::new(ident("x"), Some(anno), Some(int("1")));
    assert!(!binding.is_uninitialized());

    let binding = Binding::new(ident("x"), None, Some(int("1")));
    assert!(!binding.is_uninitialized());
}

#[test]
fn tagged_bindings_share_renderings() {
    let span = Span::default();
    let instance = Expression::instance_var(ident("count"), None, Some(int("0")), span);
    let class = Expression::class_var(ident("count"), None, Some(int("0")), span);

    check_source(&instance, "count = 0");
    check_source(&class, "count = 0");
}

#[test]
fn paths_render_segment_qualifiers() {
    let span = Span::default();

    let path = Expression::path(
        vec![
            Segment::Const(Identifier::new("Foo", true)),
            Segment::Ident(Identifier::new("bar", false)),
        ],
        true,
        span,
    );
    check_source(&path, "::Foo.bar");

    let path = Expression::path(
        vec![
            Segment::Const(Identifier::new("Foo", false)),
            Segment::Const(Identifier::new("Bar", true)),
        ],
        false,
        span,
    );
    check_source(&path, "Foo::Bar");

    // A globally qualified ident segment keeps both its qualifier and its
    // separator.
    let path = Expression::path(
        vec![Segment::Ident(Identifier::new("bar", true))],
        true,
        span,
    );
    check_source(&path, "::.bar");
}

#[test]
fn idents_and_consts_render() {
    let span = Span::default();

    check_source(&ident("foo"), "foo");
    check_source(&Expression::ident("foo", true, span), "::foo");
    check_source(&Expression::constant("Foo", false, span), "Foo");
    check_source(&Expression::constant("Foo", true, span), "::Foo");
}

#[test]
fn operators_render() {
    let span = Span::default();

    let negated = Expression::prefix(PrefixOp::Minus, ident("x"), span);
    check_source(&negated, "-x");

    let splatted = Expression::prefix(PrefixOp::DoubleSplat, ident("kwargs"), span);
    check_source(&splatted, "**kwargs");

    let sum = Expression::infix(InfixOp::Add, ident("a"), ident("b"), span);
    check_source(&sum, "a + b");

    let product = Expression::infix(InfixOp::Multiply, ident("b"), ident("c"), span);
    let sum = Expression::infix(InfixOp::Add, ident("a"), product, span);
    check_source(&sum, "a + b * c");

    let floored = Expression::infix(InfixOp::DivFloor, ident("a"), ident("b"), span);
    check_source(&floored, "a // b");
}

#[test]
fn calls_render() {
    let span = Span::default();

    let call = Expression::call(ident("f"), vec![int("1"), int("2")], span);
    check_source(&call, "f(1, 2)");

    let call = Expression::call(ident("f"), Vec::new(), span);
    check_source(&call, "f()");
}

#[test]
fn literals_render() {
    let span = Span::default();

    check_source(&Expression::string("he said \"hi\"\n", span), "\"he said \\\"hi\\\"\\n\"");
    check_source(&int("42"), "42");
    check_source(&Expression::float("3.5", span), "3.5");
    check_source(&Expression::boolean(true, span), "true");
    check_source(&Expression::boolean(false, span), "false");
    check_source(&Expression::nil(span), "nil");
}

#[test]
fn expression_statements_render_parenthesized() {
    let span = Span::default();

    let assign = Expression::assign(ident("x"), int("1"), span);
    let statement = Statement::expression(assign, span);

    assert_eq!("(x = 1)", statement.to_string());
}

#[test]
fn debug_form_names_kinds_and_fields() {
    let span = Span::default();

    check_debug(&ident("foo"), r#"Ident(value: "foo", global: false)"#);
    check_debug(
        &Expression::constant("Foo", true, span),
        r#"Const(value: "Foo", global: true)"#,
    );
    check_debug(&Expression::nil(span), "NilLiteral");
    check_debug(&Expression::boolean(true, span), "BoolLiteral(value: true)");
    check_debug(
        &Expression::float("3.5", span),
        r#"FloatLiteral(raw: "3.5", value: 3.5)"#,
    );
    check_debug(
        &Expression::prefix(PrefixOp::Splat, ident("rest"), span),
        r#"Prefix(op: Splat, value: Ident(value: "rest", global: false))"#,
    );
    check_debug(
        &Expression::infix(InfixOp::Power, ident("a"), ident("b"), span),
        r#"Infix(op: Power, left: Ident(value: "a", global: false), right: Ident(value: "b", global: false))"#,
    );
    check_debug(
        &Expression::string("hi\n", span),
        r#"StringLiteral(value: "hi\n")"#,
    );
}

#[test]
fn debug_form_distinguishes_binding_tags() {
    let span = Span::default();

    let instance = Expression::instance_var(ident("count"), None, Some(int("0")), span);
    check_debug(
        &instance,
        r#"InstanceVar(name: Ident(value: "count", global: false), anno: None, value: IntLiteral(raw: "0", value: 0))"#,
    );

    let class = Expression::class_var(ident("count"), None, Some(int("0")), span);
    check_debug(
        &class,
        r#"ClassVar(name: Ident(value: "count", global: false), anno: None, value: IntLiteral(raw: "0", value: 0))"#,
    );
}

#[test]
fn debug_form_recurses_into_children() {
    let span = Span::default();

    let call = Expression::call(ident("f"), vec![int("1"), int("2")], span);
    check_debug(
        &call,
        r#"Call(receiver: Ident(value: "f", global: false), args: [IntLiteral(raw: "1", value: 1), IntLiteral(raw: "2", value: 2)])"#,
    );

    let empty = Expression::call(ident("f"), Vec::new(), span);
    check_debug(&empty, r#"Call(receiver: Ident(value: "f", global: false), args: [])"#);

    let path = Expression::path(
        vec![
            Segment::Const(Identifier::new("Foo", true)),
            Segment::Ident(Identifier::new("bar", false)),
        ],
        true,
        span,
    );
    check_debug(
        &path,
        r#"Path(names: [Const(value: "Foo", global: true), Ident(value: "bar", global: false)], global: true)"#,
    );

    let var = Expression::var(ident("x"), None, None, span);
    check_debug(
        &var,
        r#"Var(name: Ident(value: "x", global: false), anno: None, value: None)"#,
    );
}

#[test]
fn debug_form_tags_statements() {
    let span = Span::default();

    let assign = Expression::assign(ident("x"), int("1"), span);
    let statement = Statement::expression(assign, span);

    let prettier = Prettier::new();
    assert_eq!(
        r#"ExpressionStatement(expression: Assign(target: Ident(value: "x", global: false), value: IntLiteral(raw: "1", value: 1)))"#,
        prettier.pretty_statement(&statement),
    );
}

#[test]
fn debug_form_writes_to_a_sink() {
    let prettier = Prettier::new().with_width(40);
    let mut sink = Vec::new();

    prettier
        .write_expression(&mut sink, &ident("foo"))
        .unwrap();

    assert_eq!(
        r#"Ident(value: "foo", global: false)"#,
        String::from_utf8(sink).unwrap(),
    );
}
