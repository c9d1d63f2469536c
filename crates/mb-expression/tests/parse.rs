//! Tests for the parser: literal capture, operator dispatch, arity and shape
//! validation, and the lazy property-reference forms of `get`/`has`.

use mb_expression::{parse, Expression, OperatorKind, ParseError};
use serde_json::json;

#[test]
fn test_scalar_literals() {
    assert_eq!(parse(&json!(5)).unwrap(), Expression::Literal(json!(5)));
    assert_eq!(parse(&json!("hi")).unwrap(), Expression::Literal(json!("hi")));
    assert_eq!(parse(&json!(true)).unwrap(), Expression::Literal(json!(true)));
    assert_eq!(parse(&json!(null)).unwrap(), Expression::Literal(json!(null)));
    assert_eq!(
        parse(&json!({"a": 1})).unwrap(),
        Expression::Literal(json!({"a": 1}))
    );
}

#[test]
fn test_array_without_string_head_is_literal() {
    assert_eq!(
        parse(&json!([1, 2, 3])).unwrap(),
        Expression::Literal(json!([1, 2, 3]))
    );
    assert_eq!(
        parse(&json!([[1], [2]])).unwrap(),
        Expression::Literal(json!([[1], [2]]))
    );
}

#[test]
fn test_unknown_operator() {
    assert_eq!(
        parse(&json!(["fancy-op", 1])).unwrap_err(),
        ParseError::UnknownOperator("fancy-op".to_string())
    );
    // String-headed data arrays must be wrapped in `literal`.
    assert!(matches!(
        parse(&json!(["a", "b"])).unwrap_err(),
        ParseError::UnknownOperator(_)
    ));
}

#[test]
fn test_literal_captured_verbatim() {
    // Operator-shaped payloads under `literal` are data, not expressions.
    let payload = json!(["+", 1, 2]);
    assert_eq!(
        parse(&json!(["literal", ["+", 1, 2]])).unwrap(),
        Expression::Literal(payload)
    );

    let nested = json!({"stops": [[0, "#fff"], [10, "#000"]]});
    match parse(&json!(["literal", {"stops": [[0, "#fff"], [10, "#000"]]}])).unwrap() {
        Expression::Literal(raw) => assert_eq!(raw, nested),
        other => panic!("expected literal, got {:?}", other),
    }
}

#[test]
fn test_malformed_literal() {
    assert_eq!(
        parse(&json!(["literal"])).unwrap_err(),
        ParseError::MalformedLiteral
    );
    assert_eq!(
        parse(&json!(["literal", 1, 2])).unwrap_err(),
        ParseError::MalformedLiteral
    );
}

#[test]
fn test_arity_errors() {
    for node in [
        json!(["!"]),
        json!(["==", 1]),
        json!(["==", 1, 2, 3]),
        json!(["at", 1]),
        json!(["pi", 1]),
        json!(["zoom", 0]),
        json!(["sqrt", 1, 2]),
        json!(["+", 1]),
        json!(["all", true]),
        json!(["case", true]),
        json!(["case", true, 1]),
        json!(["match", 1, 2, 3]),
        json!(["match", 1, "a"]),
        json!(["get", "k", {}, {}]),
    ] {
        assert!(
            matches!(parse(&node), Err(ParseError::ArityOrShape { .. })),
            "expected arity error for {}",
            node
        );
    }
}

#[test]
fn test_get_has_lazy_forms() {
    assert_eq!(
        parse(&json!(["get", "name"])).unwrap(),
        Expression::PropertyRef("name".to_string())
    );
    assert_eq!(
        parse(&json!(["has", "name"])).unwrap(),
        Expression::PropertyExists("name".to_string())
    );
    // The lazy form needs a plain string key.
    assert!(matches!(
        parse(&json!(["get", 7])),
        Err(ParseError::ArityOrShape { .. })
    ));
}

#[test]
fn test_get_with_target_object_is_an_operator() {
    match parse(&json!(["get", "name", {"name": "x"}])).unwrap() {
        Expression::Op { kind, args } => {
            assert_eq!(kind, OperatorKind::Get);
            assert_eq!(args.len(), 2);
        }
        other => panic!("expected get operator, got {:?}", other),
    }
}

#[test]
fn test_nested_expression() {
    let expr = parse(&json!([
        "case",
        ["==", ["get", "class"], "motorway"],
        ["to-color", "#ff0000"],
        ["to-color", "#000000"]
    ]))
    .unwrap();
    match expr {
        Expression::Op { kind, args } => {
            assert_eq!(kind, OperatorKind::Case);
            assert_eq!(args.len(), 3);
            assert!(matches!(&args[0], Expression::Op { kind, .. } if *kind == OperatorKind::Eq));
        }
        other => panic!("expected case operator, got {:?}", other),
    }
}
