// tests/parser_tests.rs

use nutmeg::ast::{Query, TokenKind};
use nutmeg::lexer::Lexer;
use nutmeg::parser::{ParseError, Parser};
use nutmeg::value::Value;

fn parse(query: &str) -> Result<Query, ParseError> {
    let tokens = Lexer::tokenize(query).unwrap();
    Parser::new(tokens).parse()
}

// ============================================================================
// Well-formed queries
// ============================================================================

#[test]
fn test_simple_query() {
    let query = parse(r#"db.users.find({"age": 30})"#).unwrap();
    assert_eq!(query.collection, "users");
    assert_eq!(query.filter.len(), 1);
    assert_eq!(query.filter.get("age"), Some(&Value::Integer(30)));
}

#[test]
fn test_collection_name_is_any_identifier() {
    for name in ["people", "order_items", "_internal", "t1"] {
        let text = format!("db.{}.find({{}})", name);
        let query = parse(&text).unwrap();
        assert_eq!(query.collection, name);
    }
}

#[test]
fn test_missing_filter_means_empty_filter() {
    let query = parse("db.users.find()").unwrap();
    assert!(query.filter.is_empty());

    let query = parse("db.users.find(  )").unwrap();
    assert!(query.filter.is_empty());
}

#[test]
fn test_empty_filter_object() {
    let query = parse("db.users.find({})").unwrap();
    assert!(query.filter.is_empty());
}

#[test]
fn test_filter_preserves_key_order() {
    let query = parse(r#"db.users.find({"b": 1, "a": 2})"#).unwrap();
    let keys: Vec<&String> = query.filter.keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_duplicate_filter_keys_last_wins() {
    let query = parse(r#"db.users.find({"age": 1, "age": 2})"#).unwrap();
    assert_eq!(query.filter.get("age"), Some(&Value::Integer(2)));
}

#[test]
fn test_nested_filter_decodes_as_tree() {
    let query = parse(r#"db.users.find({"$and": [{"a": 1}, {"b": {"$gt": 2.5}}]})"#).unwrap();
    let Some(Value::Array(conditions)) = query.filter.get("$and") else {
        panic!("expected $and to hold an array");
    };
    assert_eq!(conditions.len(), 2);

    let Value::Object(second) = &conditions[1] else {
        panic!("expected a filter object");
    };
    let Some(Value::Object(bundle)) = second.get("b") else {
        panic!("expected an operator bundle");
    };
    assert_eq!(bundle.get("$gt"), Some(&Value::Float(2.5)));
}

#[test]
fn test_filter_with_embedded_parenthesis_in_string() {
    let query = parse(r#"db.users.find({"note": "a)b"})"#).unwrap();
    assert_eq!(
        query.filter.get("note"),
        Some(&Value::String("a)b".to_string()))
    );
}

// ============================================================================
// Grammar errors
// ============================================================================

#[test]
fn test_missing_db_prefix() {
    let err = parse("users.find()").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: TokenKind::Db,
            found: TokenKind::Identifier,
        }
    ));
}

#[test]
fn test_truncated_query() {
    let test_cases = vec![
        ("db", TokenKind::Dot),
        ("db.users", TokenKind::Dot),
        ("db.users.find", TokenKind::LParen),
    ];

    for (input, expected) in test_cases {
        let err = parse(input).unwrap_err();
        match err {
            ParseError::UnexpectedToken {
                expected: e,
                found: TokenKind::Eof,
            } => assert_eq!(e, expected, "Failed for input: {}", input),
            other => panic!("unexpected error for {}: {:?}", input, other),
        }
    }
}

#[test]
fn test_unclosed_empty_arguments() {
    let err = parse("db.users.find(").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: TokenKind::RParen,
            found: TokenKind::Eof,
        }
    ));
}

#[test]
fn test_unclosed_filter() {
    let err = parse(r#"db.users.find({"age": 30}"#).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: TokenKind::RParen,
            found: TokenKind::Eof,
        }
    ));
    assert_eq!(err.to_string(), "Expected RPAREN, got EOF");
}

#[test]
fn test_trailing_tokens_rejected() {
    let err = parse("db.users.find() extra").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: TokenKind::Eof,
            found: TokenKind::Identifier,
        }
    ));
}

// ============================================================================
// Function name validation
// ============================================================================

#[test]
fn test_unsupported_function() {
    let err = parse(r#"db.users.remove({"age": 30})"#).unwrap_err();
    match err {
        ParseError::UnsupportedFunction { name } => assert_eq!(name, "remove"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_unsupported_function_reported_before_arguments() {
    // The function name is checked before the argument list is touched,
    // so a broken filter after a bad name still reports the name.
    let err = parse(r#"db.users.insert({"age":})"#).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported function 'insert'");
}

// ============================================================================
// Filter literal errors
// ============================================================================

#[test]
fn test_malformed_filter_json() {
    let err = parse(r#"db.users.find({"age":})"#).unwrap_err();
    assert!(matches!(err, ParseError::MalformedFilterLiteral { .. }));
    assert!(err.to_string().starts_with("Invalid JSON filter:"));
}

#[test]
fn test_filter_must_be_an_object() {
    let test_cases = vec![
        (r#"db.users.find(42)"#, "number"),
        (r#"db.users.find("age")"#, "string"),
        (r#"db.users.find([1, 2])"#, "array"),
    ];

    for (input, type_name) in test_cases {
        let err = parse(input).unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("expected a JSON object"),
            "Failed for input {}: {}",
            input,
            message
        );
        assert!(
            message.contains(type_name),
            "Failed for input {}: {}",
            input,
            message
        );
    }
}

#[test]
fn test_bare_word_argument_is_not_a_filter() {
    // Word-shaped arguments lex as identifiers, so `null`, `true` and
    // stray names never reach the JSON decoder.
    for input in [
        "db.users.find(null)",
        "db.users.find(true)",
        "db.users.find(age)",
    ] {
        let err = parse(input).unwrap_err();
        assert!(
            matches!(
                err,
                ParseError::UnexpectedToken {
                    expected: TokenKind::RParen,
                    found: TokenKind::Identifier,
                }
            ),
            "Failed for input {}: {:?}",
            input,
            err
        );
    }
}

#[test]
fn test_malformed_json_wins_over_missing_paren() {
    // The filter body is decoded before the closing parenthesis is
    // checked, so an unclosed broken filter reports the JSON error.
    let err = parse(r#"db.users.find({"age":"#).unwrap_err();
    assert!(matches!(err, ParseError::MalformedFilterLiteral { .. }));
}

#[test]
fn test_extra_closing_parenthesis_rejected() {
    // Only one trailing parenthesis belongs to the call; a second one is
    // part of the filter text and breaks the JSON.
    let err = parse(r#"db.users.find({"age": 30}))"#).unwrap_err();
    assert!(matches!(err, ParseError::MalformedFilterLiteral { .. }));
}
