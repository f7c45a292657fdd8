// tests/integration_tests.rs
//
// End-to-end tests running whole queries through the lexer, parser and
// evaluator against a small in-memory collection.

use nutmeg::{decode, output, Document, Evaluator, Lexer, Parser, Value};

fn document(pairs: Vec<(&str, Value)>) -> Document {
    let mut doc = Document::new();
    for (key, value) in pairs {
        doc.insert(key, value);
    }
    doc
}

fn people() -> Vec<Document> {
    vec![
        document(vec![
            ("_id", Value::Integer(1)),
            ("name", Value::String("Alice".into())),
            ("age", Value::Integer(30)),
            ("city", Value::String("New York".into())),
        ]),
        document(vec![
            ("_id", Value::Integer(2)),
            ("name", Value::String("Bob".into())),
            ("age", Value::Integer(25)),
            ("city", Value::String("San Francisco".into())),
        ]),
        document(vec![
            ("_id", Value::Integer(3)),
            ("name", Value::String("Charlie".into())),
            ("age", Value::Integer(35)),
            ("city", Value::String("Los Angeles".into())),
        ]),
        document(vec![
            ("_id", Value::Integer(4)),
            ("name", Value::String("Diana".into())),
            ("age", Value::Integer(28)),
            ("city", Value::String("New York".into())),
        ]),
        document(vec![
            ("_id", Value::Integer(5)),
            ("name", Value::String("Eve".into())),
            ("age", Value::Integer(40)),
            ("city", Value::String("Chicago".into())),
        ]),
    ]
}

fn run(query_text: &str) -> Result<Vec<Document>, String> {
    let tokens = Lexer::tokenize(query_text).map_err(|e| e.to_string())?;
    let query = Parser::new(tokens).parse().map_err(|e| e.to_string())?;
    Evaluator::new()
        .evaluate(&query, &people())
        .map_err(|e| e.to_string())
}

fn names(results: &[Document]) -> Vec<&str> {
    results
        .iter()
        .map(|doc| match doc.get("name") {
            Some(Value::String(name)) => name.as_str(),
            other => panic!("unexpected name field: {:?}", other),
        })
        .collect()
}

// ============================================================================
// Whole-pipeline queries
// ============================================================================

#[test]
fn test_age_and_city_query() {
    let results = run(r#"db.people.find({"age": {"$gt": 25}, "city": "New York"})"#).unwrap();
    assert_eq!(names(&results), vec!["Alice", "Diana"]);
}

#[test]
fn test_find_without_filter_returns_collection_in_order() {
    let results = run("db.people.find()").unwrap();
    assert_eq!(
        names(&results),
        vec!["Alice", "Bob", "Charlie", "Diana", "Eve"]
    );
}

#[test]
fn test_find_with_empty_filter_returns_everything() {
    let results = run("db.people.find({})").unwrap();
    assert_eq!(results.len(), 5);
}

#[test]
fn test_exact_string_match() {
    let results = run(r#"db.people.find({"city": "Chicago"})"#).unwrap();
    assert_eq!(names(&results), vec!["Eve"]);
}

#[test]
fn test_range_query() {
    let results = run(r#"db.people.find({"age": {"$gte": 28, "$lt": 40}})"#).unwrap();
    assert_eq!(names(&results), vec!["Alice", "Charlie", "Diana"]);
}

#[test]
fn test_or_query() {
    let results =
        run(r#"db.people.find({"$or": [{"city": "Chicago"}, {"age": {"$lt": 26}}]})"#).unwrap();
    assert_eq!(names(&results), vec!["Bob", "Eve"]);
}

#[test]
fn test_not_query() {
    let results = run(r#"db.people.find({"$not": {"city": "New York"}})"#).unwrap();
    assert_eq!(names(&results), vec!["Bob", "Charlie", "Eve"]);
}

#[test]
fn test_explicit_and_matches_implicit_conjunction() {
    let implicit = run(r#"db.people.find({"age": {"$gt": 25}, "city": "New York"})"#).unwrap();
    let explicit =
        run(r#"db.people.find({"$and": [{"age": {"$gt": 25}}, {"city": "New York"}]})"#).unwrap();
    assert_eq!(names(&implicit), names(&explicit));
}

#[test]
fn test_nested_logical_query() {
    let results = run(
        r#"db.people.find({"$and": [
            {"$or": [{"city": "New York"}, {"city": "Chicago"}]},
            {"$not": {"age": {"$gt": 35}}}
        ]})"#,
    )
    .unwrap();
    assert_eq!(names(&results), vec!["Alice", "Diana"]);
}

#[test]
fn test_float_literal_matches_integer_field() {
    let results = run(r#"db.people.find({"age": 25.0})"#).unwrap();
    assert_eq!(names(&results), vec!["Bob"]);
}

#[test]
fn test_no_matches_is_empty_not_an_error() {
    let results = run(r#"db.people.find({"age": {"$gt": 100}})"#).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_whitespace_insensitive_query_text() {
    let compact = run(r#"db.people.find({"city":"Chicago"})"#).unwrap();
    let spaced = run(r#"  db . people . find (  {"city": "Chicago"}  )  "#).unwrap();
    assert_eq!(names(&compact), names(&spaced));
}

// ============================================================================
// Pipeline error reporting
// ============================================================================

#[test]
fn test_lex_error_surfaces() {
    let err = run("db.people!.find()").unwrap_err();
    assert!(err.contains("Unexpected character '!'"), "{}", err);
}

#[test]
fn test_parse_error_surfaces() {
    let err = run(r#"db.people.drop({"age": 30})"#).unwrap_err();
    assert_eq!(err, "Unsupported function 'drop'");
}

#[test]
fn test_malformed_filter_never_matches_silently() {
    let err = run(r#"db.people.find({"age":})"#).unwrap_err();
    assert!(err.starts_with("Invalid JSON filter:"), "{}", err);
}

#[test]
fn test_unclosed_call_reports_missing_parenthesis() {
    let err = run(r#"db.people.find({"age": 30}"#).unwrap_err();
    assert_eq!(err, "Expected RPAREN, got EOF");
}

#[test]
fn test_eval_error_surfaces() {
    let err = run(r#"db.people.find({"age": {"$regex": "3.*"}})"#).unwrap_err();
    assert_eq!(err, "Unsupported operator '$regex'");
}

#[test]
fn test_type_error_names_both_sides() {
    let err = run(r#"db.people.find({"name": {"$gt": 5}})"#).unwrap_err();
    assert_eq!(err, "Cannot compare string with number using '$gt'");
}

// ============================================================================
// Output round-trips
// ============================================================================

#[test]
fn test_results_print_as_json() {
    let results = run(r#"db.people.find({"city": "Chicago"})"#).unwrap();
    let value = Value::Array(results.into_iter().map(Document::into_value).collect());
    assert_eq!(
        output::to_json(&value),
        r#"[{"_id":5,"name":"Eve","age":40,"city":"Chicago"}]"#
    );
}

#[test]
fn test_decoded_filter_survives_printing() {
    let text = r#"{"$and": [{"age": {"$gte": 28.5}}, {"tags": ["a", "b"]}, {"ok": true}]}"#;
    let decoded = decode::decode(text).unwrap();
    let reprinted = decode::decode(&output::to_json(&decoded)).unwrap();
    assert_eq!(decoded, reprinted);
}
