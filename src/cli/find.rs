//! Execute find queries against JSON document collections

use super::CliError;
use crate::{Document, Evaluator, Lexer, Parser, Value, decode};

/// Options for the find command
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// The query to execute
    pub query: String,
    /// JSON input: an array of documents
    pub input: Option<String>,
    /// Only validate the query, don't execute
    pub parse_only: bool,
}

/// Result of a find operation
#[derive(Debug)]
pub enum FindResult {
    /// Query validation passed
    SyntaxValid,
    /// The documents matching the filter, in collection order
    Matched(Vec<Document>),
}

/// Execute a find operation
pub fn execute_find(options: &FindOptions) -> Result<FindResult, CliError> {
    let tokens = Lexer::tokenize(&options.query).map_err(CliError::Lex)?;
    let mut parser = Parser::new(tokens);
    let query = parser.parse().map_err(CliError::Parse)?;

    if options.parse_only {
        return Ok(FindResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let documents = parse_documents(json_str)?;

    let evaluator = Evaluator::new();
    let matched = evaluator
        .evaluate(&query, &documents)
        .map_err(CliError::Eval)?;

    Ok(FindResult::Matched(matched))
}

/// Parse a JSON array of objects into a document collection
pub fn parse_documents(json_str: &str) -> Result<Vec<Document>, CliError> {
    let json_value: serde_json::Value =
        serde_json::from_str(json_str).map_err(CliError::Json)?;

    let elements = match decode::from_json(json_value) {
        Value::Array(elements) => elements,
        other => {
            return Err(CliError::InvalidInput(format!(
                "expected a JSON array of documents, got {}",
                other.type_name()
            )));
        }
    };

    let mut documents = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            Value::Object(fields) => documents.push(Document::from(fields)),
            other => {
                return Err(CliError::InvalidInput(format!(
                    "expected every document to be a JSON object, got {}",
                    other.type_name()
                )));
            }
        }
    }
    Ok(documents)
}
