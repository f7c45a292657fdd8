use std::cmp::Ordering;

use crate::{
    ast::{CompareOp, LogicalOp, Query},
    value::{Document, Map, Value},
};

/// The filter evaluator.
///
/// Walks a decoded filter tree against each document of a collection,
/// applying logical and comparison operators. Evaluation never mutates the
/// source collection; matching documents are cloned into the result.
#[derive(Debug, Default)]
pub struct Evaluator;

/// Errors that can occur during query evaluation.
#[derive(Debug, Clone)]
pub enum EvalError {
    /// A `$`-prefixed key that is not a recognized operator
    UnsupportedOperator { key: String },

    /// An ordering comparison between mutually unordered types
    IncomparableTypes {
        left: &'static str,
        right: &'static str,
        op: CompareOp,
    },

    /// A logical operator applied to an operand of the wrong shape
    InvalidOperand {
        op: LogicalOp,
        expected: &'static str,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UnsupportedOperator { key } => {
                write!(f, "Unsupported operator '{}'", key)
            }
            EvalError::IncomparableTypes { left, right, op } => {
                write!(f, "Cannot compare {} with {} using '{}'", left, right, op)
            }
            EvalError::InvalidOperand { op, expected } => {
                write!(f, "Operator '{}' expects {}", op, expected)
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl Evaluator {
    /// Creates a new evaluator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a parsed query against a document collection.
    ///
    /// Documents are tested in collection order and matching documents are
    /// returned in that same order. No matches is an empty result, not an
    /// error.
    ///
    /// # Arguments
    ///
    /// * `query` - The parsed query whose filter to apply
    /// * `documents` - The collection snapshot to filter
    ///
    /// # Examples
    ///
    /// ```
    /// use nutmeg::{Document, Evaluator, Lexer, Parser, Value};
    ///
    /// let tokens = Lexer::tokenize(r#"db.users.find({"age": {"$gt": 25}})"#).unwrap();
    /// let mut parser = Parser::new(tokens);
    /// let query = parser.parse().unwrap();
    ///
    /// let mut doc = Document::new();
    /// doc.insert("age", Value::Integer(30));
    ///
    /// let evaluator = Evaluator::new();
    /// let results = evaluator.evaluate(&query, &[doc]).unwrap();
    /// assert_eq!(results.len(), 1);
    /// ```
    pub fn evaluate(
        &self,
        query: &Query,
        documents: &[Document],
    ) -> Result<Vec<Document>, EvalError> {
        let mut results = Vec::new();
        for document in documents {
            if self.matches(document, &query.filter)? {
                results.push(document.clone());
            }
        }
        Ok(results)
    }

    /// Tests a single document against a filter object.
    ///
    /// A filter object is a conjunction: every entry must match, and the
    /// empty filter matches everything. Entries are evaluated left to right
    /// and the first non-matching entry ends the test.
    pub fn matches(&self, document: &Document, filter: &Map) -> Result<bool, EvalError> {
        for (key, value) in filter {
            if !self.match_entry(document, key, value)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn match_entry(
        &self,
        document: &Document,
        key: &str,
        value: &Value,
    ) -> Result<bool, EvalError> {
        if key.starts_with('$') {
            let op = match LogicalOp::from_key(key) {
                Some(op) => op,
                None => {
                    return Err(EvalError::UnsupportedOperator {
                        key: key.to_string(),
                    });
                }
            };
            return self.match_logical(document, op, value);
        }

        // A field absent from the document behaves as a null value, so
        // {"missing": null} matches and ordering against it is an error.
        let absent = Value::Null;
        let field_value = document.get(key).unwrap_or(&absent);

        match value {
            Value::Object(bundle) => self.match_bundle(field_value, bundle),
            other => Ok(field_value == other),
        }
    }

    fn match_logical(
        &self,
        document: &Document,
        op: LogicalOp,
        operand: &Value,
    ) -> Result<bool, EvalError> {
        match op {
            LogicalOp::And => {
                for condition in filter_array(op, operand)? {
                    if !self.matches(document, filter_object(op, condition)?)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            LogicalOp::Or => {
                for condition in filter_array(op, operand)? {
                    if self.matches(document, filter_object(op, condition)?)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            LogicalOp::Not => match operand {
                Value::Object(condition) => Ok(!self.matches(document, condition)?),
                _ => Err(EvalError::InvalidOperand {
                    op,
                    expected: "a filter object",
                }),
            },
        }
    }

    fn match_bundle(&self, field_value: &Value, bundle: &Map) -> Result<bool, EvalError> {
        for (key, operand) in bundle {
            let op = match CompareOp::from_key(key) {
                Some(op) => op,
                None => {
                    return Err(EvalError::UnsupportedOperator {
                        key: key.to_string(),
                    });
                }
            };
            if !compare(field_value, op, operand)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn filter_array(op: LogicalOp, operand: &Value) -> Result<&[Value], EvalError> {
    match operand {
        Value::Array(conditions) => Ok(conditions),
        _ => Err(EvalError::InvalidOperand {
            op,
            expected: "an array of filter objects",
        }),
    }
}

// Checked lazily, one element at a time, so that a short-circuited branch
// never rejects an operand it did not reach.
fn filter_object(op: LogicalOp, condition: &Value) -> Result<&Map, EvalError> {
    match condition {
        Value::Object(condition) => Ok(condition),
        _ => Err(EvalError::InvalidOperand {
            op,
            expected: "an array of filter objects",
        }),
    }
}

fn compare(field_value: &Value, op: CompareOp, operand: &Value) -> Result<bool, EvalError> {
    match op {
        CompareOp::Eq => Ok(field_value == operand),
        CompareOp::Ne => Ok(field_value != operand),
        CompareOp::Gt => ordered(field_value, op, operand).map(|o| o.is_gt()),
        CompareOp::Lt => ordered(field_value, op, operand).map(|o| o.is_lt()),
        CompareOp::Gte => ordered(field_value, op, operand).map(|o| o.is_ge()),
        CompareOp::Lte => ordered(field_value, op, operand).map(|o| o.is_le()),
    }
}

fn ordered(left: &Value, op: CompareOp, right: &Value) -> Result<Ordering, EvalError> {
    left.ordering(right).ok_or(EvalError::IncomparableTypes {
        left: left.type_name(),
        right: right.type_name(),
        op,
    })
}
