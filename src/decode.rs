//! Filter-literal decoding.
//!
//! The parser hands the raw filter text (a JSON object literal) to this
//! module, which delegates to serde_json and converts the result into the
//! crate's own [`Value`] tree. Conversion keeps object keys in source order
//! and keeps integers separate from floats, so `30` and `30.0` stay
//! distinguishable variants even though they compare equal.

use crate::value::Value;

/// Errors that can occur while decoding a filter literal.
#[derive(Debug, Clone)]
pub enum DecodeError {
    /// The literal is not well-formed JSON
    Malformed { message: String },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Malformed { message } => {
                write!(f, "Invalid JSON filter: {}", message)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decodes a filter literal into a value tree.
///
/// The input is the filter text with the trailing close-parenthesis already
/// stripped by the parser. Standard JSON semantics apply; in particular,
/// duplicate object keys resolve to the last occurrence.
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    let json: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        DecodeError::Malformed {
            message: e.to_string(),
        }
    })?;
    Ok(from_json(json))
}

/// Convert serde_json::Value to a query-engine Value
pub fn from_json(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(obj) => {
            Value::Object(obj.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}
