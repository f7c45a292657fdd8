//! JSON rendering for query results.
//!
//! Matching documents go back to the caller as JSON text, either compact
//! ([`to_json`]) or pretty-printed with 2-space indentation
//! ([`to_json_pretty`]). Object keys print in insertion order, so a matched
//! document renders with the same field order it was loaded with.
//!
//! # Examples
//!
//! ```
//! use nutmeg::Value;
//! use nutmeg::output::{to_json, to_json_pretty};
//!
//! let value = Value::Array(vec![Value::Integer(1), Value::Null]);
//!
//! assert_eq!(to_json(&value), "[1,null]");
//! assert_eq!(to_json_pretty(&value), "[\n  1,\n  null\n]");
//! ```

use std::fmt::Write;

use crate::value::{Map, Value};

/// Renders values into a growing string buffer.
///
/// `indent` of `None` selects compact output; `Some(width)` selects pretty
/// output with `width` spaces per nesting level.
struct JsonWriter {
    buf: String,
    indent: Option<usize>,
}

impl JsonWriter {
    fn new(indent: Option<usize>) -> Self {
        JsonWriter {
            buf: String::new(),
            indent,
        }
    }

    fn finish(self) -> String {
        self.buf
    }

    fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.buf.push_str("null"),
            Value::Boolean(b) => {
                let _ = write!(self.buf, "{b}");
            }
            Value::Integer(n) => {
                let _ = write!(self.buf, "{n}");
            }
            Value::Float(n) => {
                let _ = write!(self.buf, "{n}");
            }
            Value::String(s) => self.write_string(s),
            Value::Array(items) => self.write_array(items, depth),
            Value::Object(fields) => self.write_object(fields, depth),
        }
    }

    fn write_array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.buf.push_str("[]");
            return;
        }
        self.buf.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            self.newline_indent(depth + 1);
            self.write_value(item, depth + 1);
        }
        self.newline_indent(depth);
        self.buf.push(']');
    }

    fn write_object(&mut self, fields: &Map, depth: usize) {
        if fields.is_empty() {
            self.buf.push_str("{}");
            return;
        }
        self.buf.push('{');
        for (i, (key, value)) in fields.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            self.newline_indent(depth + 1);
            self.write_string(key);
            self.buf.push(':');
            if self.indent.is_some() {
                self.buf.push(' ');
            }
            self.write_value(value, depth + 1);
        }
        self.newline_indent(depth);
        self.buf.push('}');
    }

    fn write_string(&mut self, s: &str) {
        self.buf.push('"');
        for c in s.chars() {
            match c {
                '"' => self.buf.push_str("\\\""),
                '\\' => self.buf.push_str("\\\\"),
                '\n' => self.buf.push_str("\\n"),
                '\r' => self.buf.push_str("\\r"),
                '\t' => self.buf.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(self.buf, "\\u{:04x}", c as u32);
                }
                c => self.buf.push(c),
            }
        }
        self.buf.push('"');
    }

    /// In pretty mode, breaks the line and indents to `depth`; a no-op in
    /// compact mode.
    fn newline_indent(&mut self, depth: usize) {
        if let Some(width) = self.indent {
            self.buf.push('\n');
            for _ in 0..depth * width {
                self.buf.push(' ');
            }
        }
    }
}

/// Renders a value as compact JSON, with no whitespace between tokens.
///
/// # Examples
///
/// ```
/// use nutmeg::{Map, Value};
/// use nutmeg::output::to_json;
///
/// let mut obj = Map::new();
/// obj.insert("name".to_string(), Value::String("Alice".to_string()));
/// obj.insert("age".to_string(), Value::Integer(30));
///
/// assert_eq!(to_json(&Value::Object(obj)), r#"{"name":"Alice","age":30}"#);
/// ```
pub fn to_json(value: &Value) -> String {
    let mut w = JsonWriter::new(None);
    w.write_value(value, 0);
    w.finish()
}

/// Renders a value as pretty-printed JSON with 2-space indentation, one
/// element or field per line.
///
/// # Examples
///
/// ```
/// use nutmeg::{Map, Value};
/// use nutmeg::output::to_json_pretty;
///
/// let mut obj = Map::new();
/// obj.insert("name".to_string(), Value::String("Alice".to_string()));
/// obj.insert("age".to_string(), Value::Integer(30));
///
/// assert_eq!(
///     to_json_pretty(&Value::Object(obj)),
///     "{\n  \"name\": \"Alice\",\n  \"age\": 30\n}"
/// );
/// ```
pub fn to_json_pretty(value: &Value) -> String {
    let mut w = JsonWriter::new(Some(2));
    w.write_value(value, 0);
    w.finish()
}
