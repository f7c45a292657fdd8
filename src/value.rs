use std::cmp::Ordering;

use indexmap::IndexMap;
use rust_decimal::{Decimal, prelude::FromPrimitive};

/// Ordered field map backing objects and documents.
///
/// Keys iterate in insertion order and repeated inserts overwrite in place
/// (last write wins), which is what the filter decoder guarantees for
/// duplicate keys in a literal.
pub type Map = IndexMap<String, Value>;

/// A JSON value as seen by the query engine.
///
/// Both decoded filter literals and document fields use this type, with a
/// distinction between integers and floats (unlike standard JSON which only
/// has "number").
///
/// # Equality
///
/// Equality is deep and structural, and unifies the numeric variants:
/// `Integer(30)` equals `Float(30.0)`, including when nested inside arrays
/// and objects. Object equality ignores key order. This is the one equality
/// definition in the crate; the evaluator's `$eq`, `$ne`, and direct
/// field-equality tests all go through it.
///
/// # Examples
///
/// ```
/// use nutmeg::{Map, Value};
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::Boolean(true);
/// let integer = Value::Integer(42);
/// let float = Value::Float(3.14);
/// let string = Value::String("hello".to_string());
///
/// // Collections
/// let array = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
///
/// let mut obj = Map::new();
/// obj.insert("key".to_string(), Value::String("value".to_string()));
/// let object = Value::Object(obj);
///
/// // Numeric variants unify under equality
/// assert_eq!(Value::Integer(30), Value::Float(30.0));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Array of values (homogeneous or heterogeneous)
    Array(Vec<Value>),

    /// Object with string keys, insertion-ordered
    Object(Map),
}

impl Value {
    /// Human-readable type name, used in error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "number",
            Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Ordering between two values, defined only for mutually ordered types.
    ///
    /// Numbers order against numbers (across the `Integer`/`Float` split)
    /// and strings order against strings. Every other pairing returns `None`,
    /// which the evaluator reports as an incomparable-types error rather than
    /// inventing a cross-type order.
    pub fn ordering(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Integer(a), Value::Float(b)) => int_float_cmp(*a, *b),
            (Value::Float(a), Value::Integer(b)) => {
                int_float_cmp(*b, *a).map(Ordering::reverse)
            }
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                int_float_eq(*a, *b)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

/// Exact integer/float equality.
///
/// Goes through `Decimal` so that integers past `f64`'s exact range do not
/// falsely equal their rounded float neighbours; falls back to f64
/// comparison when the float lands outside `Decimal`'s range.
fn int_float_eq(a: i64, b: f64) -> bool {
    if let Some(ad) = Decimal::from_i64(a)
        && let Some(bd) = decimal_from_f64(b)
    {
        return ad == bd;
    }
    a as f64 == b
}

/// Exact integer/float ordering; `None` only when the float is NaN.
fn int_float_cmp(a: i64, b: f64) -> Option<Ordering> {
    if let Some(ad) = Decimal::from_i64(a)
        && let Some(bd) = decimal_from_f64(b)
    {
        return Some(ad.cmp(&bd));
    }
    (a as f64).partial_cmp(&b)
}

// `Decimal::from_f64` rounds floats below Decimal's least step to zero
// instead of refusing them. Underflow is out of range here, same as
// overflow: a nonzero float never reaches the comparison as zero.
fn decimal_from_f64(b: f64) -> Option<Decimal> {
    let bd = Decimal::from_f64(b)?;
    if bd.is_zero() && b != 0.0 {
        return None;
    }
    Some(bd)
}

/// One record of a document collection.
///
/// A document is an insertion-ordered mapping from field names to [`Value`]s.
/// The `_id` field, when present, identifies the document; it is an ordinary
/// field as far as filter matching is concerned.
///
/// Documents are read-only during evaluation: the evaluator looks fields up
/// and clones matching documents into the result, never mutating the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Map,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// The document's `_id` field, if any.
    pub fn id(&self) -> Option<&Value> {
        self.fields.get("_id")
    }

    /// Sets a field, overwriting any previous value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// Borrows the underlying field map.
    pub fn fields(&self) -> &Map {
        &self.fields
    }

    /// Converts the document into a plain object value, e.g. for printing.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<Map> for Document {
    fn from(fields: Map) -> Self {
        Document { fields }
    }
}
