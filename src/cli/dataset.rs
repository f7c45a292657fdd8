//! The bundled sample collection

use crate::value::{Document, Value};

/// Returns the built-in five-person sample collection.
///
/// Handy for trying queries without supplying any input; the `demo`
/// subcommand runs against exactly this set.
pub fn sample_documents() -> Vec<Document> {
    [
        (1, "Alice", 30, "New York"),
        (2, "Bob", 25, "San Francisco"),
        (3, "Charlie", 35, "Los Angeles"),
        (4, "Diana", 28, "New York"),
        (5, "Eve", 40, "Chicago"),
    ]
    .into_iter()
    .map(|(id, name, age, city)| {
        let mut doc = Document::new();
        doc.insert("_id", Value::Integer(id));
        doc.insert("name", Value::String(name.to_string()));
        doc.insert("age", Value::Integer(age));
        doc.insert("city", Value::String(city.to_string()));
        doc
    })
    .collect()
}
