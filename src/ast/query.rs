use crate::value::Map;

/// Root AST node for a parsed query.
///
/// A query names a collection and carries the decoded filter tree. The
/// filter is the object's field map itself, so a non-object filter literal
/// is unrepresentable here; the parser rejects one before constructing the
/// query. An empty map (no filter literal supplied) matches every document.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Collection the query targets
    pub collection: String,

    /// Decoded filter tree (empty when no literal was supplied)
    pub filter: Map,
}
