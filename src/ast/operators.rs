use std::fmt;

/// Logical operators combining nested filter objects.
///
/// Recognized only at filter-object level; a logical key inside a
/// comparison bundle is an unsupported operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// Conjunction over an array of filter objects (`$and`)
    And,
    /// Disjunction over an array of filter objects (`$or`)
    Or,
    /// Negation of a single filter object (`$not`)
    Not,
}

impl LogicalOp {
    /// Decodes a `$`-prefixed key into an operator; `None` for anything
    /// outside the closed set.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "$and" => Some(LogicalOp::And),
            "$or" => Some(LogicalOp::Or),
            "$not" => Some(LogicalOp::Not),
            _ => None,
        }
    }

    /// The operator's literal key.
    pub fn key(&self) -> &'static str {
        match self {
            LogicalOp::And => "$and",
            LogicalOp::Or => "$or",
            LogicalOp::Not => "$not",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Comparison operators applied to a field's value inside a bundle.
///
/// Recognized only inside a comparison bundle; a comparison key at
/// filter-object level is an unsupported operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Greater than (`$gt`)
    Gt,
    /// Less than (`$lt`)
    Lt,
    /// Greater than or equal (`$gte`)
    Gte,
    /// Less than or equal (`$lte`)
    Lte,
    /// Deep equality (`$eq`)
    Eq,
    /// Negated deep equality (`$ne`)
    Ne,
}

impl CompareOp {
    /// Decodes a `$`-prefixed key into an operator; `None` for anything
    /// outside the closed set.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "$gt" => Some(CompareOp::Gt),
            "$lt" => Some(CompareOp::Lt),
            "$gte" => Some(CompareOp::Gte),
            "$lte" => Some(CompareOp::Lte),
            "$eq" => Some(CompareOp::Eq),
            "$ne" => Some(CompareOp::Ne),
            _ => None,
        }
    }

    /// The operator's literal key.
    pub fn key(&self) -> &'static str {
        match self {
            CompareOp::Gt => "$gt",
            CompareOp::Lt => "$lt",
            CompareOp::Gte => "$gte",
            CompareOp::Lte => "$lte",
            CompareOp::Eq => "$eq",
            CompareOp::Ne => "$ne",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
