//! # Nutmeg Query Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the Nutmeg query
//! language, a MongoDB-style find syntax for filtering JSON document
//! collections.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - The closed sets of logical and comparison operators
//! - **[query]** - The parsed query: target collection plus filter document
//!
//! ## Quick Start
//!
//! ```text
//! db.users.find({"age": {"$gt": 25}, "city": "New York"})
//! ```
//!
//! This query selects every document in `users` whose `age` exceeds 25 and
//! whose `city` equals `"New York"`.
//!
//! ## Core Concepts
//!
//! ### Query Structure
//!
//! Every query names a collection and supplies a filter document:
//!
//! ```text
//! db.<collection>.find(<filter>)
//! ```
//!
//! The filter is a JSON object. Multiple top-level entries are combined with
//! AND semantics.
//!
//! ### Operators
//!
//! Filter keys beginning with `$` are operators, and only the documented set
//! is recognized:
//!
//! - **Logical** `$and`, `$or`, `$not` - Combine or negate sub-filters
//! - **Comparison** `$gt`, `$lt`, `$gte`, `$lte`, `$eq`, `$ne` - Compare a
//!   field against a literal
//!
//! Any other `$`-prefixed key is rejected at evaluation time rather than
//! silently treated as a field name.
//!
//! ### Filter Values
//!
//! A field entry whose value is a JSON object is a comparison bundle; every
//! operator inside it must hold. Any other value is matched by deep equality:
//!
//! ```text
//! {"age": {"$gte": 25, "$lt": 40}}   bundle: 25 <= age < 40
//! {"city": "Chicago"}                equality
//! ```

pub mod operators;
pub mod query;
pub mod tokens;

pub use operators::{CompareOp, LogicalOp};
pub use query::Query;
pub use tokens::{Token, TokenKind};
