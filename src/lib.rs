pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod decode;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod value;

pub use ast::{CompareOp, LogicalOp, Query, Token, TokenKind};
pub use decode::DecodeError;
pub use evaluator::{EvalError, Evaluator};
pub use lexer::{LexError, Lexer};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use value::{Document, Map, Value};
