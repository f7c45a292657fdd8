use crate::{
    ast::{Query, Token, TokenKind},
    decode::{self, DecodeError},
    value::{Map, Value},
};

/// Errors that can occur during parsing.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The token at the current grammar position has the wrong kind
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// A function other than `find` was called on the collection
    UnsupportedFunction { name: String },

    /// The filter literal is not a well-formed JSON object
    MalformedFilterLiteral { message: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "Expected {}, got {}", expected, found)
            }
            ParseError::UnsupportedFunction { name } => {
                write!(f, "Unsupported function '{}'", name)
            }
            ParseError::MalformedFilterLiteral { message } => {
                write!(f, "Invalid JSON filter: {}", message)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<DecodeError> for ParseError {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::Malformed { message } => ParseError::MalformedFilterLiteral { message },
        }
    }
}

/// Recursive-descent parser over a token sequence.
///
/// The grammar is a single production:
///
/// ```text
/// query := DB DOT IDENTIFIER DOT IDENTIFIER LPAREN [FILTER] RPAREN
/// ```
///
/// with the close-parenthesis slot satisfied by the one the lexer folded
/// into the `FILTER` token whenever a filter literal is present.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn current_kind(&self) -> TokenKind {
        self.tokens
            .get(self.position)
            .map(Token::kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        let found = self.current_kind();
        if found == expected {
            self.position += 1;
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected, found })
        }
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.tokens.get(self.position) {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.position += 1;
                Ok(name)
            }
            _ => Err(ParseError::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: self.current_kind(),
            }),
        }
    }

    /// Parses a complete query.
    ///
    /// The first identifier is bound as the collection name; the second must
    /// be `find`. A missing filter literal yields an empty filter object,
    /// which matches every document. Tokens after the query are rejected.
    pub fn parse(&mut self) -> Result<Query, ParseError> {
        self.expect(TokenKind::Db)?;
        self.expect(TokenKind::Dot)?;
        let collection = self.expect_identifier()?;
        self.expect(TokenKind::Dot)?;
        let function = self.expect_identifier()?;
        if function != "find" {
            return Err(ParseError::UnsupportedFunction { name: function });
        }
        self.expect(TokenKind::LParen)?;

        let filter = if let Some(Token::Filter(raw)) = self.tokens.get(self.position) {
            let raw = raw.clone();
            self.position += 1;
            decode_filter(&raw)?
        } else {
            self.expect(TokenKind::RParen)?;
            Map::new()
        };

        self.expect(TokenKind::Eof)?;

        Ok(Query { collection, filter })
    }
}

// The raw filter text still carries the query's closing parenthesis (the
// lexer's catch-all absorbed it). Exactly one is stripped here; its absence
// means the query was never closed.
fn decode_filter(raw: &str) -> Result<Map, ParseError> {
    let text = raw.trim_end();
    let (body, closed) = match text.strip_suffix(')') {
        Some(stripped) => (stripped, true),
        None => (text, false),
    };

    let value = decode::decode(body)?;

    if !closed {
        return Err(ParseError::UnexpectedToken {
            expected: TokenKind::RParen,
            found: TokenKind::Eof,
        });
    }

    match value {
        Value::Object(filter) => Ok(filter),
        other => Err(ParseError::MalformedFilterLiteral {
            message: format!("expected a JSON object, got {}", other.type_name()),
        }),
    }
}
