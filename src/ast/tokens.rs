use std::fmt;

/// A lexical token produced by the scanner.
///
/// Tokens are immutable once produced and consumed strictly left to right.
/// Payload-bearing variants keep the matched text; fixed variants carry
/// nothing beyond their kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// The literal keyword `db` that starts every query.
    Db,

    /// Path separator
    ///
    /// # Examples
    /// ```text
    /// db.users.find()
    ///   ^     ^
    /// ```
    Dot,

    /// Collection or function name
    ///
    /// Must start with an ASCII letter or underscore, followed by ASCII
    /// letters, digits, or underscores.
    ///
    /// # Examples
    /// ```text
    /// users
    /// find
    /// order_items
    /// ```
    Identifier(String),

    /// Left parenthesis opening the argument list.
    LParen,

    /// Right parenthesis closing an empty argument list.
    ///
    /// Only emitted when no filter literal is present; with a filter, the
    /// closing paren is folded into [`Token::Filter`] and stripped again by
    /// the parser.
    RParen,

    /// Raw filter literal: the remainder of the line once the scanner is
    /// inside the argument list and no other rule matches.
    ///
    /// The text is passed through unmodified, trailing close-paren included.
    ///
    /// # Examples
    /// ```text
    /// {"age": {"$gt": 25}})
    /// ```
    Filter(String),

    /// End of input.
    ///
    /// Never part of the token sequence itself; the parser synthesizes it
    /// when it reads past the last token.
    Eof,
}

impl Token {
    /// The token's kind, for expected-vs-found error reporting.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Db => TokenKind::Db,
            Token::Dot => TokenKind::Dot,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Filter(_) => TokenKind::Filter,
            Token::Eof => TokenKind::Eof,
        }
    }
}

/// Token kind without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Db,
    Dot,
    Identifier,
    LParen,
    RParen,
    Filter,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Db => "DB",
            TokenKind::Dot => "DOT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Filter => "FILTER",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{}", name)
    }
}
