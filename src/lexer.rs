use crate::ast::Token;

/// Errors that can occur during tokenization.
#[derive(Debug, Clone)]
pub enum LexError {
    /// A character that cannot start any token
    UnexpectedChar { position: usize, ch: char },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedChar { position, ch } => {
                write!(f, "Unexpected character '{}' at position {}", ch, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    in_args: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            in_args: false,
        }
    }

    /// Tokenizes an entire query string.
    ///
    /// The returned sequence carries no end-of-input marker; empty input
    /// yields an empty sequence rather than an error.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            match lexer.next_token()? {
                Token::Eof => break,
                token => tokens.push(token),
            }
        }
        Ok(tokens)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    // The filter literal is not tokenized here; it runs to the end of the
    // input, trailing close-parenthesis included, and the parser hands it
    // to the decoder.
    fn read_filter(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            result.push(ch);
            self.advance();
        }
        result
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        match self.current_char() {
            None => Ok(Token::Eof),
            Some('.') => {
                self.advance();
                Ok(Token::Dot)
            }
            Some('(') => {
                self.advance();
                self.in_args = true;
                Ok(Token::LParen)
            }
            Some(')') => {
                self.advance();
                self.in_args = false;
                Ok(Token::RParen)
            }
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                let ident = self.read_identifier();

                match ident.as_str() {
                    "db" => Ok(Token::Db),
                    _ => Ok(Token::Identifier(ident)),
                }
            }
            Some(_) if self.in_args => Ok(Token::Filter(self.read_filter())),
            Some(ch) => Err(LexError::UnexpectedChar {
                position: self.position,
                ch,
            }),
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("db database dbs");
    assert_eq!(lexer.next_token().unwrap(), Token::Db);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Identifier("database".to_string())
    );
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Identifier("dbs".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_filter_absorbs_rest_of_input() {
    let mut lexer = Lexer::new(r#"db.users.find({"age": 30})"#);
    assert_eq!(lexer.next_token().unwrap(), Token::Db);
    assert_eq!(lexer.next_token().unwrap(), Token::Dot);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Identifier("users".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Dot);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Identifier("find".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::LParen);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::Filter(r#"{"age": 30})"#.to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}
