use std::{borrow::Cow, str::FromStr};

use miette::{Result, miette};

use crate::sql::parser::Keyword;

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    Keyword(Keyword),
    Identifier(Cow<'a, str>),
    Integer(i64),
    Float(f64),
    String(Cow<'a, str>),

    Comma,
    Asterisk,
    SemiColon,
    Equal,

    LeftParen,
    RightParen,
}

pub(crate) struct Lexer<'a> {
    pub whole: &'a str,
    pub rest: &'a str,
    pub position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            whole: input,
            rest: input,
            position: 0,
        }
    }

    /// Hands out everything not yet tokenized and marks the input as consumed.
    pub fn take_remaining(&mut self) -> &'a str {
        let remaining = self.rest;
        self.position = self.whole.len();
        self.rest = &self.rest[remaining.len()..];
        remaining
    }

    fn advance(&mut self, len: usize) {
        self.position += len;
        self.rest = &self.rest[len..];
    }

    fn skip_whitespace(&mut self) {
        let non_whitespace_pos = self
            .rest
            .char_indices()
            .find(|(_, ch)| !ch.is_whitespace())
            .map(|(pos, _)| pos)
            .unwrap_or(self.rest.len());

        self.advance(non_whitespace_pos);
    }

    fn consume_word(&mut self) -> &'a str {
        let word_end = self
            .rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(self.rest.len());

        let word = &self.rest[..word_end];
        self.advance(word_end);

        word
    }

    fn consume_string(&mut self, closing: char) -> Result<&'a str> {
        let start = self.position;
        let Some(end_index) = self.rest[1..].find(closing) else {
            return Err(miette!("Unterminated string literal starting at position {}", start));
        };

        let string_value = &self.rest[1..1 + end_index];
        self.advance(end_index + 2);

        Ok(string_value)
    }

    fn consume_number(&mut self) -> Result<Token<'a>> {
        let sign_len = usize::from(self.rest.starts_with('-'));
        let number_end = self.rest[sign_len..]
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .map(|pos| pos + sign_len)
            .unwrap_or(self.rest.len());

        let number_str = &self.rest[..number_end];
        self.advance(number_end);

        if number_str.contains('.') {
            number_str
                .parse::<f64>()
                .map(Token::Float)
                .map_err(|_| miette!("Invalid number format: {}", number_str))
        } else {
            number_str
                .parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| miette!("Invalid number format: {}", number_str))
        }
    }

    fn single(&mut self, token: Token<'a>) -> Result<Token<'a>> {
        self.advance(1);
        Ok(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let char = self.rest.chars().next()?;

        let token = match char {
            ',' => self.single(Token::Comma),
            '*' => self.single(Token::Asterisk),
            ';' => self.single(Token::SemiColon),
            '=' => self.single(Token::Equal),
            '(' => self.single(Token::LeftParen),
            ')' => self.single(Token::RightParen),
            '\'' | '"' => self
                .consume_string(char)
                .map(|s| Token::String(Cow::Borrowed(s))),
            '-' if self.rest[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                self.consume_number()
            }
            _ if char.is_ascii_digit() => self.consume_number(),
            _ if char.is_alphabetic() || char == '_' => {
                let word = self.consume_word();

                match Keyword::from_str(word) {
                    Ok(keyword) => Ok(Token::Keyword(keyword)),
                    Err(_) => Ok(Token::Identifier(Cow::Borrowed(word))),
                }
            }
            _ => Err(miette!(
                "Unexpected character '{}' at position {}",
                char,
                self.position
            )),
        };

        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_token_eq(actual: Option<Result<Token>>, expected: Token) {
        match actual {
            Some(Ok(token)) => assert_eq!(token, expected),
            _ => panic!("Expected token {expected:?}, got {actual:?}"),
        }
    }

    #[test]
    fn test_lexer() {
        let mut lexer = Lexer::new("SELECT * FROM users");

        assert_token_eq(lexer.next(), Token::Keyword(Keyword::Select));
        assert_token_eq(lexer.next(), Token::Asterisk);
        assert_token_eq(lexer.next(), Token::Keyword(Keyword::From));
        assert_token_eq(lexer.next(), Token::Identifier(Cow::from("users")));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lexer_keywords_are_case_insensitive() {
        let mut lexer = Lexer::new("  select   *  From    Users  ");

        assert_token_eq(lexer.next(), Token::Keyword(Keyword::Select));
        assert_token_eq(lexer.next(), Token::Asterisk);
        assert_token_eq(lexer.next(), Token::Keyword(Keyword::From));
        assert_token_eq(lexer.next(), Token::Identifier(Cow::from("Users")));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lexer_insert_values() {
        let mut lexer = Lexer::new("INSERT INTO products VALUES (1, 'Laptop', 999.99, -4);");

        assert_token_eq(lexer.next(), Token::Keyword(Keyword::Insert));
        assert_token_eq(lexer.next(), Token::Keyword(Keyword::Into));
        assert_token_eq(lexer.next(), Token::Identifier(Cow::from("products")));
        assert_token_eq(lexer.next(), Token::Keyword(Keyword::Values));
        assert_token_eq(lexer.next(), Token::LeftParen);
        assert_token_eq(lexer.next(), Token::Integer(1));
        assert_token_eq(lexer.next(), Token::Comma);
        assert_token_eq(lexer.next(), Token::String(Cow::from("Laptop")));
        assert_token_eq(lexer.next(), Token::Comma);
        assert_token_eq(lexer.next(), Token::Float(999.99));
        assert_token_eq(lexer.next(), Token::Comma);
        assert_token_eq(lexer.next(), Token::Integer(-4));
        assert_token_eq(lexer.next(), Token::RightParen);
        assert_token_eq(lexer.next(), Token::SemiColon);
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lexer_double_quoted_string() {
        let mut lexer = Lexer::new("\"tech@example.com\"");
        assert_token_eq(lexer.next(), Token::String(Cow::from("tech@example.com")));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lexer_unterminated_string() {
        let mut lexer = Lexer::new("'Laptop");
        assert!(matches!(lexer.next(), Some(Err(_))));
    }

    #[test]
    fn test_lexer_unexpected_character() {
        let mut lexer = Lexer::new("id > 5");
        assert_token_eq(lexer.next(), Token::Identifier(Cow::from("id")));
        assert!(matches!(lexer.next(), Some(Err(_))));
    }

    #[test]
    fn test_take_remaining() {
        let mut lexer = Lexer::new("SELECT * FROM t WHERE name = 'a b'");
        for _ in 0..5 {
            lexer.next();
        }

        assert_eq!(lexer.take_remaining(), " name = 'a b'");
        assert!(lexer.next().is_none());
    }
}
