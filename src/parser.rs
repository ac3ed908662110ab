use crate::error::SyntaxError;
use crate::token::{Kind, Token};
use std::collections::BTreeMap;
use std::iter::Peekable;
use std::vec::IntoIter;

/// Parsed `KEY -> value` pairs.
pub type EnvMap = BTreeMap<String, String>;

/// Builds the key/value mapping from a token stream.
pub fn parse(tokens: Vec<Token>) -> Result<EnvMap, SyntaxError> {
    Parser::new(tokens).parse()
}

pub struct Parser {
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
        }
    }

    fn at(&mut self) -> Option<&Token> {
        self.tokens.peek()
    }

    fn is_eof(&mut self) -> bool {
        self.at().map_or(true, |token| token.kind == Kind::Eof)
    }

    pub fn parse(mut self) -> Result<EnvMap, SyntaxError> {
        let mut env = EnvMap::new();

        while !self.is_eof() {
            if self.at().is_some_and(|token| token.kind == Kind::Reserved) {
                self.eat(Kind::Reserved)?;
            }
            let (key, value) = self.parse_statement()?;
            env.insert(key, value);
        }

        Ok(env)
    }

    fn eat(&mut self, expecting: Kind) -> Result<Token, SyntaxError> {
        if let Some(token) = self.tokens.next_if(|token| token.kind == expecting) {
            return Ok(token);
        }

        Err(match self.at() {
            Some(token) => SyntaxError::from_token(token, expecting),
            None => SyntaxError::UnexpectedEnd {
                expected: expecting,
            },
        })
    }

    fn parse_statement(&mut self) -> Result<(String, String), SyntaxError> {
        let key = self.eat(Kind::Identifier)?;
        self.eat(Kind::Equal)?;
        let value = self.eat(Kind::String)?;

        let value = value
            .lexeme
            .unwrap_or_default()
            .replace(['\r', '\n'], "");

        Ok((key.lexeme.unwrap_or_default(), value))
    }
}
