use crate::error::LexingError;
use crate::token::{Kind, Token};

const RESERVED: &str = "export";

/// Tokenizes `source` in a single pass.
pub fn scan(source: &str) -> Result<Vec<Token>, LexingError> {
    Lexer::new(source).scan()
}

/// What a run of bare characters is read as, decided by the token before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bare {
    Identifier,
    Value,
}

pub struct Lexer {
    source_code: String,
    line: usize,
    position: usize,
    start: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            source_code: input.replace("\r\n", "\n"),
            line: 1,
            position: 0,
            start: 0,
            tokens: Vec::new(),
        }
    }

    fn at(&self) -> Option<char> {
        self.source_code[self.position..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn is_eof(&self) -> bool {
        self.position >= self.source_code.len()
    }

    fn create_token(&mut self, kind: Kind, lexeme: Option<String>) {
        self.tokens.push(Token {
            kind,
            lexeme,
            line: self.line,
            range: self.start..self.position,
        });
    }

    pub fn scan(mut self) -> Result<Vec<Token>, LexingError> {
        while !self.is_eof() {
            self.start = self.position;
            self.scan_token()?;
        }

        let end = self.position;
        self.tokens.push(Token {
            kind: Kind::Eof,
            lexeme: None,
            line: self.line,
            range: end..end,
        });

        log::trace!("scanned {} tokens over {} lines", self.tokens.len(), self.line);
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<(), LexingError> {
        let Some(ch) = self.advance() else {
            return Ok(());
        };

        match ch {
            '=' => self.create_token(Kind::Equal, Some(ch.to_string())),
            '"' | '\'' => self.string(ch)?,
            ' ' | '\r' | '\t' => {}
            '#' => {
                while self.at().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            }
            '\n' => self.line += 1,
            c if c.is_ascii_alphanumeric() || is_special(c) => {
                let mode = match self.tokens.last() {
                    Some(token) if token.kind == Kind::Equal => Bare::Value,
                    _ => Bare::Identifier,
                };
                self.bare(c, mode)?;
            }
            c => {
                return Err(LexingError::UnexpectedCharacter {
                    character: c,
                    line: self.line,
                    position: self.start,
                })
            }
        }

        Ok(())
    }

    fn string(&mut self, quote: char) -> Result<(), LexingError> {
        while let Some(c) = self.at() {
            if c == quote {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_eof() {
            return Err(LexingError::UnterminatedString {
                line: self.line,
                position: self.start,
            });
        }

        self.advance(); // closing quote
        let value = self.source_code[self.start + 1..self.position - 1].to_string();
        self.create_token(Kind::String, Some(value));
        Ok(())
    }

    fn bare(&mut self, first: char, mode: Bare) -> Result<(), LexingError> {
        match mode {
            Bare::Value => {
                while self.at().is_some_and(|c| c.is_ascii_alphanumeric() || is_special(c)) {
                    self.advance();
                }
                let value = self.source_code[self.start..self.position].to_string();
                self.create_token(Kind::String, Some(value));
            }
            Bare::Identifier => {
                if !is_identifier(first) {
                    return Err(LexingError::UnexpectedCharacter {
                        character: first,
                        line: self.line,
                        position: self.start,
                    });
                }
                while self.at().is_some_and(is_identifier) {
                    self.advance();
                }
                let ident = self.source_code[self.start..self.position].to_string();
                let kind = if ident == RESERVED {
                    Kind::Reserved
                } else {
                    Kind::Identifier
                };
                self.create_token(kind, Some(ident));
            }
        }
        Ok(())
    }
}

fn is_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_special(c: char) -> bool {
    matches!(
        c,
        '=' | '!' | '@' | '$' | '%' | '^' | '&' | '*' | '(' | ')' | '-' | '_' | '+' | '{'
            | '[' | '}' | ']' | ':' | ';' | '<' | '>' | ',' | '.' | '~' | '`' | '\\' | '|'
    )
}
