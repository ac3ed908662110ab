use crate::token::{Kind, Token};
use std::io;
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IOError: could not read {}: {source}", .path.display())]
    IO {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("EncodingError: unsupported encoding '{0}'")]
    UnsupportedEncoding(String),
    #[error("EncodingError: input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("OptionError: invalid value '{value}' for {option}")]
    InvalidOption { option: &'static str, value: String },
    #[error("ValueError: value of {key} contains a NUL byte")]
    InvalidValue { key: String },
    #[error("LexingError: {0}")]
    Lexing(#[from] LexingError),
    #[error("SyntaxError: {0}")]
    Syntax(#[from] SyntaxError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexingError {
    #[error("unterminated string opened at byte {position} (line {line})")]
    UnterminatedString { line: usize, position: usize },
    #[error("unexpected character '{character}' at line {line}")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        position: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(
        "could not parse {found} on line {line} at {}..{}, expected {expected}",
        .range.start,
        .range.end
    )]
    UnexpectedToken {
        found: Kind,
        expected: Kind,
        line: usize,
        range: Range<usize>,
    },
    #[error("token stream ended without eof, expected {expected}")]
    UnexpectedEnd { expected: Kind },
}

impl SyntaxError {
    pub fn from_token(token: &Token, expected: Kind) -> Self {
        SyntaxError::UnexpectedToken {
            found: token.kind,
            expected,
            line: token.line,
            range: token.range.clone(),
        }
    }
}
