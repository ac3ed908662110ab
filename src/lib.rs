//! Lexer and parser for `KEY=value` (`.env`) configuration files.
//!
//! [`scan`] turns source text into [`Token`]s and [`parse`] folds them into an
//! [`EnvMap`]. [`config`] and [`load`] wrap both with file reading, decoding
//! and a merge into a [`TargetEnv`] that never overwrites existing keys.

pub mod cli;
mod config;
mod encoding;
pub mod env;
mod error;
mod lexer;
mod parser;
mod target;
mod token;

pub use config::{config, load, read_source, ConfigOptions, OptionOverrides, DEFAULT_PATH};
pub use encoding::Encoding;
pub use error::{Error, LexingError, SyntaxError};
pub use lexer::{scan, Lexer};
pub use parser::{parse, EnvMap, Parser};
pub use target::TargetEnv;
pub use token::{Kind, Token};
