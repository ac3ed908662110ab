use std::fmt;
use std::ops::Range;

use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    pub kind: Kind,
    /// Text of the token. Quoted strings exclude their quotes; `eof` has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexeme: Option<String>,
    /// 1-based line on which the token ends.
    pub line: usize,
    /// Half-open byte range into the normalized source.
    pub range: Range<usize>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Identifier,  // KEY
    String,      // value, "value" or 'value'
    Reserved,    // export
    Equal,       // =
    Eof          // End of file marker
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::Identifier => "identifier",
            Kind::String => "string",
            Kind::Reserved => "reserved",
            Kind::Equal => "equal",
            Kind::Eof => "eof",
        };
        f.write_str(name)
    }
}
