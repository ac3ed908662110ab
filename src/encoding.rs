use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Text encoding used to decode a `.env` file before scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Latin1,
    Utf16le,
}

impl Encoding {
    pub fn decode(&self, bytes: &[u8]) -> Result<String, Error> {
        match self {
            Encoding::Utf8 => Ok(std::str::from_utf8(bytes)?.to_string()),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Encoding::Utf16le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                Ok(String::from_utf16_lossy(&units))
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "latin1" | "binary" | "ascii" => Ok(Encoding::Latin1),
            "utf16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16le),
            _ => Err(Error::UnsupportedEncoding(name.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf8"),
            Encoding::Latin1 => f.write_str("latin1"),
            Encoding::Utf16le => f.write_str("utf16le"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive_aliases() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("binary".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("ucs-2".parse::<Encoding>().unwrap(), Encoding::Utf16le);
        assert!(matches!(
            "base64".parse::<Encoding>(),
            Err(Error::UnsupportedEncoding(name)) if name == "base64"
        ));
    }

    #[test]
    fn latin1_maps_each_byte_to_a_char() {
        let decoded = Encoding::Latin1.decode(b"A=caf\xe9").unwrap();
        assert_eq!(decoded, "A=caf\u{e9}");
    }

    #[test]
    fn utf16le_drops_trailing_odd_byte() {
        let decoded = Encoding::Utf16le.decode(b"A\0=\x001\0\xff").unwrap();
        assert_eq!(decoded, "A=1");
    }

    #[test]
    fn utf8_rejects_invalid_bytes() {
        assert!(matches!(
            Encoding::Utf8.decode(b"A=\xff"),
            Err(Error::InvalidUtf8(_))
        ));
    }
}
