use crate::encoding::Encoding;
use crate::error::Error;
use crate::lexer;
use crate::parser::{self, EnvMap};
use crate::target::TargetEnv;
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PATH: &str = ".env";

/// Resolved loader settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOptions {
    pub path: Option<PathBuf>,
    pub encoding: Option<Encoding>,
    pub debug: bool,
}

impl ConfigOptions {
    pub fn path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH))
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding.unwrap_or_default()
    }
}

/// Unvalidated option values as they arrive from the command line or the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub encoding: Option<String>,
    pub path: Option<String>,
    pub debug: Option<String>,
}

impl OptionOverrides {
    pub fn is_empty(&self) -> bool {
        self.encoding.is_none() && self.path.is_none() && self.debug.is_none()
    }

    /// Stores `value` under the option `name`. Returns false for unknown names.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "encoding" => &mut self.encoding,
            "path" => &mut self.path,
            "debug" => &mut self.debug,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Field-wise merge where values from `later` win.
    pub fn merge(self, later: OptionOverrides) -> Self {
        Self {
            encoding: later.encoding.or(self.encoding),
            path: later.path.or(self.path),
            debug: later.debug.or(self.debug),
        }
    }

    pub fn resolve(&self) -> Result<ConfigOptions, Error> {
        let encoding = self
            .encoding
            .as_deref()
            .map(str::parse::<Encoding>)
            .transpose()?;

        let debug = match self.debug.as_deref() {
            None => false,
            Some(value) => parse_flag(value).ok_or_else(|| Error::InvalidOption {
                option: "debug",
                value: value.to_string(),
            })?,
        };

        Ok(ConfigOptions {
            path: self.path.as_ref().map(PathBuf::from),
            encoding,
            debug,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reads and decodes the file named by `options`.
pub fn read_source(options: &ConfigOptions) -> Result<String, Error> {
    let path = options.path();
    let bytes = fs::read(&path).map_err(|source| Error::IO { path, source })?;
    options.encoding().decode(&bytes)
}

/// Reads the file named by `options`, parses it and merges every key that is
/// not already present into `target`.
///
/// The returned map holds every parsed key, including the ones that were
/// skipped because `target` already defined them. On error `target` is left
/// untouched.
pub fn load(options: &ConfigOptions, target: &mut TargetEnv) -> Result<EnvMap, Error> {
    let path = options.path();
    let source = read_source(options)?;
    let tokens = lexer::scan(&source)?;
    let parsed = parser::parse(tokens)?;

    // The process environment cannot hold NUL bytes.
    if *target == TargetEnv::Process {
        if let Some((key, _)) = parsed.iter().find(|(_, value)| value.contains('\0')) {
            return Err(Error::InvalidValue { key: key.clone() });
        }
    }

    if options.debug {
        debug!("parsed {} keys from {}", parsed.len(), path.display());
    }

    for (key, value) in &parsed {
        if target.contains_key(key) {
            if options.debug {
                warn!("\"{}\" is already defined and will not be overwritten", key);
            }
            continue;
        }

        target.set(key, value);
        if options.debug {
            debug!("set {}", key);
        }
    }

    Ok(parsed)
}

/// [`load`] against the process environment.
pub fn config(options: &ConfigOptions) -> Result<EnvMap, Error> {
    load(options, &mut TargetEnv::Process)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_overrides_win_per_field() {
        let from_env = OptionOverrides {
            encoding: Some("latin1".to_string()),
            path: Some("/from/env".to_string()),
            debug: None,
        };
        let from_args = OptionOverrides {
            path: Some("/from/args".to_string()),
            ..OptionOverrides::default()
        };

        let merged = from_env.merge(from_args);
        assert_eq!(merged.encoding.as_deref(), Some("latin1"));
        assert_eq!(merged.path.as_deref(), Some("/from/args"));
        assert_eq!(merged.debug, None);
    }

    #[test]
    fn resolve_defaults_when_empty() {
        let options = OptionOverrides::default().resolve().unwrap();
        assert_eq!(options, ConfigOptions::default());
        assert_eq!(options.path(), PathBuf::from(".env"));
        assert_eq!(options.encoding(), Encoding::Utf8);
    }

    #[test]
    fn resolve_parses_encoding_and_debug() {
        let overrides = OptionOverrides {
            encoding: Some("UCS2".to_string()),
            path: Some("tests/.env".to_string()),
            debug: Some("TRUE".to_string()),
        };
        let options = overrides.resolve().unwrap();
        assert_eq!(options.encoding, Some(Encoding::Utf16le));
        assert_eq!(options.path, Some(PathBuf::from("tests/.env")));
        assert!(options.debug);
    }

    #[test]
    fn resolve_rejects_non_boolean_debug() {
        let overrides = OptionOverrides {
            debug: Some("maybe".to_string()),
            ..OptionOverrides::default()
        };
        assert!(matches!(
            overrides.resolve(),
            Err(Error::InvalidOption { option: "debug", .. })
        ));
    }

    #[test]
    fn set_ignores_unknown_names() {
        let mut overrides = OptionOverrides::default();
        assert!(!overrides.set("foo", "bar".to_string()));
        assert!(overrides.is_empty());
        assert!(overrides.set("debug", "true".to_string()));
        assert_eq!(overrides.debug.as_deref(), Some("true"));
    }
}
