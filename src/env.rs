use crate::config::OptionOverrides;
use crate::error::Error;
use std::env::{self, VarError};

pub const ENCODING_VAR: &str = "DOTENV_CONFIG_ENCODING";
pub const PATH_VAR: &str = "DOTENV_CONFIG_PATH";
pub const DEBUG_VAR: &str = "DOTENV_CONFIG_DEBUG";

/// Loader options taken from `DOTENV_CONFIG_*` environment variables.
///
/// A variable that is set but empty is still reported. A value that is not
/// valid unicode is an [`Error::InvalidOption`].
pub fn options() -> Result<OptionOverrides, Error> {
    Ok(OptionOverrides {
        encoding: var(ENCODING_VAR)?,
        path: var(PATH_VAR)?,
        debug: var(DEBUG_VAR)?,
    })
}

fn var(name: &'static str) -> Result<Option<String>, Error> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(value)) => Err(Error::InvalidOption {
            option: name,
            value: value.to_string_lossy().into_owned(),
        }),
    }
}
