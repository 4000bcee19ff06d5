use thiserror::Error;

/// Errors raised while bootstrapping the process-wide template configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("template configuration is already installed")]
    AlreadyInstalled,
}

/// Returned by the `FromStr` impls of the closed enums in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown {what}: '{value}'")]
pub struct ParseEnumError {
    pub what: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}
