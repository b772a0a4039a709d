//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid selection input, invalid configuration, unknown part sets, and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown part set '{name}'")]
    UnknownPartSet { name: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "boom"));
    }

    #[test]
    fn invalid_argument_message_is_prefixed() {
        let err = Error::InvalidArgument("empty weight table".into());
        assert_eq!(err.to_string(), "invalid argument: empty weight table");
    }

    #[test]
    fn unknown_part_set_names_the_set() {
        let err = Error::UnknownPartSet {
            name: "helmets".into(),
        };
        assert_eq!(err.to_string(), "unknown part set 'helmets'");
    }
}
