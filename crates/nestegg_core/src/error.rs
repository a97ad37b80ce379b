use std::fmt;

/// Errors from parsing a `key=value` parameter override into a typed
/// [`ParamUpdate`](crate::ops::ParamUpdate).
///
/// An empty value is its own case so callers can tell "left blank" apart
/// from an explicit zero instead of coercing both to the same number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamParseError {
    UnknownKey(String),
    EmptyValue { key: &'static str },
    InvalidValue { key: &'static str, raw: String },
}

impl fmt::Display for ParamParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamParseError::UnknownKey(key) => write!(f, "unknown parameter {key:?}"),
            ParamParseError::EmptyValue { key } => {
                write!(f, "parameter {key:?} has no value")
            }
            ParamParseError::InvalidValue { key, raw } => {
                write!(f, "parameter {key:?} cannot be read from {raw:?}")
            }
        }
    }
}

impl std::error::Error for ParamParseError {}
