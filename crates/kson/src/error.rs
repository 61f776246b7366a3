use core::fmt;

use crate::value::Kind;

/// An error raised by structural access into a [`JsValue`](crate::JsValue).
///
/// Every structural lookup (`get`, `[]`, `pointer`) fails at the first
/// segment that cannot be resolved and reports that segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The object has no such key.
    KeyNotFound { key: Box<str> },
    /// The array is shorter than the requested index.
    IndexOutOfRange { index: usize, len: usize },
    /// A key was used on a non-object or an index on a non-array.
    TypeMismatch { expected: Kind, actual: Kind },
    /// A JSON pointer that is neither empty nor starts with `/`.
    InvalidPointer { pointer: Box<str> },
    /// A pointer segment applied to an array is not a canonical array index.
    InvalidIndex { segment: Box<str> },
}

impl AccessError {
    pub(crate) fn key_not_found(key: &str) -> Self {
        AccessError::KeyNotFound { key: key.into() }
    }
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        AccessError::IndexOutOfRange { index, len }
    }
    pub(crate) fn type_mismatch(expected: Kind, actual: Kind) -> Self {
        AccessError::TypeMismatch { expected, actual }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::KeyNotFound { key } => write!(f, "Key '{key}' not found"),
            AccessError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} is out of range for an array of length {len}")
            }
            AccessError::TypeMismatch { expected, actual } => {
                write!(f, "Expected {expected}, found {actual}")
            }
            AccessError::InvalidPointer { pointer } => {
                write!(f, "Invalid JSON pointer '{pointer}': must be empty or start with '/'")
            }
            AccessError::InvalidIndex { segment } => {
                write!(f, "'{segment}' is not a valid array index")
            }
        }
    }
}

impl std::error::Error for AccessError {}

/// An error raised while converting data into a tree or moving a tree through
/// JSON text.
#[derive(Debug)]
pub enum Error {
    /// The value has no counterpart among the supported variants.
    UnsupportedType { kind: &'static str },
    /// A failure reported by a `Serialize` implementation.
    Custom(String),
    /// A failure reported by the JSON text engine.
    Json(serde_json::Error),
}

impl Error {
    pub(crate) fn unsupported(kind: &'static str) -> Self {
        tracing::debug!(kind, "Rejecting unsupported type");
        Error::UnsupportedType { kind }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedType { kind } => {
                write!(f, "Unsupported type: {kind} has no JSON value representation")
            }
            Error::Custom(message) => f.write_str(message),
            Error::Json(error) => write!(f, "Invalid JSON: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(AccessError::key_not_found("age"), "Key 'age' not found")]
    #[test_case(
        AccessError::index_out_of_range(3, 2),
        "Index 3 is out of range for an array of length 2"
    )]
    #[test_case(
        AccessError::type_mismatch(Kind::Object, Kind::String),
        "Expected object, found string"
    )]
    #[test_case(
        AccessError::InvalidIndex { segment: "01".into() },
        "'01' is not a valid array index"
    )]
    fn access_error_display(error: AccessError, expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn json_error_has_source() {
        let error: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().starts_with("Invalid JSON: "));
    }
}
