//! Error types for SenML operations

use thiserror::Error;

/// Result type alias for SenML operations
pub type Result<T> = std::result::Result<T, SenMLError>;

/// Errors that can occur while encoding or decoding SenML
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SenMLError {
    /// A record carries none of `v`, `s`, `vs`, `vd` or `vb`
    #[error("record {index} has no value attribute")]
    NoValue { index: usize },

    /// Malformed decimal fraction content
    #[error("Invalid decimal fraction: {message}")]
    InvalidDecimal { message: String },

    /// CBOR tag without a registered extension
    #[error("Unsupported CBOR tag: {tag}")]
    UnsupportedTag { tag: u64 },

    /// Invalid field value
    #[error("Invalid value for field '{field}': {value}")]
    InvalidFieldValue { field: String, value: String },

    /// Serialization error
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    /// Deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError { message: String },
}

impl SenMLError {
    /// Create a missing value error for the record at `index`
    pub fn no_value(index: usize) -> Self {
        Self::NoValue { index }
    }

    /// Create an invalid decimal error
    pub fn invalid_decimal<S: Into<String>>(message: S) -> Self {
        Self::InvalidDecimal {
            message: message.into(),
        }
    }

    /// Create an invalid field value error
    pub fn invalid_field_value<S: Into<String>, V: Into<String>>(field: S, value: V) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a deserialization error
    pub fn deserialization<S: Into<String>>(message: S) -> Self {
        Self::DeserializationError {
            message: message.into(),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for SenMLError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::SerializationError {
                message: err.to_string(),
            }
        } else {
            Self::DeserializationError {
                message: err.to_string(),
            }
        }
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::de::Error<std::io::Error>> for SenMLError {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Self::DeserializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::ser::Error<std::io::Error>> for SenMLError {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}
