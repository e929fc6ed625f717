//! Error types for democfg

use thiserror::Error;

/// Result type for democfg operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for democfg
#[derive(Error, Debug)]
pub enum Error {
    /// A required key is absent from the document
    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// A key is present but holds the wrong kind of value
    #[error("field `{field}`: expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The document (or section) is not a JSON object
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },

    /// JSON syntax or printing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML syntax or printing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File extension not mapped to a document format
    #[error("Unknown config format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    /// Whether this is a structural error in an otherwise well-formed document
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::MissingField { .. } | Error::TypeMismatch { .. } | Error::NotAnObject { .. }
        )
    }
}
