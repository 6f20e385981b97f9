//! Extraction error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort extraction of a library file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The library file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The library file is not valid UTF-8, so it cannot be well-formed XML.
    #[error("malformed library XML in {path}: {source}")]
    Encoding {
        path: PathBuf,
        source: std::str::Utf8Error,
    },

    /// The document is not well-formed XML.
    #[error("malformed library XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A `<key>` element has no value element after it.
    #[error("key {key:?} has no value element")]
    MissingValue { key: String },

    /// A track dictionary lacks a field that has no default.
    #[error("track #{index} is missing required field {field}")]
    MissingField { field: &'static str, index: usize },

    /// A field value could not be converted to its attribute type.
    #[error("invalid value {value:?} for {field}: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// Convenience alias for extraction results.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
