//! Response decoding errors.

use thiserror::Error;

/// A successful response whose body does not match the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[error("Malformed JSON: {0}")]
    Json(String),

    /// The body is valid JSON but lacks or mistypes expected fields.
    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Self::Shape(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => Self::Json(err.to_string()),
        }
    }
}
