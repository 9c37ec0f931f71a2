//! Error type for encoding and decoding plottable values.

/// Errors that can occur while encoding or decoding a plottable record
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A required axis field is absent, or present but not a number.
    #[error("missing or invalid field: {0}")]
    Field(String),

    /// The input is not a well-formed record at all (bad syntax, truncated bytes).
    #[error("malformed input: {0}")]
    Decode(String),

    /// The value could not be written in the requested format.
    #[error("encoding failed: {0}")]
    Encode(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => Error::Field(err.to_string()),
            _ => Error::Decode(err.to_string()),
        }
    }
}

impl From<bincode::error::DecodeError> for Error {
    fn from(err: bincode::error::DecodeError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<bincode::error::EncodeError> for Error {
    fn from(err: bincode::error::EncodeError) -> Self {
        Error::Encode(err.to_string())
    }
}
