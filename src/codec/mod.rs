//! Encoding and decoding of plottable records.
//!
//! Any type that implements serde's traits works here; for plottable types
//! those impls come from the `serialize`/`deserialize` helpers of
//! [`two_dimensions`](crate::plottable::two_dimensions) and
//! [`three_dimensions`](crate::plottable::three_dimensions).
//!
//! ```
//! use points::codec;
//! use points::prelude::*;
//!
//! let p: Point = codec::decode_json(r#"{"x": 1, "y": 2}"#).unwrap();
//! assert_eq!(p, Point::new(1.0, 2.0, 0.0));
//!
//! let err = codec::decode_json::<Point>(r#"{"x": 1}"#).unwrap_err();
//! assert!(matches!(err, points::Error::Field(_)));
//! ```

pub mod configuration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::error::{Error, Result};
pub use configuration::{CodecConfig, Format};

pub fn encode_json<T: Serialize>(value: &T) -> Result<String> {
    let text = serde_json::to_string(value).map_err(|e| Error::Encode(e.to_string()))?;
    trace!(format = "json", len = text.len(), "encoded record");
    Ok(text)
}

pub fn encode_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| Error::Encode(e.to_string()))?;
    trace!(format = "json", len = text.len(), pretty = true, "encoded record");
    Ok(text)
}

/// Decodes a JSON record.
///
/// A missing or non-numeric axis field yields [`Error::Field`]; text that is
/// not JSON at all yields [`Error::Decode`].
pub fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    trace!(format = "json", len = text.len(), "decoding record");
    Ok(serde_json::from_str(text)?)
}

pub fn encode_binary<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let bytes = bincode::serde::encode_to_vec(value, bincode::config::standard())?;
    trace!(format = "binary", len = bytes.len(), "encoded record");
    Ok(bytes)
}

/// Decodes a binary record. Trailing bytes after the record are ignored.
pub fn decode_binary<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    trace!(format = "binary", len = bytes.len(), "decoding record");
    let (value, _read) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Ok(value)
}

/// Encodes `value` in the format selected by `config`.
pub fn encode<T: Serialize>(value: &T, config: &CodecConfig) -> Result<Vec<u8>> {
    match (config.format, config.pretty) {
        (Format::Json, false) => encode_json(value).map(String::into_bytes),
        (Format::Json, true) => encode_json_pretty(value).map(String::into_bytes),
        (Format::Binary, _) => encode_binary(value),
    }
}

/// Decodes `bytes` in the format selected by `config`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8], config: &CodecConfig) -> Result<T> {
    match config.format {
        Format::Json => {
            trace!(format = "json", len = bytes.len(), "decoding record");
            Ok(serde_json::from_slice(bytes)?)
        }
        Format::Binary => decode_binary(bytes),
    }
}
