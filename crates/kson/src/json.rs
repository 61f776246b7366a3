//! JSON text in and out, backed by `serde_json`.
//!
//! Parsed integers become `Int` when they fit 32 bits and `Long` otherwise;
//! other numbers become `Double`. Serialized objects keep insertion order.
use std::{io, str::FromStr};

use crate::{Error, JsValue};

/// Parse a JSON document.
///
/// # Errors
///
/// [`Error::Json`] when the text is not valid JSON.
pub fn from_str(text: &str) -> Result<JsValue, Error> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a JSON document from UTF-8 bytes.
///
/// # Errors
///
/// [`Error::Json`] when the bytes are not valid JSON.
pub fn from_slice(bytes: &[u8]) -> Result<JsValue, Error> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Parse a JSON document from a reader.
///
/// # Errors
///
/// [`Error::Json`] on I/O failures or invalid JSON.
pub fn from_reader<R: io::Read>(reader: R) -> Result<JsValue, Error> {
    Ok(serde_json::from_reader(reader)?)
}

/// Compact JSON text.
///
/// # Errors
///
/// [`Error::Json`] if the JSON engine fails.
pub fn to_string(value: &JsValue) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?)
}

/// Indented JSON text.
///
/// # Errors
///
/// [`Error::Json`] if the JSON engine fails.
pub fn to_string_pretty(value: &JsValue) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write compact JSON text.
///
/// # Errors
///
/// [`Error::Json`] on I/O failures.
pub fn to_writer<W: io::Write>(writer: W, value: &JsValue) -> Result<(), Error> {
    Ok(serde_json::to_writer(writer, value)?)
}

impl FromStr for JsValue {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        from_str(text)
    }
}
