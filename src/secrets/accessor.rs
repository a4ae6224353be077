//! Typed field access and decoding helpers for secret records.
//!
//! Each helper takes the failure message to raise, so converters own their
//! exact error wording while the lookup and decode mechanics live here.

use crate::domain::SecretRecord;
use crate::errors::{ConversionError, Result};
use base64::Engine;
use std::collections::HashMap;

/// Requires the record to carry a data mapping.
pub fn require_data<'a>(
    secret: &'a SecretRecord,
    message: &str,
) -> Result<&'a HashMap<String, Vec<u8>>> {
    secret.data().ok_or_else(|| ConversionError::missing_data(message))
}

/// Looks up a required key in the record's data mapping.
pub fn get_non_null_data<'a>(
    secret: &'a SecretRecord,
    key: &str,
    message: &str,
) -> Result<&'a [u8]> {
    secret
        .data()
        .and_then(|data| data.get(key))
        .map(Vec::as_slice)
        .ok_or_else(|| ConversionError::missing_field(message))
}

/// Decodes a base64 value to raw bytes.
pub fn base64_decode(value: &[u8], message: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(value)
        .map_err(|_| ConversionError::invalid_field(message))
}

/// Decodes a base64 value to UTF-8 text.
pub fn base64_decode_to_string(value: &[u8], message: &str) -> Result<String> {
    let decoded = base64_decode(value, message)?;
    String::from_utf8(decoded).map_err(|_| ConversionError::invalid_field(message))
}
