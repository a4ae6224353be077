//! Secret handling utilities.
//!
//! Provides the redacting wrapper types used by credential objects and the
//! field access / base64 decoding helpers the converters are built on.

pub mod accessor;
pub mod types;

pub use types::{SecretBytes, SecretString};
