//! PKCS#12 keystore validation.
//!
//! The certificate converter delegates format verification to a
//! [`KeystoreValidator`]: open the bytes as a PKCS#12 store with the supplied
//! password and report how many entries it holds. The production
//! implementation wraps the pure-Rust `p12-keystore` parser; the trait seam
//! exists so tests can exercise the converter's message composition without
//! crafting keystore blobs for every parser outcome.

use p12_keystore::KeyStore;
use std::fmt;
use thiserror::Error;

/// Platform name quoted in certificate validation error messages.
pub const PLATFORM: &str = "Rust";

/// Error from the underlying keystore parser, carrying its message verbatim.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct KeystoreError(pub String);

/// Opens PKCS#12 byte blobs and reports their entry count.
pub trait KeystoreValidator: Send + Sync + fmt::Debug {
    /// Parses `data` as a PKCS#12 store protected by `password`.
    ///
    /// # Returns
    /// The number of entries in the store.
    ///
    /// # Errors
    /// [`KeystoreError`] with the parser's message if the bytes or the
    /// bytes/password combination are rejected.
    fn entry_count(&self, data: &[u8], password: &str) -> Result<usize, KeystoreError>;
}

/// Production validator backed by the `p12-keystore` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pkcs12Validator;

impl KeystoreValidator for Pkcs12Validator {
    fn entry_count(&self, data: &[u8], password: &str) -> Result<usize, KeystoreError> {
        let store =
            KeyStore::from_pkcs12(data, password).map_err(|e| KeystoreError(e.to_string()))?;
        Ok(store.entries().count())
    }
}
