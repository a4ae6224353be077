//! # credbridge
//!
//! Converts externally stored secret records into validated in-memory
//! credential objects for a host credential-management system. A secret
//! record is a type-tagged key/value mapping of base64-encoded data; the
//! crate validates and decodes it into the matching credential type, with
//! PKCS#12 keystore verification for certificate secrets.
//!
//! ## Architecture
//!
//! ```text
//! SecretRecord → ConverterRegistry → SecretConverter → Credential
//!                                          ↓
//!                     accessor helpers / keystore validation
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use credbridge::{ConverterRegistry, SecretRecord};
//!
//! let registry = ConverterRegistry::with_defaults();
//! let record: SecretRecord = serde_json::from_str(document)?;
//! let credential = registry.convert(&record)?;
//! ```

pub mod convert;
pub mod domain;
pub mod errors;
pub mod keystore;
pub mod secrets;

// Re-export commonly used types and traits
pub use convert::{
    CertificateConverter, ConverterRegistry, SecretConverter, UsernamePasswordConverter,
};
pub use domain::{
    CertificateCredential, Credential, CredentialScope, SecretRecord, UsernamePasswordCredential,
};
pub use errors::{ConversionError, Result};
pub use keystore::{KeystoreError, KeystoreValidator, Pkcs12Validator};
pub use secrets::{SecretBytes, SecretString};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
