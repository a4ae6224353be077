//! Domain layer
//!
//! Pure domain entities with no infrastructure dependencies: the secret
//! record consumed by conversion and the credential values it produces.
//!
//! ## Module Organization
//!
//! - `secret`: `SecretRecord` input type and `CredentialScope`
//! - `credential`: credential value types and the unified `Credential` enum

pub mod credential;
pub mod secret;

// Re-export main types from each module
pub use credential::{CertificateCredential, Credential, UsernamePasswordCredential};
pub use secret::{CredentialScope, SecretRecord};
