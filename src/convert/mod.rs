//! Secret-to-credential converters.
//!
//! Each converter is a pure, synchronous consumer of a [`SecretRecord`]:
//! it either produces a fully validated [`Credential`] or fails with a typed
//! [`crate::errors::ConversionError`] at the first invalid stage. Converters
//! hold no mutable state, so a single instance can serve concurrent callers.

pub mod certificate;
pub mod registry;
pub mod username_password;

pub use certificate::CertificateConverter;
pub use registry::ConverterRegistry;
pub use username_password::UsernamePasswordConverter;

use crate::domain::{Credential, SecretRecord};
use crate::errors::Result;

/// Trait for secret-to-credential converters.
///
/// Implementations must be `Send + Sync` so they can be shared behind the
/// registry.
pub trait SecretConverter: Send + Sync + std::fmt::Debug {
    /// Returns true if this converter handles the given type tag.
    ///
    /// Pure predicate with no side effects or failure mode.
    fn can_convert(&self, secret_type: &str) -> bool;

    /// Converts a secret record into a credential.
    ///
    /// # Errors
    /// A [`crate::errors::ConversionError`] describing the first validation
    /// stage that failed. No partial credential is ever returned.
    fn convert(&self, secret: &SecretRecord) -> Result<Credential>;
}
