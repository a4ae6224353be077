//! Converter registry
//!
//! Replaces the host framework's discovery mechanism with explicit
//! registration: converters are registered at startup and looked up by the
//! record's type tag at conversion time.

use super::{CertificateConverter, SecretConverter, UsernamePasswordConverter};
use crate::domain::{Credential, SecretRecord};
use crate::errors::{ConversionError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// Registry of secret converters.
///
/// Dispatch asks each registered converter whether it handles the record's
/// type tag, in registration order, and delegates to the first match.
#[derive(Debug, Clone, Default)]
pub struct ConverterRegistry {
    converters: Vec<Arc<dyn SecretConverter>>,
}

impl ConverterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { converters: Vec::new() }
    }

    /// Creates a registry preloaded with the built-in converters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CertificateConverter::new()));
        registry.register(Arc::new(UsernamePasswordConverter));
        registry
    }

    /// Registers a converter.
    pub fn register(&mut self, converter: Arc<dyn SecretConverter>) {
        info!(converter = ?converter, "Registering secret converter");
        self.converters.push(converter);
    }

    /// Returns the first registered converter that handles `secret_type`.
    pub fn converter_for(&self, secret_type: &str) -> Option<Arc<dyn SecretConverter>> {
        self.converters.iter().find(|c| c.can_convert(secret_type)).cloned()
    }

    /// Number of registered converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns true if no converters are registered.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Converts a record by dispatching on its type tag.
    ///
    /// # Errors
    /// [`ConversionError::UnsupportedType`] if no registered converter
    /// handles the tag; otherwise whatever the matched converter raises.
    pub fn convert(&self, secret: &SecretRecord) -> Result<Credential> {
        let converter = self
            .converter_for(secret.secret_type())
            .ok_or_else(|| ConversionError::unsupported_type(secret.secret_type()))?;

        debug!(
            secret_type = %secret.secret_type(),
            id = %secret.id(),
            "Dispatching secret conversion"
        );
        converter.convert(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use std::collections::HashMap;

    #[test]
    fn test_registry_creation() {
        let registry = ConverterRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.converter_for("certificate").is_none());
    }

    #[test]
    fn test_with_defaults_handles_builtin_types() {
        let registry = ConverterRegistry::with_defaults();
        assert_eq!(registry.len(), 2);
        assert!(registry.converter_for("certificate").is_some());
        assert!(registry.converter_for("usernamePassword").is_some());
        assert!(registry.converter_for("sshKey").is_none());
    }

    #[test]
    fn test_dispatch_unsupported_type() {
        let registry = ConverterRegistry::with_defaults();
        let record = SecretRecord::new("sshKey", "key-1");

        let err = registry.convert(&record).unwrap_err();
        assert!(matches!(err, ConversionError::UnsupportedType { .. }));
        assert_eq!(err.to_string(), "no converter registered for secret type 'sshKey'");
    }

    #[test]
    fn test_dispatch_reaches_matching_converter() {
        let registry = ConverterRegistry::with_defaults();

        let mut data = HashMap::new();
        let b64 = |v: &[u8]| {
            base64::engine::general_purpose::STANDARD.encode(v).into_bytes()
        };
        data.insert("username".to_string(), b64(b"admin"));
        data.insert("password".to_string(), b64(b"hunter2"));
        let record = SecretRecord::new("usernamePassword", "login-1").with_data(data);

        let credential = registry.convert(&record).unwrap();
        assert_eq!(credential.credential_type(), "usernamePassword");
        assert_eq!(credential.id(), "login-1");
    }

    #[test]
    fn test_dispatch_propagates_converter_error() {
        let registry = ConverterRegistry::with_defaults();
        let record = SecretRecord::new("certificate", "cert-1");

        let err = registry.convert(&record).unwrap_err();
        assert_eq!(err.to_string(), "certificate definition contains no data");
    }

    #[test]
    fn test_registration_order_wins() {
        #[derive(Debug)]
        struct CatchAll;
        impl SecretConverter for CatchAll {
            fn can_convert(&self, _secret_type: &str) -> bool {
                true
            }
            fn convert(&self, secret: &SecretRecord) -> Result<Credential> {
                Err(ConversionError::unsupported_type(secret.secret_type()))
            }
        }

        let mut registry = ConverterRegistry::new();
        registry.register(Arc::new(UsernamePasswordConverter));
        registry.register(Arc::new(CatchAll));

        // The earlier, specific converter is consulted first.
        let handler = registry.converter_for("usernamePassword").unwrap();
        assert!(handler.can_convert("usernamePassword"));

        // The catch-all picks up everything else.
        assert!(registry.converter_for("anything").is_some());
    }
}
