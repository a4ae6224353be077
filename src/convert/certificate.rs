//! Converter for `certificate` secrets backed by PKCS#12 keystores.

use super::SecretConverter;
use crate::domain::{CertificateCredential, Credential, SecretRecord};
use crate::errors::{ConversionError, Result};
use crate::keystore::{KeystoreValidator, Pkcs12Validator, PLATFORM};
use crate::secrets::accessor;
use crate::secrets::{SecretBytes, SecretString};
use std::sync::Arc;

/// Converts a `certificate` secret record into a [`CertificateCredential`].
///
/// The record's data mapping must carry base64-encoded `password` and
/// `certificate` entries, and the decoded certificate bytes must open as a
/// PKCS#12 keystore with at least one entry under the decoded password.
///
/// Validation order is fixed and short-circuits on the first failure:
/// data presence, password presence, password decode, certificate presence,
/// certificate decode, keystore verification. No partial credential is ever
/// returned. The converter is stateless between calls and safe to invoke
/// concurrently on independent records.
#[derive(Debug, Clone)]
pub struct CertificateConverter {
    validator: Arc<dyn KeystoreValidator>,
}

impl CertificateConverter {
    /// Creates a converter using the production PKCS#12 validator.
    pub fn new() -> Self {
        Self::with_validator(Arc::new(Pkcs12Validator))
    }

    /// Creates a converter with a custom keystore validator.
    pub fn with_validator(validator: Arc<dyn KeystoreValidator>) -> Self {
        Self { validator }
    }
}

impl Default for CertificateConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretConverter for CertificateConverter {
    fn can_convert(&self, secret_type: &str) -> bool {
        secret_type == "certificate"
    }

    fn convert(&self, secret: &SecretRecord) -> Result<Credential> {
        accessor::require_data(secret, "certificate definition contains no data")?;

        let password_base64 = accessor::get_non_null_data(
            secret,
            "password",
            "certificate credential is missing the password entry",
        )?;
        let password = accessor::base64_decode_to_string(
            password_base64,
            "certificate credential has an invalid password (must be base64 encoded UTF-8)",
        )?;

        let cert_base64 = accessor::get_non_null_data(
            secret,
            "certificate",
            "certificate credential is missing the certificate entry",
        )?;
        let cert_data = accessor::base64_decode(
            cert_base64,
            "certificate credential has an invalid certificate (must be base64 encoded data)",
        )?;

        match self.validator.entry_count(&cert_data, &password) {
            Ok(0) => Err(ConversionError::invalid_certificate(format!(
                "certificate credential has an invalid certificate (encoded data is not a \
                 valid PKCS#12 format certificate understood by {PLATFORM})"
            ))),
            Ok(_) => Ok(Credential::Certificate(CertificateCredential::new(
                secret.scope(),
                secret.id(),
                secret.description(),
                SecretString::new(password),
                SecretBytes::new(cert_data),
            ))),
            // The parser's message is appended as context; the trailing space
            // before the closing parenthesis is part of the published format.
            Err(err) => Err(ConversionError::invalid_certificate(format!(
                "certificate credential has an invalid certificate (encoded data is not a \
                 valid PKCS#12 format certificate understood by {PLATFORM} - {err} )"
            ))),
        }
    }
}
