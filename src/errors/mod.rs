//! Error types for secret-to-credential conversion.
//!
//! Every failure is terminal and non-retryable: it indicates a malformed
//! secret record, not a transient fault. The `Display` output of each variant
//! is exactly the human-readable message handed to the host framework, with
//! no added prefix, because downstream consumers match on the error text.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors that can occur while converting a secret record into a credential.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The record carries no data mapping at all.
    #[error("{message}")]
    MissingData { message: String },

    /// A required key is absent from the data mapping.
    #[error("{message}")]
    MissingField { message: String },

    /// A required key's value failed base64 or UTF-8 decoding.
    #[error("{message}")]
    InvalidField { message: String },

    /// The decoded bytes did not open as a non-empty PKCS#12 keystore.
    #[error("{message}")]
    InvalidCertificate { message: String },

    /// No registered converter handles the record's type tag.
    #[error("no converter registered for secret type '{secret_type}'")]
    UnsupportedType { secret_type: String },
}

impl ConversionError {
    /// Create a missing data error.
    pub fn missing_data(message: impl Into<String>) -> Self {
        Self::MissingData { message: message.into() }
    }

    /// Create a missing field error.
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::MissingField { message: message.into() }
    }

    /// Create an invalid field error.
    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::InvalidField { message: message.into() }
    }

    /// Create an invalid certificate error.
    pub fn invalid_certificate(message: impl Into<String>) -> Self {
        Self::InvalidCertificate { message: message.into() }
    }

    /// Create an unsupported type error.
    pub fn unsupported_type(secret_type: impl Into<String>) -> Self {
        Self::UnsupportedType { secret_type: secret_type.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = ConversionError::missing_data("certificate definition contains no data");
        assert!(matches!(err, ConversionError::MissingData { .. }));
        assert_eq!(err.to_string(), "certificate definition contains no data");

        let err = ConversionError::missing_field("missing the password entry");
        assert!(matches!(err, ConversionError::MissingField { .. }));

        let err = ConversionError::invalid_field("invalid password");
        assert!(matches!(err, ConversionError::InvalidField { .. }));

        let err = ConversionError::invalid_certificate("not a keystore");
        assert!(matches!(err, ConversionError::InvalidCertificate { .. }));
    }

    #[test]
    fn test_display_is_message_verbatim() {
        // Consumers parse error text, so Display must not decorate the message.
        let err = ConversionError::invalid_field(
            "certificate credential has an invalid password (must be base64 encoded UTF-8)",
        );
        assert_eq!(
            err.to_string(),
            "certificate credential has an invalid password (must be base64 encoded UTF-8)"
        );
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = ConversionError::unsupported_type("sshKey");
        assert_eq!(err.to_string(), "no converter registered for secret type 'sshKey'");
    }
}
