//! Credential value types produced by conversion.
//!
//! A credential is the host framework's in-memory representation of a usable
//! authentication artifact. Each is constructed fresh per conversion call;
//! this crate does not own its storage or lifetime beyond return.

use super::secret::CredentialScope;
use crate::secrets::{SecretBytes, SecretString};
use serde::Serialize;

/// A certificate credential backed by a validated PKCS#12 keystore.
///
/// Invariants, enforced at construction time by the certificate converter:
/// the keystore bytes parse as a PKCS#12 store with at least one entry, and
/// the password is UTF-8 text recovered from base64.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateCredential {
    scope: CredentialScope,
    id: String,
    description: String,
    password: SecretString,
    keystore: SecretBytes,
}

impl CertificateCredential {
    /// Assembles a credential from already-validated parts.
    pub fn new(
        scope: CredentialScope,
        id: impl Into<String>,
        description: impl Into<String>,
        password: SecretString,
        keystore: SecretBytes,
    ) -> Self {
        Self { scope, id: id.into(), description: description.into(), password, keystore }
    }

    /// Visibility scope of the credential.
    pub fn scope(&self) -> CredentialScope {
        self.scope
    }

    /// Credential identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Keystore password.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// Raw PKCS#12 keystore bytes.
    pub fn keystore(&self) -> &SecretBytes {
        &self.keystore
    }
}

/// A username/password credential.
#[derive(Debug, Clone, Serialize)]
pub struct UsernamePasswordCredential {
    scope: CredentialScope,
    id: String,
    description: String,
    username: String,
    password: SecretString,
}

impl UsernamePasswordCredential {
    /// Assembles a credential from already-validated parts.
    pub fn new(
        scope: CredentialScope,
        id: impl Into<String>,
        description: impl Into<String>,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            scope,
            id: id.into(),
            description: description.into(),
            username: username.into(),
            password,
        }
    }

    /// Visibility scope of the credential.
    pub fn scope(&self) -> CredentialScope {
        self.scope
    }

    /// Credential identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Account password.
    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

/// Unified credential type returned by converter dispatch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Credential {
    /// PKCS#12-backed certificate credential.
    Certificate(CertificateCredential),
    /// Username/password credential.
    UsernamePassword(UsernamePasswordCredential),
}

impl Credential {
    /// The type tag this credential was converted from.
    pub fn credential_type(&self) -> &'static str {
        match self {
            Self::Certificate(_) => "certificate",
            Self::UsernamePassword(_) => "usernamePassword",
        }
    }

    /// Credential identifier, regardless of variant.
    pub fn id(&self) -> &str {
        match self {
            Self::Certificate(c) => c.id(),
            Self::UsernamePassword(c) => c.id(),
        }
    }

    /// Visibility scope, regardless of variant.
    pub fn scope(&self) -> CredentialScope {
        match self {
            Self::Certificate(c) => c.scope(),
            Self::UsernamePassword(c) => c.scope(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_credential_accessors() {
        let cred = CertificateCredential::new(
            CredentialScope::Global,
            "cert-1",
            "client cert",
            SecretString::new("changeit"),
            SecretBytes::new(vec![0x30, 0x82]),
        );

        assert_eq!(cred.id(), "cert-1");
        assert_eq!(cred.description(), "client cert");
        assert_eq!(cred.scope(), CredentialScope::Global);
        assert_eq!(cred.password().expose_secret(), "changeit");
        assert_eq!(cred.keystore().expose_secret(), &[0x30, 0x82]);
    }

    #[test]
    fn test_credential_type_tags() {
        let cert = Credential::Certificate(CertificateCredential::new(
            CredentialScope::Global,
            "a",
            "",
            SecretString::new(""),
            SecretBytes::new(vec![]),
        ));
        assert_eq!(cert.credential_type(), "certificate");

        let basic = Credential::UsernamePassword(UsernamePasswordCredential::new(
            CredentialScope::System,
            "b",
            "",
            "admin",
            SecretString::new("pw"),
        ));
        assert_eq!(basic.credential_type(), "usernamePassword");
        assert_eq!(basic.id(), "b");
        assert_eq!(basic.scope(), CredentialScope::System);
    }

    #[test]
    fn test_credential_debug_never_leaks_secrets() {
        let cred = CertificateCredential::new(
            CredentialScope::Global,
            "cert-1",
            "",
            SecretString::new("hunter2"),
            SecretBytes::new(b"keystore-bytes".to_vec()),
        );

        let debug_output = format!("{:?}", cred);
        assert!(!debug_output.contains("hunter2"));
        assert!(!debug_output.contains("keystore-bytes"));
        assert!(debug_output.contains("[REDACTED]"));
    }

    #[test]
    fn test_credential_serialization_redacts_secrets() {
        let cred = Credential::UsernamePassword(UsernamePasswordCredential::new(
            CredentialScope::Global,
            "login",
            "ci account",
            "admin",
            SecretString::new("hunter2"),
        ));

        let json = serde_json::to_string(&cred).unwrap();
        assert!(json.contains("\"type\":\"usernamePassword\""));
        assert!(json.contains("admin"));
        assert!(!json.contains("hunter2"));
    }
}
